use async_trait::async_trait;
use tokio::io::AsyncWrite;

use super::error::StorageError;
use super::traits::{AccountStore, snapshot_record, write_snapshot_records};
use crate::domain::{Account, AccountId, AmountType, Bank, DomainError};

impl<A: AmountType> Bank<A> {
    fn require(&self, owner: &str) -> Result<AccountId, StorageError> {
        self.position_of(owner)
            .ok_or_else(|| StorageError::NotFound(owner.to_string()))
    }
}

/// Single-threaded store: the bank's own ordered collection, looked up by first matching owner
#[async_trait]
impl<A: AmountType> AccountStore<A> for Bank<A> {
    fn open(&mut self, account: Account<A>) -> Result<(), StorageError> {
        self.add_account(account);
        Ok(())
    }

    fn contains(&self, owner: &str) -> bool {
        self.contains_owner(owner)
    }

    fn read(&self, owner: &str) -> Option<Account<A>> {
        self.find_by_owner(owner).cloned()
    }

    fn try_update<F>(&mut self, owner: &str, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>,
    {
        let id = self.require(owner)?;
        let account = self
            .account_mut(id)
            .ok_or_else(|| StorageError::NotFound(owner.to_string()))?;
        update_fn(account)?;
        Ok(())
    }

    fn transfer(&mut self, from: &str, to: &str, amount: A) -> Result<(), StorageError> {
        let source = self.require(from)?;
        let destination = self.require(to)?;
        self.transfer_between(source, destination, amount)?;
        Ok(())
    }

    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let records: Vec<_> = self.accounts().iter().map(snapshot_record).collect();
        write_snapshot_records(writer, records).await
    }
}
