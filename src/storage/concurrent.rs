use async_trait::async_trait;
use dashmap::{DashMap, Entry};
use tokio::io::AsyncWrite;
use tracing::{error, warn};

use super::error::StorageError;
use super::traits::{AccountStore, snapshot_record, write_snapshot_records};
use crate::domain::{Account, Amount, AmountType, BankId, DomainError, apply_self_transfer};

/// Concurrent in-memory bank using DashMap.
///
/// Every debit and credit runs under the owning account's shard lock. A
/// transfer never holds two entries at once, so the money is briefly in
/// flight between the debit and the credit.
pub struct ConcurrentBank<A: AmountType = Amount> {
    id: BankId,
    name: String,
    accounts: DashMap<String, Account<A>>,
}

impl<A: AmountType> ConcurrentBank<A> {
    /// Create a new empty concurrent bank
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BankId::next(),
            name: name.into(),
            accounts: DashMap::new(),
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Register an account under its owner, pointing its back-reference here
    pub fn open_account(&self, mut account: Account<A>) -> Result<(), StorageError> {
        let owner = account.owner().unwrap_or_default().to_string();

        match self.accounts.entry(owner) {
            Entry::Occupied(e) => Err(StorageError::AlreadyExists(e.key().clone())),
            Entry::Vacant(e) => {
                account.set_bank(self.id);
                e.insert(account);
                Ok(())
            }
        }
    }

    pub fn get(&self, owner: &str) -> Option<Account<A>> {
        self.accounts.get(owner).map(|r| r.value().clone())
    }

    /// Run `update_fn` on the account while holding its lock
    pub fn update<F>(&self, owner: &str, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>,
    {
        let mut account = self
            .accounts
            .get_mut(owner)
            .ok_or_else(|| StorageError::NotFound(owner.to_string()))?;
        update_fn(account.value_mut())?;
        Ok(())
    }

    /// Debit `from`, then credit `to`, refunding `from` if the credit fails
    pub fn transfer_between(&self, from: &str, to: &str, amount: A) -> Result<(), StorageError> {
        if from == to {
            return self.update(from, |acc| apply_self_transfer(acc, amount));
        }

        if !self.accounts.contains_key(to) {
            return Err(StorageError::NotFound(to.to_string()));
        }

        self.update(from, |acc| acc.debit(amount))?;

        if let Err(e) = self.update(to, |acc| acc.credit(amount)) {
            warn!(from, to, %amount, error = %e, "Credit failed, refunding source");
            return Err(self.refund(from, amount, e));
        }

        Ok(())
    }

    /// Credit `amount` back to `owner`; always hands back `cause`
    fn refund(&self, owner: &str, amount: A, cause: StorageError) -> StorageError {
        if let Err(e) = self.update(owner, |acc| acc.credit(amount)) {
            error!(owner, %amount, error = %e, "Refund failed, debited amount not restored");
        }
        cause
    }
}

#[async_trait]
impl<A: AmountType> AccountStore<A> for ConcurrentBank<A> {
    fn open(&mut self, account: Account<A>) -> Result<(), StorageError> {
        self.open_account(account)
    }

    fn contains(&self, owner: &str) -> bool {
        self.accounts.contains_key(owner)
    }

    fn read(&self, owner: &str) -> Option<Account<A>> {
        self.get(owner)
    }

    fn try_update<F>(&mut self, owner: &str, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>,
    {
        self.update(owner, update_fn)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: A) -> Result<(), StorageError> {
        self.transfer_between(from, to, amount)
    }

    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        // DashMap holds brief per-shard locks during iteration; records are
        // collected before awaiting so no lock is held across a write
        let records: Vec<_> = self
            .accounts
            .iter()
            .map(|entry| snapshot_record(entry.value()))
            .collect();

        write_snapshot_records(writer, records).await
    }
}

// Implement AccountStore for Arc<ConcurrentBank> so tasks can share one bank
#[async_trait]
impl<A: AmountType> AccountStore<A> for std::sync::Arc<ConcurrentBank<A>> {
    fn open(&mut self, account: Account<A>) -> Result<(), StorageError> {
        self.open_account(account)
    }

    fn contains(&self, owner: &str) -> bool {
        self.accounts.contains_key(owner)
    }

    fn read(&self, owner: &str) -> Option<Account<A>> {
        self.get(owner)
    }

    fn try_update<F>(&mut self, owner: &str, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>,
    {
        self.update(owner, update_fn)
    }

    fn transfer(&mut self, from: &str, to: &str, amount: A) -> Result<(), StorageError> {
        self.transfer_between(from, to, amount)
    }

    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send,
    {
        (**self).snapshot(writer).await
    }
}
