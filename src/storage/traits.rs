use async_trait::async_trait;
use csv_async::AsyncWriter;
use tokio::io::AsyncWrite;
use tokio_util::compat::TokioAsyncWriteCompatExt;

use super::error::StorageError;
use crate::domain::{Account, AmountType, DomainError};

/// Header row of every balance snapshot
pub const SNAPSHOT_HEADER: [&str; 2] = ["owner", "balance"];

/// Owner-keyed account storage with pluggable backends
#[async_trait]
pub trait AccountStore<A: AmountType>: Send + Sync {
    /// Take ownership of a newly opened account
    fn open(&mut self, account: Account<A>) -> Result<(), StorageError>;

    /// Check whether an account exists for `owner`
    fn contains(&self, owner: &str) -> bool;

    /// Non-locking read (clones the account data)
    fn read(&self, owner: &str) -> Option<Account<A>>;

    /// Atomic read-modify-write with validation
    fn try_update<F>(&mut self, owner: &str, update_fn: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Account<A>) -> Result<(), DomainError>;

    /// Debit `from`, then credit `to`
    fn transfer(&mut self, from: &str, to: &str, amount: A) -> Result<(), StorageError>;

    /// Async snapshot of all balances to a writer
    async fn snapshot<W>(&self, writer: W) -> Result<(), StorageError>
    where
        W: AsyncWrite + Unpin + Send;
}

/// One snapshot record; an unset owner or balance is written as an empty field
pub(crate) fn snapshot_record<A: AmountType>(account: &Account<A>) -> [String; 2] {
    [
        account.owner().unwrap_or_default().to_string(),
        account
            .balance()
            .map(|b| b.to_decimal_string())
            .unwrap_or_default(),
    ]
}

/// Write the header and `records` as CSV, quoting owners where needed
pub(crate) async fn write_snapshot_records<W, I>(writer: W, records: I) -> Result<(), StorageError>
where
    W: AsyncWrite + Unpin + Send,
    I: IntoIterator<Item = [String; 2]> + Send,
    I::IntoIter: Send,
{
    let mut csv_writer = AsyncWriter::from_writer(writer.compat_write());

    csv_writer.write_record(SNAPSHOT_HEADER).await?;
    for record in records {
        csv_writer.write_record(&record).await?;
    }

    // Flushes and hands the writer back, so nothing is left to flush on drop
    csv_writer.into_inner().await?;
    Ok(())
}
