use tokio::io::AsyncWrite;

use super::error::IoError;
use crate::domain::AmountType;
use crate::storage::AccountStore;

/// Write a balance snapshot in CSV format
pub async fn write_snapshot<A, S, W>(store: &S, writer: W) -> Result<(), IoError>
where
    A: AmountType,
    S: AccountStore<A>,
    W: AsyncWrite + Unpin + Send,
{
    store.snapshot(writer).await?;
    Ok(())
}
