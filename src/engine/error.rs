use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Engine-level errors for instruction processing
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Account already open for owner: {0}")]
    DuplicateOwner(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

// Domain failures surfaced by a store are reported as `Domain`, not `Storage`
impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DomainError(e) => Self::Domain(e),
            other => Self::Storage(other),
        }
    }
}

impl EngineError {
    /// Whether this error is the insufficient-funds rejection
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::Domain(DomainError::InsufficientFunds))
    }
}
