pub mod bank_store;
pub mod concurrent;
pub mod error;
pub mod traits;

// Re-export commonly used types
pub use concurrent::ConcurrentBank;
pub use error::StorageError;
pub use traits::{AccountStore, SNAPSHOT_HEADER};
