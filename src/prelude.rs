//! Prelude module for convenient imports
//!
//! Import everything you need with: `use bank::prelude::*;`

// Domain types
pub use crate::domain::{
    Account, AccountId, Amount, AmountType, Bank, BankId, DomainError, Instruction,
};

// Storage types
pub use crate::storage::{AccountStore, ConcurrentBank, StorageError};

// Engine types
pub use crate::engine::{EngineError, LedgerProcessor};

// IO types
pub use crate::io::{CsvInstructionStream, IoError, RawInstructionRecord, write_snapshot};

// Streaming types
pub use crate::streaming::{AbortOnError, ErrorPolicy, ProcessingSession, SilentSkip, SkipErrors};

// App types
pub use crate::app::{AppError, CliApp, CliConfig, StdoutWriter, init_logging, run_ledger};
