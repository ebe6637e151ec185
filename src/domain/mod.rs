pub mod account;
pub mod amount;
pub mod bank;
pub mod error;
pub mod instruction;
pub mod operations;

// Re-export commonly used types
pub use account::Account;
pub use amount::{Amount, AmountType};
pub use bank::{AccountId, Bank, BankId};
pub use error::DomainError;
pub use instruction::Instruction;
pub use operations::{apply_self_transfer, apply_transfer};
