use thiserror::Error;

/// Domain-level errors representing business rule violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Insufficient funds")]
    InsufficientFunds,

    #[error("Account balance is not set")]
    BalanceUnset,

    #[error("Invalid amount")]
    InvalidAmount,

    #[error("Arithmetic overflow")]
    Overflow,

    #[error("No account at position {0}")]
    AccountNotFound(usize),
}
