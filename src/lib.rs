//! Accounts with exact decimal balances, a bank that registers them and
//! mediates transfers, and a CSV-driven ledger built on top.

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
pub mod storage;
pub mod streaming;
