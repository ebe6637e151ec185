pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

// Re-export commonly used types
pub use cli::{CliApp, StdoutWriter, exit_code};
pub use config::CliConfig;
pub use error::AppError;
pub use logging::init_logging;
pub use runner::run_ledger;
