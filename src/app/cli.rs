use std::future::Future;

use tracing::{info, warn};

use super::error::AppError;

/// Buffered stdout handed to the application body
pub type StdoutWriter = tokio::io::BufWriter<tokio::io::Stdout>;

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM, 129 = SIGHUP)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the CLI application with signal handling.
    ///
    /// `main_fn` receives a buffered stdout writer and is responsible for
    /// flushing it. This function never returns - it calls std::process::exit.
    pub async fn run<F, Fut>(self, main_fn: F) -> !
    where
        F: FnOnce(StdoutWriter) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writer = tokio::io::BufWriter::new(tokio::io::stdout());
        let signal_fut = self.wait_for_signal();

        info!(app = %self.name, "Starting");

        tokio::select! {
            result = main_fn(writer) => {
                if let Err(e) = &result {
                    eprintln!("Error: {}", e);
                }
                std::process::exit(exit_code(&result));
            }
            signal_code = signal_fut => {
                warn!(app = %self.name, signal_code, "Interrupted");
                std::process::exit(signal_code);
            }
        }
    }

    /// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
    /// Returns the exit code to use (128 + signal number)
    async fn wait_for_signal(&self) -> i32 {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            let mut sigterm =
                signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
            let mut sigint =
                signal(SignalKind::interrupt()).expect("Failed to setup SIGINT handler");
            let mut sighup = signal(SignalKind::hangup()).expect("Failed to setup SIGHUP handler");

            tokio::select! {
                _ = sigterm.recv() => 143,
                _ = sigint.recv() => 130,
                _ = sighup.recv() => 129,
            }
        }

        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to setup Ctrl+C handler");
            130
        }
    }
}

/// Process exit code for the application result
pub fn exit_code(result: &Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
