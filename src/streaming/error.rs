use tracing::{error, warn};

use crate::engine::EngineError;
use crate::io::IoError;

/// Policy for handling errors during stream processing
pub trait ErrorPolicy: Send + Sync {
    /// Handle an IO error (CSV parsing, reading)
    /// Return true to continue processing, false to abort
    fn handle_io_error(&self, error: IoError) -> bool;

    /// Handle an engine error (instruction processing)
    /// Return true to continue processing, false to abort
    fn handle_engine_error(&self, error: EngineError) -> bool;
}

/// Skip errors and continue processing (logged at warn)
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipErrors;

impl ErrorPolicy for SkipErrors {
    fn handle_io_error(&self, error: IoError) -> bool {
        warn!(%error, "Skipping unreadable instruction");
        true
    }

    fn handle_engine_error(&self, error: EngineError) -> bool {
        warn!(%error, "Skipping rejected instruction");
        true
    }
}

/// Abort on first error
#[derive(Debug, Clone, Copy, Default)]
pub struct AbortOnError;

impl ErrorPolicy for AbortOnError {
    fn handle_io_error(&self, error: IoError) -> bool {
        error!(%error, "Aborting on unreadable instruction");
        false
    }

    fn handle_engine_error(&self, error: EngineError) -> bool {
        error!(%error, "Aborting on rejected instruction");
        false
    }
}

/// Silent error policy - skip errors without logging
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSkip;

impl ErrorPolicy for SilentSkip {
    fn handle_io_error(&self, _error: IoError) -> bool {
        true
    }

    fn handle_engine_error(&self, _error: EngineError) -> bool {
        true
    }
}

/// Policy picked at runtime (from configuration)
impl ErrorPolicy for Box<dyn ErrorPolicy> {
    fn handle_io_error(&self, error: IoError) -> bool {
        (**self).handle_io_error(error)
    }

    fn handle_engine_error(&self, error: EngineError) -> bool {
        (**self).handle_engine_error(error)
    }
}
