//! Application error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Window or event-loop failure with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Application error: {} at {}:{}", message, file, line)]
pub struct AppError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AppError {
    /// Creates a new application error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<eframe::Error> for AppError {
    #[track_caller]
    fn from(err: eframe::Error) -> Self {
        Self::new(format!("Window error: {}", err))
    }
}
