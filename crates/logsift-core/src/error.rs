//! Pipeline error types.

use thiserror::Error;

/// Errors that terminate a pipeline run.
///
/// Malformed log lines are deliberately *not* represented here — they are
/// recovered per line as [`crate::types::ParseFailure`] values and reported
/// through the run report instead of propagating.
#[derive(Debug, Error)]
pub enum SiftError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("log source not found: {0}")]
    NotFound(String),

    #[error("invalid timestamp '{value}': expected YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },

    #[error("unknown severity level: {0} (expected INFO, ERROR, or WARN)")]
    UnknownLevel(String),

    #[error("export failed: {0}")]
    Export(String),

    #[error("sink write failed after attempting {attempted} records: {message}")]
    Sink { attempted: usize, message: String },

    #[error("{0}")]
    Other(String),
}

/// Convenience alias for pipeline results.
pub type SiftResult<T> = Result<T, SiftError>;
