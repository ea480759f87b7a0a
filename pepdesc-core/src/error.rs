//! Structured error types for the pepdesc workspace.

use thiserror::Error;

/// Unified error type for all pepdesc operations.
#[derive(Debug, Error)]
pub enum PepdescError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed reference data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad sequences, out-of-range parameters)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the pepdesc workspace.
pub type Result<T> = std::result::Result<T, PepdescError>;
