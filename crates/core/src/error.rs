//! Error types for the core crate.

use thiserror::Error;

/// Core error type.
#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    /// Trust score outside the valid range.
    #[error("Invalid trust score: {0} (must be between 0 and 10)")]
    InvalidScore(f64),

    /// Address does not match the expected shape.
    #[error("Invalid address format: {0:?} (expected 0x followed by 40 hex characters)")]
    InvalidAddress(String),
}

/// Result type alias for CoreError.
pub type Result<T> = std::result::Result<T, CoreError>;
