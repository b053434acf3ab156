//! Math error types

use thiserror::Error;

/// Errors raised by the numeric utilities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An argument is outside the domain of the operation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A required argument was not supplied
    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    /// The result does not fit the return type
    #[error("Overflow: {0}")]
    Overflow(String),
}

/// Result type for math operations
pub type Result<T> = std::result::Result<T, MathError>;
