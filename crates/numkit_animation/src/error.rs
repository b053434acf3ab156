//! Animation error types

use thiserror::Error;

/// Errors raised when starting an animation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// The sampling interval must be longer than zero
    #[error("Sampling interval must be greater than zero")]
    ZeroInterval,

    /// Animations are driven by tokio timers
    #[error("No tokio runtime is running on this thread")]
    NoRuntime,
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
