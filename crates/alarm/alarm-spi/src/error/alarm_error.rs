//! Alarm engine error types.

use thiserror::Error;

/// Alarm engine errors.
#[derive(Debug, Error)]
pub enum AlarmError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type for alarm engine operations.
pub type Result<T> = std::result::Result<T, AlarmError>;
