//! Error types for Waveslide.

use thiserror::Error;

/// Main error type for Waveslide operations.
#[derive(Error, Debug)]
pub enum WaveformError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Waveslide operations.
pub type Result<T> = std::result::Result<T, WaveformError>;
