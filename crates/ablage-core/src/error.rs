//! Error types for the ablage-core library.

use thiserror::Error;

/// Main error type for the ablage library.
#[derive(Error, Debug)]
pub enum AblageError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the ablage library.
pub type Result<T> = std::result::Result<T, AblageError>;
