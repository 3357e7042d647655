//! Error types for key pair material.

use thiserror::Error;

/// Key-material-specific errors.
#[derive(Debug, Error)]
pub enum KeyError {
    /// Key pair generation or PEM encoding failed.
    #[error("key generation failed: {0}")]
    Generation(String),
}

/// Result type for key material operations.
pub type KeyResult<T> = Result<T, KeyError>;
