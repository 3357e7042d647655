//! Error types for the activation key core.

use thiserror::Error;

/// Activation-key-specific errors.
#[derive(Debug, Error)]
pub enum TokenError {
    /// A segment is not valid unpadded base64url.
    #[error("malformed base64url segment: {0}")]
    MalformedEncoding(String),

    /// Wrong segment count, or a header/payload that is not a JSON object.
    #[error("malformed activation key: {0}")]
    MalformedToken(String),

    /// Algorithm outside the supported set, or mismatched to the signature.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// A sign request was made with a key pair that cannot sign.
    #[error("selected key pair has no private key material")]
    SigningKeyUnavailable,

    /// Key material does not parse as a key on the required curve.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Cryptographic signature verification failed.
    #[error("activation key signature invalid")]
    InvalidSignature,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for activation key operations.
pub type TokenResult<T> = Result<T, TokenError>;
