//! Read-only metadata extraction from activation keys.

use crate::codec;
use anaphora_keys::Algorithm;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Algorithm and validity window read from a token, without a key.
///
/// A projection recomputed on every call; fields absent from the token
/// stay absent here, never a zero sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivationKeyMetadata {
    /// The header algorithm, if it names a supported one.
    pub algorithm: Option<Algorithm>,
    /// The `iat` claim as a timestamp, if present and numeric.
    pub issued_at: Option<DateTime<Utc>>,
    /// The `exp` claim as a timestamp, if present and numeric.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Reads metadata from a token without verifying it.
///
/// Metadata display is best-effort: an unparseable token yields `None`
/// rather than an error.
#[must_use]
pub fn extract_metadata(token: &str) -> Option<ActivationKeyMetadata> {
    let decoded = codec::decode(token).ok()?;

    let algorithm = decoded
        .header
        .get("alg")
        .and_then(Value::as_str)
        .and_then(Algorithm::from_name);

    Some(ActivationKeyMetadata {
        algorithm,
        issued_at: claim_timestamp(&decoded.payload, "iat"),
        expires_at: claim_timestamp(&decoded.payload, "exp"),
    })
}

/// Reads an epoch-seconds numeric claim as a timestamp.
fn claim_timestamp(payload: &Map<String, Value>, claim: &str) -> Option<DateTime<Utc>> {
    let seconds = payload.get(claim)?.as_i64()?;
    DateTime::from_timestamp(seconds, 0)
}
