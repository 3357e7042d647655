//! Activation key signature verification.
//!
//! Verification is a terminal yes/no: every failure cause funnels into a
//! [`ValidationResult`] and nothing escapes as an error or panic. The
//! external message never says *why* a key was rejected beyond the
//! missing-key precondition; the distinct internal causes are kept as
//! [`TokenError`] values and logged at debug level.

use crate::codec;
use crate::error::{TokenError, TokenResult};
use anaphora_keys::{Algorithm, KeyPair};
use p256::ecdsa::signature::Verifier;
use p256::pkcs8::DecodePublicKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message returned when no key pair was supplied.
const NO_KEY_SELECTED: &str = "No key selected";

/// Message returned for every other rejection.
const INVALID_SIGNATURE: &str = "Invalid signature";

/// The outcome of signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True if the signature checks out against the supplied key.
    pub is_valid: bool,
    /// Rejection message, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            is_valid: false,
            error: Some(message.to_string()),
        }
    }
}

/// Verifies a compact activation key against a selected key pair.
///
/// With no key selected this returns immediately, without parsing the
/// token: selecting a key is a precondition, not a parse outcome. Every
/// other failure (malformed token, unknown algorithm, signature width
/// mismatch, key on the wrong curve, cryptographic mismatch) collapses
/// to the same generic rejection.
#[must_use]
pub fn verify(token: &str, key: Option<&KeyPair>) -> ValidationResult {
    let Some(key) = key else {
        return ValidationResult::invalid(NO_KEY_SELECTED);
    };

    match verify_with_key(token, key) {
        Ok(()) => ValidationResult::valid(),
        Err(cause) => {
            tracing::debug!(key_id = key.id(), "activation key rejected: {cause}");
            ValidationResult::invalid(INVALID_SIGNATURE)
        }
    }
}

/// The verify pipeline with causes still distinct.
fn verify_with_key(token: &str, key: &KeyPair) -> TokenResult<()> {
    let decoded = codec::decode(token)?;

    let alg_name = decoded
        .header
        .get("alg")
        .and_then(Value::as_str)
        .ok_or_else(|| TokenError::MalformedToken("header has no alg field".to_string()))?;
    let algorithm = Algorithm::from_name(alg_name)
        .ok_or_else(|| TokenError::UnsupportedAlgorithm(alg_name.to_string()))?;

    // Width check before any curve math: a signature of the wrong length
    // cannot belong to the algorithm the header names.
    if decoded.signature.len() != algorithm.signature_len() {
        return Err(TokenError::UnsupportedAlgorithm(format!(
            "{algorithm} signature must be {} bytes, found {}",
            algorithm.signature_len(),
            decoded.signature.len()
        )));
    }

    verify_raw(
        decoded.signing_input.as_bytes(),
        &decoded.signature,
        algorithm,
        key.public_key_pem(),
    )
}

/// Verifies a raw `R || S` signature on the curve the algorithm names.
///
/// The key is parsed *as* that curve. A header cannot talk the verifier
/// into running a different routine than the key material supports: a
/// public key on any other curve fails the parse and the token is
/// rejected before signature math runs.
fn verify_raw(
    message: &[u8],
    signature: &[u8],
    algorithm: Algorithm,
    public_pem: &str,
) -> TokenResult<()> {
    match algorithm {
        Algorithm::Es256 => {
            let verifying_key = p256::ecdsa::VerifyingKey::from_public_key_pem(public_pem)
                .map_err(|e| TokenError::InvalidKeyMaterial(format!("not a P-256 public key: {e}")))?;
            let signature = p256::ecdsa::Signature::from_slice(signature)
                .map_err(|_| TokenError::InvalidSignature)?;
            verifying_key
                .verify(message, &signature)
                .map_err(|_| TokenError::InvalidSignature)
        }
        Algorithm::Es512 => {
            let verifying_key = p521::ecdsa::VerifyingKey::from_public_key_pem(public_pem)
                .map_err(|e| TokenError::InvalidKeyMaterial(format!("not a P-521 public key: {e}")))?;
            let signature = p521::ecdsa::Signature::from_slice(signature)
                .map_err(|_| TokenError::InvalidSignature)?;
            verifying_key
                .verify(message, &signature)
                .map_err(|_| TokenError::InvalidSignature)
        }
    }
}
