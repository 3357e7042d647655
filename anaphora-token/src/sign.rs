//! Activation key signing.

use crate::codec;
use crate::error::{TokenError, TokenResult};
use anaphora_keys::{Algorithm, KeyPair};
use chrono::{DateTime, Utc};
use p256::ecdsa::signature::Signer;
use p256::pkcs8::DecodePrivateKey;
use serde_json::{Map, Value};

/// Signs a payload into a compact activation key.
///
/// The header is fixed to `{"alg": <algorithm>, "typ": "JWT"}`. An
/// explicit `expires_at` overwrites the payload's `exp` claim with its
/// epoch seconds (floored); with `expires_at = None` an existing `exp`
/// is preserved, and a payload without one is stamped with the current
/// time. Every other claim passes through untouched.
///
/// # Errors
///
/// Returns [`TokenError::SigningKeyUnavailable`] if the key pair has no
/// private material, or [`TokenError::InvalidKeyMaterial`] if the
/// private key is not on the algorithm's curve.
pub fn sign(
    payload: &Map<String, Value>,
    algorithm: Algorithm,
    key: &KeyPair,
    expires_at: Option<DateTime<Utc>>,
) -> TokenResult<String> {
    let private_pem = key
        .private_key_pem()
        .ok_or(TokenError::SigningKeyUnavailable)?;

    let mut claims = payload.clone();
    match expires_at {
        Some(expiry) => {
            claims.insert("exp".to_string(), Value::from(expiry.timestamp()));
        }
        None => {
            if !claims.contains_key("exp") {
                claims.insert("exp".to_string(), Value::from(Utc::now().timestamp()));
            }
        }
    }

    let mut header = Map::new();
    header.insert("alg".to_string(), Value::from(algorithm.name()));
    header.insert("typ".to_string(), Value::from("JWT"));

    let signing_input = codec::encode(&header, &claims)?;
    let signature = sign_raw(signing_input.as_bytes(), algorithm, private_pem)?;

    Ok(codec::assemble(&signing_input, &signature))
}

/// Signs a message with the algorithm's curve and digest, producing the
/// fixed-length raw `R || S` signature form.
fn sign_raw(message: &[u8], algorithm: Algorithm, private_pem: &str) -> TokenResult<Vec<u8>> {
    match algorithm {
        Algorithm::Es256 => {
            let signing_key = p256::ecdsa::SigningKey::from_pkcs8_pem(private_pem)
                .map_err(|e| TokenError::InvalidKeyMaterial(format!("not a P-256 private key: {e}")))?;
            let signature: p256::ecdsa::Signature = signing_key.sign(message);
            Ok(signature.to_bytes().to_vec())
        }
        Algorithm::Es512 => {
            let signing_key = p521::ecdsa::SigningKey::from_pkcs8_pem(private_pem)
                .map_err(|e| TokenError::InvalidKeyMaterial(format!("not a P-521 private key: {e}")))?;
            let signature: p521::ecdsa::Signature = signing_key.sign(message);
            Ok(signature.to_bytes().to_vec())
        }
    }
}
