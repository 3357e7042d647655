//! Shared test helpers for activation key tests.

#![allow(dead_code)]

use anaphora_token::{encoding, Algorithm, KeyPair};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A fixed future expiry (2100-01-01T00:00:00Z).
pub const FUTURE_EXPIRY_SECS: i64 = 4_102_444_800;

/// Returns the fixed future expiry as a timestamp.
pub fn future_expiry() -> DateTime<Utc> {
    DateTime::from_timestamp(FUTURE_EXPIRY_SECS, 0).unwrap()
}

/// Generates a fresh ES256 signing pair.
pub fn es256_keypair() -> KeyPair {
    KeyPair::generate("test-es256", Algorithm::Es256).unwrap()
}

/// Generates a fresh ES512 signing pair.
pub fn es512_keypair() -> KeyPair {
    KeyPair::generate("test-es512", Algorithm::Es512).unwrap()
}

/// Builds a claims object from key/value pairs.
pub fn claims(pairs: &[(&str, Value)]) -> Map<String, Value> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect()
}

/// Flips a single bit somewhere in the signature segment.
pub fn flip_signature_bit(token: &str, bit: usize) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    let mut signature = encoding::decode(parts[2]).unwrap();
    let byte = (bit / 8) % signature.len();
    signature[byte] ^= 1 << (bit % 8);
    format!("{}.{}.{}", parts[0], parts[1], encoding::encode(&signature))
}

/// Replaces the payload segment with a re-encoded object, keeping the
/// original header and signature, so the token stays parseable.
pub fn swap_payload(token: &str, payload: &Map<String, Value>) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    let payload_b64 = encoding::encode(&serde_json::to_vec(payload).unwrap());
    format!("{}.{}.{}", parts[0], payload_b64, parts[2])
}

/// Replaces the header segment the same way.
pub fn swap_header(token: &str, header: &Map<String, Value>) -> String {
    let parts: Vec<&str> = token.split('.').collect();
    let header_b64 = encoding::encode(&serde_json::to_vec(header).unwrap());
    format!("{}.{}.{}", header_b64, parts[1], parts[2])
}
