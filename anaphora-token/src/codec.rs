//! Compact token parsing and assembly.
//!
//! An activation key is three base64url segments joined by `.`:
//! header, payload, signature. The signature covers the exact
//! `base64url(header).base64url(payload)` text, so [`decode`] rebuilds
//! that signing input verbatim from the original segments. Re-serialized
//! JSON is never a substitute: serialization is not guaranteed to be
//! byte-identical to what was signed.

use crate::encoding;
use crate::error::{TokenError, TokenResult};
use serde_json::{Map, Value};

/// A compact token split into its parts.
#[derive(Debug, Clone)]
pub struct DecodedToken {
    /// The decoded header object.
    pub header: Map<String, Value>,
    /// The decoded payload object.
    pub payload: Map<String, Value>,
    /// Raw signature bytes from the third segment.
    pub signature: Vec<u8>,
    /// The exact `header_b64.payload_b64` text the signature covers.
    pub signing_input: String,
}

/// Parses a compact token into header, payload, and signature.
///
/// Surrounding whitespace is tolerated (operators paste these).
///
/// # Errors
///
/// Returns [`TokenError::MalformedToken`] unless the token is exactly
/// three segments whose first two decode to JSON objects, or
/// [`TokenError::MalformedEncoding`] if a segment is not base64url.
pub fn decode(token: &str) -> TokenResult<DecodedToken> {
    let token = token.trim();

    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::MalformedToken(format!(
            "expected 3 segments, found {}",
            parts.len()
        )));
    }

    let header = decode_object(parts[0], "header")?;
    let payload = decode_object(parts[1], "payload")?;
    let signature = encoding::decode(parts[2])?;

    Ok(DecodedToken {
        header,
        payload,
        signature,
        signing_input: format!("{}.{}", parts[0], parts[1]),
    })
}

/// Decodes one segment into a JSON object.
///
/// Arrays, scalars, and syntax errors are all rejected: only objects are
/// accepted as headers and payloads.
fn decode_object(segment: &str, what: &str) -> TokenResult<Map<String, Value>> {
    let bytes = encoding::decode(segment)?;
    let text = String::from_utf8(bytes)
        .map_err(|_| TokenError::MalformedToken(format!("{what} is not valid UTF-8")))?;

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::Object(object)) => Ok(object),
        Ok(_) => Err(TokenError::MalformedToken(format!(
            "{what} is not a JSON object"
        ))),
        Err(e) => Err(TokenError::MalformedToken(format!(
            "{what} is not valid JSON: {e}"
        ))),
    }
}

/// Serializes header and payload into the signing input text.
///
/// Key order is whatever the maps' natural representation chooses; this
/// system is both producer and sole consumer of its tokens, and
/// verification always works from the original segment text.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn encode(header: &Map<String, Value>, payload: &Map<String, Value>) -> TokenResult<String> {
    let header_json = serde_json::to_vec(header)?;
    let payload_json = serde_json::to_vec(payload)?;
    Ok(format!(
        "{}.{}",
        encoding::encode(&header_json),
        encoding::encode(&payload_json)
    ))
}

/// Appends the signature segment to a signing input, producing the token.
#[must_use]
pub fn assemble(signing_input: &str, signature: &[u8]) -> String {
    format!("{signing_input}.{}", encoding::encode(signature))
}
