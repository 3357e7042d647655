//! Base64url encoding for token segments.
//!
//! Tokens always use the unpadded base64url alphabet. Decoding tolerates
//! either presence or absence of padding so keys produced by third-party
//! tooling still parse; encoding never emits padding.

use crate::error::{TokenError, TokenResult};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, Engine, GeneralPurpose, GeneralPurposeConfig};

/// Unpadded base64url engine, indifferent to padding on decode.
const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes bytes as unpadded base64url.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64URL.encode(bytes)
}

/// Decodes a base64url string, padded or unpadded.
///
/// # Errors
///
/// Returns [`TokenError::MalformedEncoding`] on characters outside the
/// alphabet or a length that cannot correspond to whole bytes.
pub fn decode(text: &str) -> TokenResult<Vec<u8>> {
    BASE64URL
        .decode(text)
        .map_err(|e| TokenError::MalformedEncoding(e.to_string()))
}
