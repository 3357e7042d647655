//! The closed set of supported signing algorithms.

use serde::{Deserialize, Serialize};

/// A supported activation key signing algorithm.
///
/// Exactly two ECDSA variants are supported. The set is closed: an
/// algorithm name found in a token header either maps into this enum or
/// the token is rejected, so "named in a header" and "usable for
/// verification" cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// ECDSA over NIST P-256 with SHA-256.
    #[serde(rename = "ES256")]
    Es256,
    /// ECDSA over NIST P-521 with SHA-512.
    #[serde(rename = "ES512")]
    Es512,
}

impl Algorithm {
    /// All supported algorithms.
    pub const ALL: [Algorithm; 2] = [Algorithm::Es256, Algorithm::Es512];

    /// Resolves a wire identifier (`"ES256"`, `"ES512"`) to an algorithm.
    ///
    /// Returns `None` for anything outside the supported set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ES256" => Some(Self::Es256),
            "ES512" => Some(Self::Es512),
            _ => None,
        }
    }

    /// Returns the wire identifier used in token headers.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Es256 => "ES256",
            Self::Es512 => "ES512",
        }
    }

    /// Returns the length in bytes of a raw `R || S` signature.
    ///
    /// Two field elements of the curve's width: 32+32 for P-256,
    /// 66+66 for P-521.
    #[must_use]
    pub const fn signature_len(&self) -> usize {
        match self {
            Self::Es256 => 64,
            Self::Es512 => 132,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
