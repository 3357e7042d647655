//! Activation key construction, inspection, and verification.
//!
//! This crate handles:
//! - Decoding compact activation keys into header, payload, and signature
//! - Signing payloads with ECDSA key pairs (ES256, ES512)
//! - Verifying a key's signature against a selected public key
//! - Reading algorithm and validity metadata without a key
//!
//! # Design Principles
//!
//! - **No key registry**: sign and verify borrow a [`KeyPair`] from the
//!   caller for the duration of one call; the caller owns the collection.
//! - **Closed algorithm set**: the two supported ECDSA variants are an
//!   enum, and the verifier only ever runs the routine matching both the
//!   token header and the key material's curve.
//! - **Opaque rejection**: verification reports a single generic message
//!   for every rejection cause; only the missing-key precondition is
//!   named.
//!
//! # Activation Key Format
//!
//! Keys are formatted as:
//! `base64url(header).base64url(payload).base64url(signature)`
//! with all segments unpadded. Header and payload are JSON objects; the
//! only claims interpreted here are `exp` and `iat` (seconds since
//! epoch). The signature is the fixed-length raw `R || S` ECDSA form,
//! computed over the exact `base64url(header).base64url(payload)` text.

mod codec;
pub mod encoding;
mod error;
mod metadata;
mod sign;
mod verify;

pub use anaphora_keys::{Algorithm, KeyPair};
pub use codec::{assemble, decode, encode, DecodedToken};
pub use error::{TokenError, TokenResult};
pub use metadata::{extract_metadata, ActivationKeyMetadata};
pub use sign::sign;
pub use verify::{verify, ValidationResult};
