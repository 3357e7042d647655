//! The `KeyPair` value type and key pair generation.

use crate::algorithm::Algorithm;
use crate::error::{KeyError, KeyResult};
use chrono::{DateTime, Utc};
use p256::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// An asymmetric key pair with identifying metadata.
///
/// A `KeyPair` is an immutable value once created. A pair without private
/// key material is usable for verification only; passing it to the signer
/// fails without touching the payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct KeyPair {
    /// Stable unique identifier (UUID v4).
    id: String,
    /// Display name chosen by the operator.
    name: String,
    /// SPKI PEM public key.
    public_key_pem: String,
    /// PKCS#8 PEM private key, present only for signing-capable pairs.
    private_key_pem: Option<String>,
    /// When the pair was created.
    created_at: DateTime<Utc>,
}

impl KeyPair {
    /// Generates a fresh key pair on the curve the algorithm names.
    ///
    /// # Errors
    ///
    /// Returns an error if PEM encoding of the generated material fails.
    pub fn generate(name: impl Into<String>, algorithm: Algorithm) -> KeyResult<Self> {
        let (private_key_pem, public_key_pem) = match algorithm {
            Algorithm::Es256 => {
                let signing_key = p256::ecdsa::SigningKey::random(&mut rand::rngs::OsRng);
                let private = signing_key
                    .to_pkcs8_pem(LineEnding::LF)
                    .map_err(|e| KeyError::Generation(e.to_string()))?;
                let public = signing_key
                    .verifying_key()
                    .to_public_key_pem(LineEnding::LF)
                    .map_err(|e| KeyError::Generation(e.to_string()))?;
                (private.to_string(), public)
            }
            Algorithm::Es512 => {
                let signing_key = p521::ecdsa::SigningKey::random(&mut rand::rngs::OsRng);
                let private = signing_key
                    .to_pkcs8_pem(LineEnding::LF)
                    .map_err(|e| KeyError::Generation(e.to_string()))?;
                let public = signing_key
                    .verifying_key()
                    .to_public_key_pem(LineEnding::LF)
                    .map_err(|e| KeyError::Generation(e.to_string()))?;
                (private.to_string(), public)
            }
        };

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            public_key_pem,
            private_key_pem: Some(private_key_pem),
            created_at: Utc::now(),
        })
    }

    /// Wraps caller-supplied PEM material as a key pair.
    ///
    /// No validation is performed here; the signer and verifier parse the
    /// material against the algorithm in use.
    #[must_use]
    pub fn from_pem(
        name: impl Into<String>,
        public_key_pem: impl Into<String>,
        private_key_pem: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            public_key_pem: public_key_pem.into(),
            private_key_pem,
            created_at: Utc::now(),
        }
    }

    /// Wraps a public key as a verification-only pair.
    #[must_use]
    pub fn verification_only(
        name: impl Into<String>,
        public_key_pem: impl Into<String>,
    ) -> Self {
        Self::from_pem(name, public_key_pem, None)
    }

    /// Returns a copy of this pair with the private key material removed.
    #[must_use]
    pub fn without_private_key(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            public_key_pem: self.public_key_pem.clone(),
            private_key_pem: None,
            created_at: self.created_at,
        }
    }

    /// Returns the stable unique identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the SPKI PEM public key.
    #[must_use]
    pub fn public_key_pem(&self) -> &str {
        &self.public_key_pem
    }

    /// Returns the PKCS#8 PEM private key, if present.
    #[must_use]
    pub fn private_key_pem(&self) -> Option<&str> {
        self.private_key_pem.as_deref()
    }

    /// Returns true if this pair can sign.
    #[must_use]
    pub fn has_private_key(&self) -> bool {
        self.private_key_pem.is_some()
    }

    /// Returns when the pair was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        if let Some(pem) = self.private_key_pem.as_mut() {
            pem.zeroize();
        }
    }
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("public_key_pem", &self.public_key_pem)
            .field(
                "private_key_pem",
                &self.private_key_pem.as_ref().map(|_| "[REDACTED]"),
            )
            .field("created_at", &self.created_at)
            .finish()
    }
}
