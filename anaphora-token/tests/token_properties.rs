//! Property-based tests for the activation key core.
//!
//! These tests verify properties that must always hold:
//! - Signing then verifying with the same pair succeeds
//! - Any signature tampering is detected
//! - A different key pair never verifies
//! - Claims survive the trip through the token unchanged

mod common;

use anaphora_token::{decode, extract_metadata, sign, verify, Algorithm};
use common::{es256_keypair, flip_signature_bit, future_expiry, FUTURE_EXPIRY_SECS};
use proptest::prelude::*;
use serde_json::{Map, Value};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn claim_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,12}").unwrap()
}

fn claim_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::string::string_regex("[ -~]{0,40}")
            .unwrap()
            .prop_map(Value::from),
    ]
}

fn claims_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(claim_key_strategy(), claim_value_strategy(), 0..6)
        .prop_map(|claims| claims.into_iter().collect())
}

// =============================================================================
// ROUND-TRIP PROPERTIES
// =============================================================================

mod roundtrip_properties {
    use super::*;

    proptest! {
        /// Signing then verifying with the same pair always succeeds
        #[test]
        fn sign_verify_roundtrip(payload in claims_strategy()) {
            let pair = es256_keypair();
            let token = sign(&payload, Algorithm::Es256, &pair, Some(future_expiry())).unwrap();
            prop_assert!(verify(&token, Some(&pair)).is_valid);
        }

        /// Claims other than exp survive the trip unchanged
        #[test]
        fn claims_survive_roundtrip(payload in claims_strategy()) {
            let pair = es256_keypair();
            let token = sign(&payload, Algorithm::Es256, &pair, Some(future_expiry())).unwrap();

            let decoded = decode(&token).unwrap();
            for (key, value) in &payload {
                if key != "exp" {
                    prop_assert_eq!(decoded.payload.get(key), Some(value));
                }
            }
            prop_assert_eq!(
                decoded.payload.get("exp"),
                Some(&Value::from(FUTURE_EXPIRY_SECS))
            );
        }

        /// Metadata always reflects the signed expiry
        #[test]
        fn metadata_reflects_expiry(payload in claims_strategy()) {
            let pair = es256_keypair();
            let token = sign(&payload, Algorithm::Es256, &pair, Some(future_expiry())).unwrap();

            let metadata = extract_metadata(&token).unwrap();
            prop_assert_eq!(metadata.algorithm, Some(Algorithm::Es256));
            prop_assert_eq!(metadata.expires_at, Some(future_expiry()));
        }
    }
}

// =============================================================================
// REJECTION PROPERTIES
// =============================================================================

mod rejection_properties {
    use super::*;

    proptest! {
        /// Flipping any single signature bit invalidates the token
        #[test]
        fn tampered_signature_fails(
            payload in claims_strategy(),
            bit in 0usize..512,
        ) {
            let pair = es256_keypair();
            let token = sign(&payload, Algorithm::Es256, &pair, Some(future_expiry())).unwrap();

            let tampered = flip_signature_bit(&token, bit);
            prop_assert!(!verify(&tampered, Some(&pair)).is_valid);
        }

        /// A different key pair never verifies
        #[test]
        fn wrong_key_fails(payload in claims_strategy()) {
            let signer = es256_keypair();
            let other = es256_keypair();
            let token = sign(&payload, Algorithm::Es256, &signer, Some(future_expiry())).unwrap();

            prop_assert!(!verify(&token, Some(&other)).is_valid);
        }

        /// Arbitrary text never makes verify panic, with or without a key
        #[test]
        fn verify_is_total(token in "[ -~]{0,200}") {
            let pair = es256_keypair();
            let _ = verify(&token, Some(&pair));

            let result = verify(&token, None);
            prop_assert!(!result.is_valid);
        }

        /// Arbitrary text never makes metadata extraction panic
        #[test]
        fn extract_metadata_is_total(token in "[ -~]{0,200}") {
            let _ = extract_metadata(&token);
        }
    }
}

// =============================================================================
// ES512 SPOT PROPERTIES
// =============================================================================

mod es512_properties {
    use super::*;
    use super::common::es512_keypair;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// The wider curve round-trips the same way
        #[test]
        fn es512_sign_verify_roundtrip(payload in claims_strategy()) {
            let pair = es512_keypair();
            let token = sign(&payload, Algorithm::Es512, &pair, Some(future_expiry())).unwrap();
            prop_assert!(verify(&token, Some(&pair)).is_valid);

            let decoded = decode(&token).unwrap();
            prop_assert_eq!(decoded.signature.len(), Algorithm::Es512.signature_len());
        }
    }
}
