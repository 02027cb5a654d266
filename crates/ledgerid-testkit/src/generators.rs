//! Proptest generators for property-based testing.

use proptest::prelude::*;

use ledgerid_core::{Hash32, Moment, Principal, MAX_PROOF_BYTES, MIN_PROOF_BYTES};

/// Generate a random principal.
pub fn principal() -> impl Strategy<Value = Principal> {
    any::<[u8; 32]>().prop_map(Principal::from_bytes)
}

/// Generate a random non-zero commitment hash.
pub fn nonzero_hash() -> impl Strategy<Value = Hash32> {
    any::<[u8; 32]>()
        .prop_filter("zero hash is reserved", |b| *b != [0u8; 32])
        .prop_map(Hash32::from_bytes)
}

/// Generate proof payload bytes within the accepted size bounds.
pub fn proof_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MIN_PROOF_BYTES..=MAX_PROOF_BYTES)
}

/// Generate credential metadata within the length ceiling.
pub fn metadata() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,256}".prop_map(String::from)
}

/// Generate a reasonable moment (ordinal and derived millis).
pub fn moment() -> impl Strategy<Value = Moment> {
    (0u64..1_000_000).prop_map(|ordinal| Moment::new(ordinal, ordinal as i64 * 5_000))
}

/// Generate a signed reputation delta of moderate magnitude.
pub fn delta() -> impl Strategy<Value = i64> {
    -2_000i64..=2_000
}
