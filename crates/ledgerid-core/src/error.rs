//! Error types for the ledgerid core.

use thiserror::Error;

/// Validation errors for stateless precondition checks.
///
/// Each variant corresponds to one predicate in [`crate::validation`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("hash must be non-zero")]
    ZeroHash,

    #[error("proof data too small: {len} bytes, minimum {min}")]
    ProofTooSmall { len: usize, min: usize },

    #[error("proof data too large: {len} bytes, maximum {max}")]
    ProofTooLarge { len: usize, max: usize },

    #[error("metadata too long: {len} chars, maximum {max}")]
    MetadataTooLong { len: usize, max: usize },

    #[error(
        "expiration ordinal {expires_at} too soon: current {current}, minimum window {min_window}"
    )]
    ExpiryTooSoon {
        expires_at: u64,
        current: u64,
        min_window: u64,
    },

    #[error("recovery address must differ from the owner")]
    RecoveryIsOwner,

    #[error("recovery address must differ from the current admin")]
    RecoveryIsAdmin,
}
