//! # ledgerid Core
//!
//! Pure primitives for the ledgerid registry: principals, commitment
//! hashes, record types, the clock abstraction, and stateless validation.
//!
//! This crate contains no I/O, no locking, no orchestration. It is pure
//! computation over typed data.
//!
//! ## Key Types
//!
//! - [`Principal`] - 32-byte identifier of an external actor
//! - [`Hash32`] - 32-byte commitment hash (Blake3)
//! - [`Moment`] - dual ordinal/wall-clock timestamp pair
//! - [`IdentityRecord`], [`CredentialRecord`], [`ProofRecord`] - the three
//!   record kinds, each mutated only through immutable-update constructors
//!
//! ## Validation
//!
//! The [`validation`] module holds the stateless predicates (non-zero
//! hash, proof size floor, expiry window, metadata ceiling, recovery
//! address exclusion) shared by every registry entry point.

pub mod credential;
pub mod error;
pub mod identity;
pub mod proof;
pub mod time;
pub mod types;
pub mod validation;

pub use credential::{CredentialKey, CredentialRecord};
pub use error::ValidationError;
pub use identity::{IdentityRecord, IdentityStatus};
pub use proof::ProofRecord;
pub use time::{Clock, ManualClock, Moment, SystemClock, MILLIS_PER_ORDINAL};
pub use types::{Hash32, Principal};
pub use validation::{
    check_expiry_window, check_metadata, check_proof_size, check_recovery_address,
    require_nonzero, INITIAL_REPUTATION, MAX_METADATA_CHARS, MAX_PROOF_BYTES, MAX_REPUTATION,
    MIN_EXPIRY_WINDOW, MIN_PROOF_BYTES,
};
