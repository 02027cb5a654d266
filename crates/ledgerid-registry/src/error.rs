//! Error taxonomy for registry operations.
//!
//! Every failure is a typed outcome; there is no catch-all variant. The
//! first failing precondition aborts the call with its specific error
//! and no partial effect.

use thiserror::Error;

use ledgerid_core::{CredentialKey, Hash32, Principal, ValidationError};

/// Errors that can occur during registry operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    // ── authorization ────────────────────────────────────────────────
    /// Caller is not the admin.
    #[error("not authorized: caller {0} is not the admin")]
    NotAdmin(Principal),

    /// Caller is neither the admin nor the pause guardian.
    #[error("not authorized: caller {0} is neither admin nor pause guardian")]
    NotAdminOrGuardian(Principal),

    /// Caller is not the issuer fixed by the credential key.
    #[error("not authorized: caller {caller} is not the issuer of credential {key}")]
    NotIssuer {
        caller: Principal,
        key: CredentialKey,
    },

    /// Caller is not the stored recovery address.
    #[error("not authorized: caller {caller} is not the recovery address of {owner}")]
    NotRecoveryAddress { caller: Principal, owner: Principal },

    // ── state-conflict ───────────────────────────────────────────────
    /// The owner already has an identity record.
    #[error("identity already registered for {0}")]
    AlreadyRegistered(Principal),

    /// A proof with this hash already exists.
    #[error("proof already submitted for hash {0}")]
    DuplicateProof(Hash32),

    // ── not-found ────────────────────────────────────────────────────
    /// The referenced principal has no identity record.
    #[error("identity not found: {0}")]
    IdentityNotFound(Principal),

    /// The identity has no recovery address configured.
    #[error("no recovery address set for {0}")]
    NoRecoveryAddress(Principal),

    /// No credential exists at the given key.
    #[error("invalid credential reference: {0}")]
    CredentialNotFound(CredentialKey),

    /// No proof exists at the given hash.
    #[error("proof not found: {0}")]
    ProofNotFound(Hash32),

    // ── validation ───────────────────────────────────────────────────
    /// A stateless precondition failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Admin transfer targeted the current admin.
    #[error("admin transfer must name a different principal")]
    SelfAdminTransfer,

    // ── arithmetic ───────────────────────────────────────────────────
    /// A negative delta would drive the score below zero.
    #[error("reputation underflow: score {current}, delta {delta}")]
    ReputationUnderflow { current: u64, delta: i64 },

    // ── availability ─────────────────────────────────────────────────
    /// The emergency pause is active.
    #[error("registry is paused")]
    Paused,
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
