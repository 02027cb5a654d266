//! Identity records: one per principal.
//!
//! Records are immutable values; every state transition builds a new
//! record from the old one so that mutations stay auditable and total.

use serde::{Deserialize, Serialize};

use crate::time::Moment;
use crate::types::{Hash32, Principal};
use crate::validation::INITIAL_REPUTATION;

/// Lifecycle status of an identity.
///
/// `Active -> Recovered` is the only transition; it never reverses.
/// A recovered identity may be recovered again by the same recovery
/// address (no terminal lock), staying `Recovered`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdentityStatus {
    Active,
    Recovered,
}

impl IdentityStatus {
    /// Text projection of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdentityStatus::Active => "ACTIVE",
            IdentityStatus::Recovered => "RECOVERED",
        }
    }
}

/// A registered self-sovereign identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// The owning principal (also the registry key).
    pub owner: Principal,

    /// 32-byte commitment anchoring the identity; never zero.
    pub identity_hash: Hash32,

    /// Administratively adjusted reputation score. Floor 0 by
    /// construction; the conventional ceiling is not enforced.
    pub reputation_score: u64,

    /// Principal permitted to overwrite `identity_hash` if the owner
    /// loses control. Fixed at registration.
    pub recovery_address: Option<Principal>,

    /// Last mutation time.
    pub last_updated: Moment,

    /// Current lifecycle status.
    pub status: IdentityStatus,
}

impl IdentityRecord {
    /// Create a freshly registered identity.
    pub fn new(
        owner: Principal,
        identity_hash: Hash32,
        recovery_address: Option<Principal>,
        at: Moment,
    ) -> Self {
        Self {
            owner,
            identity_hash,
            reputation_score: INITIAL_REPUTATION,
            recovery_address,
            last_updated: at,
            status: IdentityStatus::Active,
        }
    }

    /// Build the post-recovery record: new commitment hash, refreshed
    /// timestamps, status `Recovered`. The only path that changes
    /// `identity_hash` after registration.
    pub fn recovered(&self, new_hash: Hash32, at: Moment) -> Self {
        Self {
            identity_hash: new_hash,
            last_updated: at,
            status: IdentityStatus::Recovered,
            ..self.clone()
        }
    }

    /// Build the record carrying an adjusted reputation score.
    pub fn with_score(&self, score: u64, at: Moment) -> Self {
        Self {
            reputation_score: score,
            last_updated: at,
            ..self.clone()
        }
    }
}
