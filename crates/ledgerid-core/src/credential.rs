//! Credential records, keyed by (issuer, sequence).
//!
//! Sequence numbers come from one global counter shared across all
//! issuers, so keys are unique but per-issuer sequences are not
//! contiguous.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::Moment;
use crate::types::{Hash32, Principal};

/// Composite credential key. The issuer is permanently fixed by the key;
/// no later admin change can reassign ownership of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialKey {
    pub issuer: Principal,
    pub sequence: u64,
}

impl CredentialKey {
    pub const fn new(issuer: Principal, sequence: u64) -> Self {
        Self { issuer, sequence }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.issuer, self.sequence)
    }
}

/// A verifiable credential issued by one registered identity to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// Principal the credential is about; registered at issuance.
    pub subject: Principal,

    /// 32-byte commitment to the claim content; never zero.
    pub claim_hash: Hash32,

    /// Authoritative expiry, as an ordinal deadline chosen by the issuer.
    pub expires_at_ordinal: u64,

    /// Advisory wall-clock estimate of the expiry, derived from the
    /// ordinal delta at issuance using the assumed fixed ratio. The
    /// ratio can drift; never use this for time-sensitive checks.
    pub expires_at_millis: i64,

    /// One-way revocation flag.
    pub revoked: bool,

    /// Issuance time.
    pub issued_at: Moment,

    /// Free-text metadata, up to 256 characters.
    pub metadata: String,
}

impl CredentialRecord {
    /// Create a freshly issued credential. `expires_at_millis` is derived
    /// from `now` and the ordinal deadline.
    pub fn new(
        subject: Principal,
        claim_hash: Hash32,
        expires_at_ordinal: u64,
        metadata: String,
        now: Moment,
    ) -> Self {
        Self {
            subject,
            claim_hash,
            expires_at_ordinal,
            expires_at_millis: now.projected_millis(expires_at_ordinal),
            revoked: false,
            issued_at: now,
            metadata,
        }
    }

    /// Build the revoked form of this record. One-way: there is no
    /// un-revoke constructor.
    pub fn revoked(&self) -> Self {
        Self {
            revoked: true,
            ..self.clone()
        }
    }

    /// Whether the ordinal deadline has passed.
    ///
    /// Validity checks in the registry consult only the `revoked` flag;
    /// expiration is left to callers that want it, via this helper.
    pub fn is_expired(&self, now: &Moment) -> bool {
        now.ordinal >= self.expires_at_ordinal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::MILLIS_PER_ORDINAL;

    fn record() -> CredentialRecord {
        CredentialRecord::new(
            Principal::from_bytes([2; 32]),
            Hash32::from_bytes([0xcc; 32]),
            110,
            "Test".into(),
            Moment::new(10, 1_000_000),
        )
    }

    #[test]
    fn test_expiry_millis_derived_from_ordinal_delta() {
        let r = record();
        assert_eq!(r.expires_at_millis, 1_000_000 + 100 * MILLIS_PER_ORDINAL);
    }

    #[test]
    fn test_revoked_is_one_way_flip() {
        let r = record();
        assert!(!r.revoked);
        let revoked = r.revoked();
        assert!(revoked.revoked);
        assert_eq!(revoked.claim_hash, r.claim_hash);
        assert_eq!(revoked.issued_at, r.issued_at);
        // Revoking an already-revoked record is a no-op in effect.
        assert_eq!(revoked.revoked(), revoked);
    }

    #[test]
    fn test_is_expired_compares_ordinals_only() {
        let r = record();
        assert!(!r.is_expired(&Moment::new(109, i64::MAX)));
        assert!(r.is_expired(&Moment::new(110, 0)));
    }

    #[test]
    fn test_key_display() {
        let key = CredentialKey::new(Principal::from_bytes([0xab; 32]), 7);
        assert_eq!(format!("{}", key), "abababababababab#7");
    }
}
