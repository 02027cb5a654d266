//! Structured notifications emitted after each successful mutation.
//!
//! This is the sole contract with the monitoring layer: an observer
//! receiving every event can reconstruct registry state without direct
//! storage access. Each variant carries the caller, the affected keys,
//! and pre/post values where a field changed.

use serde::{Deserialize, Serialize};

use ledgerid_core::{Hash32, Principal};

/// One event per mutating registry operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Event {
    IdentityRegistered {
        owner: Principal,
        identity_hash: Hash32,
        recovery_address: Option<Principal>,
    },
    IdentityRecovered {
        owner: Principal,
        caller: Principal,
        previous_hash: Hash32,
        new_hash: Hash32,
    },
    CredentialIssued {
        issuer: Principal,
        sequence: u64,
        subject: Principal,
        claim_hash: Hash32,
        expires_at_ordinal: u64,
        expires_at_millis: i64,
    },
    CredentialRevoked {
        issuer: Principal,
        sequence: u64,
        caller: Principal,
    },
    ProofSubmitted {
        prover: Principal,
        proof_hash: Hash32,
        data_len: usize,
    },
    ProofVerified {
        proof_hash: Hash32,
        caller: Principal,
    },
    ReputationAdjusted {
        subject: Principal,
        caller: Principal,
        previous: u64,
        updated: u64,
    },
    AdminChanged {
        previous: Principal,
        updated: Principal,
    },
    PauseGuardianChanged {
        previous: Option<Principal>,
        updated: Option<Principal>,
    },
    Paused {
        caller: Principal,
    },
    Unpaused {
        caller: Principal,
    },
}

impl Event {
    /// The operation name, as exposed to monitoring.
    pub fn name(&self) -> &'static str {
        match self {
            Event::IdentityRegistered { .. } => "identity_registered",
            Event::IdentityRecovered { .. } => "identity_recovered",
            Event::CredentialIssued { .. } => "credential_issued",
            Event::CredentialRevoked { .. } => "credential_revoked",
            Event::ProofSubmitted { .. } => "proof_submitted",
            Event::ProofVerified { .. } => "proof_verified",
            Event::ReputationAdjusted { .. } => "reputation_adjusted",
            Event::AdminChanged { .. } => "admin_changed",
            Event::PauseGuardianChanged { .. } => "pause_guardian_changed",
            Event::Paused { .. } => "paused",
            Event::Unpaused { .. } => "unpaused",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_op_tag() {
        let event = Event::Paused {
            caller: Principal::from_bytes([1; 32]),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["op"], "paused");
    }

    #[test]
    fn test_event_name_matches_serde_tag() {
        let event = Event::ReputationAdjusted {
            subject: Principal::from_bytes([2; 32]),
            caller: Principal::from_bytes([1; 32]),
            previous: 100,
            updated: 150,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["op"], event.name());
        assert_eq!(json["previous"], 100);
        assert_eq!(json["updated"], 150);
    }
}
