//! The registry state machine: every entry point, in one owned struct.
//!
//! `RegistryState` owns the access/pause controller and the three stores.
//! Each mutating operation takes the caller identity and the current
//! moment, runs its full precondition chain (controller first, then
//! validation, then store reads), and only then writes. The first failing
//! check aborts the call with its specific error and no partial effect.
//! Every successful mutation returns the [`Event`] describing it.

use ledgerid_core::{
    check_expiry_window, check_metadata, check_proof_size, check_recovery_address,
    require_nonzero, CredentialKey, CredentialRecord, Hash32, IdentityRecord, Moment, Principal,
    ProofRecord,
};

use crate::access::AccessState;
use crate::credential::CredentialStore;
use crate::error::{RegistryError, Result};
use crate::events::Event;
use crate::identity::IdentityStore;
use crate::proof::ProofStore;
use crate::reputation;

/// The complete mutable state of the registry.
///
/// All global counters and flags (admin, pause, credential sequence)
/// live here; there are no ad-hoc globals.
#[derive(Debug)]
pub struct RegistryState {
    access: AccessState,
    identities: IdentityStore,
    credentials: CredentialStore,
    proofs: ProofStore,
}

impl RegistryState {
    /// Initialize with the deploying principal as admin.
    pub fn new(admin: Principal) -> Self {
        Self {
            access: AccessState::new(admin),
            identities: IdentityStore::new(),
            credentials: CredentialStore::new(),
            proofs: ProofStore::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────
    // Identity operations
    // ─────────────────────────────────────────────────────────────────

    /// Register the caller as a new identity.
    pub fn register_identity(
        &mut self,
        caller: Principal,
        identity_hash: Hash32,
        recovery_address: Option<Principal>,
        now: Moment,
    ) -> Result<Event> {
        self.access.require_not_paused()?;
        if self.identities.contains(&caller) {
            return Err(RegistryError::AlreadyRegistered(caller));
        }
        require_nonzero(&identity_hash)?;
        check_recovery_address(&caller, &self.access.admin(), recovery_address.as_ref())?;

        let record = IdentityRecord::new(caller, identity_hash, recovery_address, now);
        self.identities.insert_new(record)?;

        Ok(Event::IdentityRegistered {
            owner: caller,
            identity_hash,
            recovery_address,
        })
    }

    /// Overwrite an identity's commitment hash from its recovery address.
    pub fn initiate_recovery(
        &mut self,
        caller: Principal,
        owner: Principal,
        new_hash: Hash32,
        now: Moment,
    ) -> Result<Event> {
        self.access.require_not_paused()?;
        require_nonzero(&new_hash)?;
        let previous_hash = self.identities.recover(&caller, &owner, new_hash, now)?;

        Ok(Event::IdentityRecovered {
            owner,
            caller,
            previous_hash,
            new_hash,
        })
    }

    // ─────────────────────────────────────────────────────────────────
    // Credential operations
    // ─────────────────────────────────────────────────────────────────

    /// Issue a credential from the caller to a subject. Returns the
    /// allocated key alongside the event.
    pub fn issue_credential(
        &mut self,
        caller: Principal,
        subject: Principal,
        claim_hash: Hash32,
        expires_at_ordinal: u64,
        metadata: String,
        now: Moment,
    ) -> Result<(CredentialKey, Event)> {
        self.access.require_not_paused()?;
        self.identities.require_registered(&caller)?;
        self.identities.require_registered(&subject)?;
        require_nonzero(&claim_hash)?;
        check_expiry_window(&now, expires_at_ordinal)?;
        check_metadata(&metadata)?;

        let record = CredentialRecord::new(subject, claim_hash, expires_at_ordinal, metadata, now);
        let expires_at_millis = record.expires_at_millis;
        let key = self.credentials.issue(caller, record);

        let event = Event::CredentialIssued {
            issuer: key.issuer,
            sequence: key.sequence,
            subject,
            claim_hash,
            expires_at_ordinal,
            expires_at_millis,
        };
        Ok((key, event))
    }

    /// Revoke a credential. Issuer-only; fixed by the key at issuance.
    pub fn revoke_credential(&mut self, caller: Principal, key: CredentialKey) -> Result<Event> {
        self.access.require_not_paused()?;
        self.credentials.revoke(&caller, &key)?;

        Ok(Event::CredentialRevoked {
            issuer: key.issuer,
            sequence: key.sequence,
            caller,
        })
    }

    /// Check credential validity (revocation only; see
    /// [`CredentialStore::verify`]). Read-only.
    pub fn verify_credential(&self, key: &CredentialKey) -> Result<bool> {
        self.credentials.verify(key)
    }

    // ─────────────────────────────────────────────────────────────────
    // Proof operations
    // ─────────────────────────────────────────────────────────────────

    /// Submit a proof under a caller-supplied, globally unique hash.
    pub fn submit_proof(
        &mut self,
        caller: Principal,
        proof_hash: Hash32,
        proof_data: Vec<u8>,
        now: Moment,
    ) -> Result<Event> {
        self.access.require_not_paused()?;
        self.identities.require_registered(&caller)?;
        require_nonzero(&proof_hash)?;
        check_proof_size(&proof_data)?;

        let data_len = proof_data.len();
        let record = ProofRecord::new(caller, proof_data, now);
        self.proofs.submit(proof_hash, record)?;

        Ok(Event::ProofSubmitted {
            prover: caller,
            proof_hash,
            data_len,
        })
    }

    /// Administratively verify a submitted proof. Exempt from the pause
    /// guard.
    pub fn verify_proof(&mut self, caller: Principal, proof_hash: Hash32) -> Result<Event> {
        // Existence is checked before authorization, matching the
        // precondition order of the proof verification entry point.
        if self.proofs.get(&proof_hash).is_none() {
            return Err(RegistryError::ProofNotFound(proof_hash));
        }
        self.access.require_admin(&caller)?;
        self.proofs.mark_verified(&proof_hash)?;

        Ok(Event::ProofVerified { proof_hash, caller })
    }

    // ─────────────────────────────────────────────────────────────────
    // Reputation operations
    // ─────────────────────────────────────────────────────────────────

    /// Apply a signed reputation delta to a registered identity.
    /// Admin-only; exempt from the pause guard.
    pub fn adjust_reputation(
        &mut self,
        caller: Principal,
        subject: Principal,
        delta: i64,
        now: Moment,
    ) -> Result<Event> {
        self.access.require_admin(&caller)?;
        let record = self.identities.require_registered(&subject)?;

        let previous = record.reputation_score;
        let updated = reputation::apply_delta(previous, delta)?;
        let rebuilt = record.with_score(updated, now);
        self.identities.replace(rebuilt);

        Ok(Event::ReputationAdjusted {
            subject,
            caller,
            previous,
            updated,
        })
    }

    // ─────────────────────────────────────────────────────────────────
    // Controller operations (all exempt from the pause guard)
    // ─────────────────────────────────────────────────────────────────

    /// Engage the emergency pause. Admin or guardian.
    pub fn pause(&mut self, caller: Principal) -> Result<Event> {
        self.access.pause(&caller)?;
        Ok(Event::Paused { caller })
    }

    /// Lift the emergency pause. Admin only.
    pub fn unpause(&mut self, caller: Principal) -> Result<Event> {
        self.access.unpause(&caller)?;
        Ok(Event::Unpaused { caller })
    }

    /// Transfer the admin role. Admin only; self-transfer rejected.
    pub fn set_admin(&mut self, caller: Principal, new_admin: Principal) -> Result<Event> {
        let previous = self.access.set_admin(&caller, new_admin)?;
        Ok(Event::AdminChanged {
            previous,
            updated: new_admin,
        })
    }

    /// Replace or clear the pause guardian. Admin only.
    pub fn set_pause_guardian(
        &mut self,
        caller: Principal,
        guardian: Option<Principal>,
    ) -> Result<Event> {
        let previous = self.access.set_pause_guardian(&caller, guardian)?;
        Ok(Event::PauseGuardianChanged {
            previous,
            updated: guardian,
        })
    }

    // ─────────────────────────────────────────────────────────────────
    // Read accessors
    // ─────────────────────────────────────────────────────────────────

    /// The access/pause controller state.
    pub fn access(&self) -> &AccessState {
        &self.access
    }

    /// The identity store.
    pub fn identities(&self) -> &IdentityStore {
        &self.identities
    }

    /// The credential store.
    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// The proof store.
    pub fn proofs(&self) -> &ProofStore {
        &self.proofs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerid_core::{IdentityStatus, ValidationError};

    fn admin() -> Principal {
        Principal::from_bytes([0xad; 32])
    }

    fn alice() -> Principal {
        Principal::from_bytes([1; 32])
    }

    fn bob() -> Principal {
        Principal::from_bytes([2; 32])
    }

    fn hash(byte: u8) -> Hash32 {
        Hash32::from_bytes([byte; 32])
    }

    fn now(ordinal: u64) -> Moment {
        Moment::new(ordinal, ordinal as i64 * 5_000)
    }

    fn state_with_identities() -> RegistryState {
        let mut state = RegistryState::new(admin());
        state
            .register_identity(alice(), hash(0x01), None, now(1))
            .unwrap();
        state
            .register_identity(bob(), hash(0x02), None, now(1))
            .unwrap();
        state
    }

    #[test]
    fn test_register_precondition_order() {
        let mut state = RegistryState::new(admin());
        state.pause(admin()).unwrap();

        // Pause is checked before anything else, even a zero hash.
        assert_eq!(
            state.register_identity(alice(), Hash32::ZERO, None, now(1)),
            Err(RegistryError::Paused)
        );

        state.unpause(admin()).unwrap();
        assert_eq!(
            state.register_identity(alice(), Hash32::ZERO, None, now(1)),
            Err(RegistryError::Validation(ValidationError::ZeroHash))
        );
        assert_eq!(
            state.register_identity(alice(), hash(0x01), Some(admin()), now(1)),
            Err(RegistryError::Validation(ValidationError::RecoveryIsAdmin))
        );
    }

    #[test]
    fn test_register_rejects_recovery_equal_to_owner() {
        let mut state = RegistryState::new(admin());
        assert_eq!(
            state.register_identity(alice(), hash(0x01), Some(alice()), now(1)),
            Err(RegistryError::Validation(ValidationError::RecoveryIsOwner))
        );
    }

    #[test]
    fn test_issue_requires_both_parties_registered() {
        let mut state = RegistryState::new(admin());
        state
            .register_identity(alice(), hash(0x01), None, now(1))
            .unwrap();

        assert_eq!(
            state
                .issue_credential(alice(), bob(), hash(0xcc), 200, "m".into(), now(1))
                .unwrap_err(),
            RegistryError::IdentityNotFound(bob())
        );
        assert_eq!(
            state
                .issue_credential(bob(), alice(), hash(0xcc), 200, "m".into(), now(1))
                .unwrap_err(),
            RegistryError::IdentityNotFound(bob())
        );
    }

    #[test]
    fn test_issue_allocates_global_sequence_and_event() {
        let mut state = state_with_identities();

        let (k0, event) = state
            .issue_credential(alice(), bob(), hash(0xcc), 200, "Test".into(), now(10))
            .unwrap();
        let (k1, _) = state
            .issue_credential(bob(), alice(), hash(0xdd), 200, String::new(), now(10))
            .unwrap();

        assert_eq!((k0.issuer, k0.sequence), (alice(), 0));
        assert_eq!((k1.issuer, k1.sequence), (bob(), 1));
        match event {
            Event::CredentialIssued {
                issuer, sequence, ..
            } => {
                assert_eq!(issuer, alice());
                assert_eq!(sequence, 0);
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_revoked_credential_verifies_false_not_error() {
        let mut state = state_with_identities();
        let (key, _) = state
            .issue_credential(alice(), bob(), hash(0xcc), 200, "Test".into(), now(10))
            .unwrap();

        state.revoke_credential(alice(), key).unwrap();
        assert_eq!(state.verify_credential(&key), Ok(false));
    }

    #[test]
    fn test_proof_submission_preconditions() {
        let mut state = state_with_identities();
        let stranger = Principal::from_bytes([7; 32]);

        assert_eq!(
            state.submit_proof(stranger, hash(0xee), vec![0u8; 64], now(2)),
            Err(RegistryError::IdentityNotFound(stranger))
        );
        assert_eq!(
            state.submit_proof(alice(), hash(0xee), vec![0u8; 63], now(2)),
            Err(RegistryError::Validation(ValidationError::ProofTooSmall {
                len: 63,
                min: 64,
            }))
        );

        state
            .submit_proof(alice(), hash(0xee), vec![0u8; 64], now(2))
            .unwrap();
        assert_eq!(
            state.submit_proof(bob(), hash(0xee), vec![0u8; 64], now(3)),
            Err(RegistryError::DuplicateProof(hash(0xee)))
        );
    }

    #[test]
    fn test_verify_proof_checks_existence_before_authorization() {
        let mut state = state_with_identities();

        assert_eq!(
            state.verify_proof(alice(), hash(0xee)),
            Err(RegistryError::ProofNotFound(hash(0xee)))
        );

        state
            .submit_proof(alice(), hash(0xee), vec![0u8; 64], now(2))
            .unwrap();
        assert_eq!(
            state.verify_proof(alice(), hash(0xee)),
            Err(RegistryError::NotAdmin(alice()))
        );
        state.verify_proof(admin(), hash(0xee)).unwrap();
        assert!(state.proofs().get(&hash(0xee)).unwrap().verified);
    }

    #[test]
    fn test_adjust_reputation_event_carries_pre_and_post() {
        let mut state = state_with_identities();

        let event = state
            .adjust_reputation(admin(), alice(), 50, now(5))
            .unwrap();
        assert_eq!(
            event,
            Event::ReputationAdjusted {
                subject: alice(),
                caller: admin(),
                previous: 100,
                updated: 150,
            }
        );
        assert_eq!(
            state.identities().get(&alice()).unwrap().reputation_score,
            150
        );
    }

    #[test]
    fn test_adjust_reputation_admin_only() {
        let mut state = state_with_identities();
        assert_eq!(
            state.adjust_reputation(alice(), bob(), 10, now(5)),
            Err(RegistryError::NotAdmin(alice()))
        );
    }

    #[test]
    fn test_pause_matrix() {
        let mut state = state_with_identities();
        state
            .register_identity(
                Principal::from_bytes([4; 32]),
                hash(0x04),
                Some(Principal::from_bytes([5; 32])),
                now(1),
            )
            .unwrap();
        let (key, _) = state
            .issue_credential(alice(), bob(), hash(0xcc), 200, "Test".into(), now(1))
            .unwrap();
        state
            .submit_proof(alice(), hash(0xee), vec![0u8; 64], now(1))
            .unwrap();

        state.pause(admin()).unwrap();

        // Gated entry points all fail with the pause error.
        assert_eq!(
            state.register_identity(Principal::from_bytes([6; 32]), hash(0x06), None, now(2)),
            Err(RegistryError::Paused)
        );
        assert_eq!(
            state
                .issue_credential(alice(), bob(), hash(0xcd), 200, String::new(), now(2))
                .unwrap_err(),
            RegistryError::Paused
        );
        assert_eq!(
            state.revoke_credential(alice(), key),
            Err(RegistryError::Paused)
        );
        assert_eq!(
            state.submit_proof(bob(), hash(0xef), vec![0u8; 64], now(2)),
            Err(RegistryError::Paused)
        );
        assert_eq!(
            state.initiate_recovery(
                Principal::from_bytes([5; 32]),
                Principal::from_bytes([4; 32]),
                hash(0x44),
                now(2),
            ),
            Err(RegistryError::Paused)
        );

        // Administrative entry points still succeed while paused.
        state.verify_proof(admin(), hash(0xee)).unwrap();
        state.adjust_reputation(admin(), alice(), 10, now(2)).unwrap();
        state
            .set_pause_guardian(admin(), Some(Principal::from_bytes([9; 32])))
            .unwrap();
        state.unpause(admin()).unwrap();
        state.revoke_credential(alice(), key).unwrap();
    }

    #[test]
    fn test_recovery_transition_and_event() {
        let mut state = RegistryState::new(admin());
        let recovery = Principal::from_bytes([9; 32]);
        state
            .register_identity(alice(), hash(0x01), Some(recovery), now(1))
            .unwrap();

        let event = state
            .initiate_recovery(recovery, alice(), hash(0x11), now(3))
            .unwrap();
        assert_eq!(
            event,
            Event::IdentityRecovered {
                owner: alice(),
                caller: recovery,
                previous_hash: hash(0x01),
                new_hash: hash(0x11),
            }
        );
        let record = state.identities().get(&alice()).unwrap();
        assert_eq!(record.status, IdentityStatus::Recovered);
        assert_eq!(record.identity_hash, hash(0x11));
    }
}
