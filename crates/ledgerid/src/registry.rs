//! The Registry handle: the single serializing authority over registry
//! state.
//!
//! Every mutating call takes the write lock, reads the clock once, runs
//! the engine's precondition chain, and either applies the full
//! transition or leaves state untouched. Applied operations are visible
//! in submission order; read-only queries share the read lock and never
//! observe a write in progress.

use std::sync::RwLock;

use tokio::sync::broadcast;

use ledgerid_core::{
    Clock, CredentialKey, CredentialRecord, Hash32, IdentityRecord, Moment, Principal,
    ProofRecord, SystemClock,
};
use ledgerid_registry::{Event, RegistryState, Result};

/// Configuration for the Registry handle.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Capacity of the event broadcast channel. Slow subscribers that
    /// fall further behind than this lose the oldest events.
    pub event_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
        }
    }
}

/// The main Registry handle.
///
/// Wraps [`RegistryState`] in a write lock, stamps each mutation from
/// the clock, and publishes an [`Event`] per applied mutation on a
/// broadcast channel for external observers.
pub struct Registry<C: Clock = SystemClock> {
    state: RwLock<RegistryState>,
    clock: C,
    events: broadcast::Sender<Event>,
}

impl Registry<SystemClock> {
    /// Create a registry with the deploying principal as admin, driven
    /// by the system clock.
    pub fn new(admin: Principal) -> Self {
        Self::with_clock(admin, SystemClock::new(), RegistryConfig::default())
    }
}

impl<C: Clock> Registry<C> {
    /// Create a registry with an explicit clock and configuration.
    pub fn with_clock(admin: Principal, clock: C, config: RegistryConfig) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);
        Self {
            state: RwLock::new(RegistryState::new(admin)),
            clock,
            events,
        }
    }

    /// Subscribe to the event feed. Only events applied after the call
    /// are delivered.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.events.subscribe()
    }

    /// Run one mutating operation under the write lock and publish its
    /// event.
    fn apply<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut RegistryState, Moment) -> Result<Event>,
    {
        self.apply_with(|state, now| f(state, now).map(|event| ((), event)))
    }

    /// Like [`Self::apply`], for operations that also return a value.
    fn apply_with<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut RegistryState, Moment) -> Result<(T, Event)>,
    {
        // Clock read and event publish stay inside the critical section
        // so stamped moments and the event feed both follow the order in
        // which operations actually applied.
        let mut state = self.state.write().unwrap();
        let now = self.clock.now();
        let (value, event) = f(&mut state, now)?;
        tracing::debug!(op = event.name(), ordinal = now.ordinal, ?event, "applied");
        // No subscribers is not an error.
        let _ = self.events.send(event);
        Ok(value)
    }

    // ─────────────────────────────────────────────────────────────────
    // Identity operations
    // ─────────────────────────────────────────────────────────────────

    /// Register the caller as a new identity.
    pub fn register_identity(
        &self,
        caller: Principal,
        identity_hash: Hash32,
        recovery_address: Option<Principal>,
    ) -> Result<()> {
        self.apply(|state, now| {
            state.register_identity(caller, identity_hash, recovery_address, now)
        })
    }

    /// Overwrite an identity's commitment hash from its recovery
    /// address.
    pub fn initiate_recovery(
        &self,
        caller: Principal,
        owner: Principal,
        new_hash: Hash32,
    ) -> Result<()> {
        self.apply(|state, now| state.initiate_recovery(caller, owner, new_hash, now))
    }

    // ─────────────────────────────────────────────────────────────────
    // Credential operations
    // ─────────────────────────────────────────────────────────────────

    /// Issue a credential from the caller to a subject. Returns the
    /// allocated (issuer, sequence) key.
    pub fn issue_credential(
        &self,
        caller: Principal,
        subject: Principal,
        claim_hash: Hash32,
        expires_at_ordinal: u64,
        metadata: impl Into<String>,
    ) -> Result<CredentialKey> {
        let metadata = metadata.into();
        self.apply_with(|state, now| {
            state.issue_credential(caller, subject, claim_hash, expires_at_ordinal, metadata, now)
        })
    }

    /// Revoke a credential. Issuer-only.
    pub fn revoke_credential(&self, caller: Principal, key: CredentialKey) -> Result<()> {
        self.apply(|state, _now| state.revoke_credential(caller, key))
    }

    /// Check credential validity: `Ok(true)` iff it exists and is not
    /// revoked. Missing keys are a typed failure.
    pub fn verify_credential(&self, key: &CredentialKey) -> Result<bool> {
        self.state.read().unwrap().verify_credential(key)
    }

    // ─────────────────────────────────────────────────────────────────
    // Proof operations
    // ─────────────────────────────────────────────────────────────────

    /// Submit a proof under a caller-supplied, globally unique hash.
    pub fn submit_proof(
        &self,
        caller: Principal,
        proof_hash: Hash32,
        proof_data: Vec<u8>,
    ) -> Result<()> {
        self.apply(|state, now| state.submit_proof(caller, proof_hash, proof_data, now))
    }

    /// Administratively verify a submitted proof. Works while paused.
    pub fn verify_proof(&self, caller: Principal, proof_hash: Hash32) -> Result<()> {
        self.apply(|state, _now| state.verify_proof(caller, proof_hash))
    }

    // ─────────────────────────────────────────────────────────────────
    // Reputation operations
    // ─────────────────────────────────────────────────────────────────

    /// Apply a signed reputation delta. Admin-only; works while paused.
    pub fn adjust_reputation(
        &self,
        caller: Principal,
        subject: Principal,
        delta: i64,
    ) -> Result<()> {
        self.apply(|state, now| state.adjust_reputation(caller, subject, delta, now))
    }

    // ─────────────────────────────────────────────────────────────────
    // Controller operations
    // ─────────────────────────────────────────────────────────────────

    /// Engage the emergency pause. Admin or guardian; idempotent.
    pub fn pause(&self, caller: Principal) -> Result<()> {
        self.apply(|state, _now| state.pause(caller))
    }

    /// Lift the emergency pause. Admin only.
    pub fn unpause(&self, caller: Principal) -> Result<()> {
        self.apply(|state, _now| state.unpause(caller))
    }

    /// Transfer the admin role. Admin only; self-transfer rejected.
    pub fn set_admin(&self, caller: Principal, new_admin: Principal) -> Result<()> {
        self.apply(|state, _now| state.set_admin(caller, new_admin))
    }

    /// Replace or clear the pause guardian. Admin only.
    pub fn set_pause_guardian(
        &self,
        caller: Principal,
        guardian: Option<Principal>,
    ) -> Result<()> {
        self.apply(|state, _now| state.set_pause_guardian(caller, guardian))
    }

    // ─────────────────────────────────────────────────────────────────
    // Read-only queries
    // ─────────────────────────────────────────────────────────────────

    /// Full identity record, if registered.
    pub fn identity(&self, owner: &Principal) -> Option<IdentityRecord> {
        self.state.read().unwrap().identities().get(owner).cloned()
    }

    /// Status-as-text projection ("ACTIVE" / "RECOVERED").
    pub fn identity_status(&self, owner: &Principal) -> Option<&'static str> {
        self.state
            .read()
            .unwrap()
            .identities()
            .get(owner)
            .map(|r| r.status.as_str())
    }

    /// Time-info projection: when the identity was last mutated.
    pub fn last_updated(&self, owner: &Principal) -> Option<Moment> {
        self.state
            .read()
            .unwrap()
            .identities()
            .get(owner)
            .map(|r| r.last_updated)
    }

    /// Current reputation score, if registered.
    pub fn reputation(&self, owner: &Principal) -> Option<u64> {
        self.state
            .read()
            .unwrap()
            .identities()
            .get(owner)
            .map(|r| r.reputation_score)
    }

    /// Full credential record, if issued.
    pub fn credential(&self, key: &CredentialKey) -> Option<CredentialRecord> {
        self.state.read().unwrap().credentials().get(key).cloned()
    }

    /// Full proof record, if submitted.
    pub fn proof(&self, proof_hash: &Hash32) -> Option<ProofRecord> {
        self.state.read().unwrap().proofs().get(proof_hash).cloned()
    }

    /// The current admin.
    pub fn admin(&self) -> Principal {
        self.state.read().unwrap().access().admin()
    }

    /// The current pause guardian, if any.
    pub fn pause_guardian(&self) -> Option<Principal> {
        self.state.read().unwrap().access().pause_guardian()
    }

    /// Whether the emergency pause is active.
    pub fn is_paused(&self) -> bool {
        self.state.read().unwrap().access().is_paused()
    }

    /// The clock's current moment.
    pub fn current_moment(&self) -> Moment {
        self.clock.now()
    }
}
