//! Identity store: the keyed registry of identity records.
//!
//! Owns registration uniqueness and the recovery transition. Records are
//! never deleted.

use std::collections::HashMap;

use ledgerid_core::{Hash32, IdentityRecord, Moment, Principal};

use crate::error::{RegistryError, Result};

/// Keyed registry of identities, one per owning principal.
#[derive(Debug, Default)]
pub struct IdentityStore {
    records: HashMap<Principal, IdentityRecord>,
}

impl IdentityStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an identity. Missing records are not an error.
    pub fn get(&self, owner: &Principal) -> Option<&IdentityRecord> {
        self.records.get(owner)
    }

    /// Whether the principal has a record.
    pub fn contains(&self, owner: &Principal) -> bool {
        self.records.contains_key(owner)
    }

    /// Guard: fail with [`RegistryError::IdentityNotFound`] unless the
    /// principal is registered.
    pub fn require_registered(&self, principal: &Principal) -> Result<&IdentityRecord> {
        self.records
            .get(principal)
            .ok_or(RegistryError::IdentityNotFound(*principal))
    }

    /// Insert a freshly built record. Fails if the owner already has one;
    /// arguments on a duplicate attempt are irrelevant.
    pub fn insert_new(&mut self, record: IdentityRecord) -> Result<()> {
        if self.records.contains_key(&record.owner) {
            return Err(RegistryError::AlreadyRegistered(record.owner));
        }
        self.records.insert(record.owner, record);
        Ok(())
    }

    /// Apply the recovery transition: overwrite the commitment hash,
    /// refresh timestamps, set status `Recovered`.
    ///
    /// The caller must be the stored recovery address; there is no admin
    /// override. Returns the replaced hash. A recovered identity may be
    /// recovered again by the same recovery address.
    pub fn recover(
        &mut self,
        caller: &Principal,
        owner: &Principal,
        new_hash: Hash32,
        now: Moment,
    ) -> Result<Hash32> {
        let record = self.require_registered(owner)?;
        let recovery = record
            .recovery_address
            .ok_or(RegistryError::NoRecoveryAddress(*owner))?;
        if *caller != recovery {
            return Err(RegistryError::NotRecoveryAddress {
                caller: *caller,
                owner: *owner,
            });
        }

        let previous_hash = record.identity_hash;
        let updated = record.recovered(new_hash, now);
        self.records.insert(*owner, updated);
        Ok(previous_hash)
    }

    /// Replace a record with a rebuilt one (reputation adjustments).
    /// Internal to the registry; the owner must already exist.
    pub(crate) fn replace(&mut self, record: IdentityRecord) {
        debug_assert!(self.records.contains_key(&record.owner));
        self.records.insert(record.owner, record);
    }

    /// Number of registered identities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
