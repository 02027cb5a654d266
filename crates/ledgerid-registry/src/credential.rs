//! Credential store: issuance and revocation, keyed by (issuer, sequence).
//!
//! Sequence numbers are allocated from one global counter shared across
//! all issuers. The counter only ever advances, so a key, once issued,
//! is never reused.

use std::collections::HashMap;

use ledgerid_core::{CredentialKey, CredentialRecord, Principal};

use crate::error::{RegistryError, Result};

/// Keyed registry of credentials plus the global sequence counter.
#[derive(Debug, Default)]
pub struct CredentialStore {
    records: HashMap<CredentialKey, CredentialRecord>,
    next_sequence: u64,
}

impl CredentialStore {
    /// Create an empty store with the counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a credential. Missing records are not an error.
    pub fn get(&self, key: &CredentialKey) -> Option<&CredentialRecord> {
        self.records.get(key)
    }

    /// The sequence number the next issuance will receive.
    pub fn next_sequence(&self) -> u64 {
        self.next_sequence
    }

    /// Store a freshly built credential under the next global sequence
    /// number and advance the counter. Returns the allocated key.
    pub fn issue(&mut self, issuer: Principal, record: CredentialRecord) -> CredentialKey {
        let key = CredentialKey::new(issuer, self.next_sequence);
        self.records.insert(key, record);
        self.next_sequence += 1;
        key
    }

    /// Flip the one-way `revoked` flag.
    ///
    /// Only the issuer fixed by the key may revoke; the current admin is
    /// refused like any other principal. Idempotent in effect.
    pub fn revoke(&mut self, caller: &Principal, key: &CredentialKey) -> Result<()> {
        let record = self
            .records
            .get(key)
            .ok_or(RegistryError::CredentialNotFound(*key))?;
        if *caller != key.issuer {
            return Err(RegistryError::NotIssuer {
                caller: *caller,
                key: *key,
            });
        }
        let revoked = record.revoked();
        self.records.insert(*key, revoked);
        Ok(())
    }

    /// Check validity: `Ok(true)` iff the credential exists and is not
    /// revoked. Fails when the key does not exist.
    ///
    /// Expiration is deliberately not consulted here; callers that care
    /// use [`CredentialRecord::is_expired`].
    pub fn verify(&self, key: &CredentialKey) -> Result<bool> {
        let record = self
            .records
            .get(key)
            .ok_or(RegistryError::CredentialNotFound(*key))?;
        Ok(!record.revoked)
    }

    /// Number of issued credentials.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no credential has been issued.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
