//! Proof store: submission and administrative verification, keyed by the
//! caller-supplied proof hash.

use std::collections::HashMap;

use ledgerid_core::{Hash32, ProofRecord};

use crate::error::{RegistryError, Result};

/// Keyed registry of submitted proofs.
#[derive(Debug, Default)]
pub struct ProofStore {
    records: HashMap<Hash32, ProofRecord>,
}

impl ProofStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a proof. Missing records are not an error.
    pub fn get(&self, proof_hash: &Hash32) -> Option<&ProofRecord> {
        self.records.get(proof_hash)
    }

    /// Store a freshly submitted proof. The hash must be globally unique
    /// at submission time.
    pub fn submit(&mut self, proof_hash: Hash32, record: ProofRecord) -> Result<()> {
        if self.records.contains_key(&proof_hash) {
            return Err(RegistryError::DuplicateProof(proof_hash));
        }
        self.records.insert(proof_hash, record);
        Ok(())
    }

    /// Flip the one-way `verified` flag. Fails if no record exists at
    /// the hash. Idempotent once true; authorization is checked by the
    /// registry before this runs.
    pub fn mark_verified(&mut self, proof_hash: &Hash32) -> Result<()> {
        let record = self
            .records
            .get(proof_hash)
            .ok_or(RegistryError::ProofNotFound(*proof_hash))?;
        let verified = record.verified();
        self.records.insert(*proof_hash, verified);
        Ok(())
    }

    /// Number of submitted proofs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no proof has been submitted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
