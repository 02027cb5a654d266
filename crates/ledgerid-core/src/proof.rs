//! Submitted cryptographic proofs, keyed by their caller-supplied hash.

use serde::{Deserialize, Serialize};

use crate::time::Moment;
use crate::types::Principal;

/// A submitted proof awaiting (or past) administrative verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// Principal that submitted the proof; registered at submission.
    pub prover: Principal,

    /// One-way verification flag, flipped only by the admin.
    pub verified: bool,

    /// Submission time.
    pub submitted_at: Moment,

    /// Opaque proof payload, within the size floor and ceiling.
    pub proof_data: Vec<u8>,
}

impl ProofRecord {
    /// Create a freshly submitted, unverified proof.
    pub fn new(prover: Principal, proof_data: Vec<u8>, at: Moment) -> Self {
        Self {
            prover,
            verified: false,
            submitted_at: at,
            proof_data,
        }
    }

    /// Build the verified form of this record. One-way; verifying an
    /// already-verified proof yields the same record.
    pub fn verified(&self) -> Self {
        Self {
            verified: true,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_proof_is_unverified() {
        let p = ProofRecord::new(
            Principal::from_bytes([1; 32]),
            vec![0u8; 64],
            Moment::new(3, 15_000),
        );
        assert!(!p.verified);
        assert_eq!(p.submitted_at, Moment::new(3, 15_000));
    }

    #[test]
    fn test_verified_is_idempotent() {
        let p = ProofRecord::new(Principal::from_bytes([1; 32]), vec![0u8; 64], Moment::new(3, 0));
        let v = p.verified();
        assert!(v.verified);
        assert_eq!(v.verified(), v);
        assert_eq!(v.proof_data, p.proof_data);
    }
}
