//! Stateless validation predicates and their constants.
//!
//! Each predicate checks one precondition in isolation; the registry
//! layer decides in which order they run. None of them read or mutate
//! state.

use crate::error::ValidationError;
use crate::time::Moment;
use crate::types::{Hash32, Principal};

/// Minimum accepted proof payload size, in bytes.
pub const MIN_PROOF_BYTES: usize = 64;

/// Maximum accepted proof payload size, in bytes.
pub const MAX_PROOF_BYTES: usize = 1024;

/// Maximum credential metadata length, in characters.
pub const MAX_METADATA_CHARS: usize = 256;

/// Minimum number of ordinals between issuance and credential expiry.
pub const MIN_EXPIRY_WINDOW: u64 = 1;

/// Reputation score assigned at registration.
pub const INITIAL_REPUTATION: u64 = 100;

/// Conventional reputation ceiling.
///
/// Documented but NOT enforced: positive deltas may push a score past
/// this value. Enforcement, if any, is a policy decision of the caller.
pub const MAX_REPUTATION: u64 = 1000;

/// Reject the reserved all-zero hash.
pub fn require_nonzero(hash: &Hash32) -> Result<(), ValidationError> {
    if hash.is_zero() {
        return Err(ValidationError::ZeroHash);
    }
    Ok(())
}

/// Check proof payload size against the floor and ceiling.
pub fn check_proof_size(data: &[u8]) -> Result<(), ValidationError> {
    if data.len() < MIN_PROOF_BYTES {
        return Err(ValidationError::ProofTooSmall {
            len: data.len(),
            min: MIN_PROOF_BYTES,
        });
    }
    if data.len() > MAX_PROOF_BYTES {
        return Err(ValidationError::ProofTooLarge {
            len: data.len(),
            max: MAX_PROOF_BYTES,
        });
    }
    Ok(())
}

/// Check credential metadata length.
pub fn check_metadata(metadata: &str) -> Result<(), ValidationError> {
    let len = metadata.chars().count();
    if len > MAX_METADATA_CHARS {
        return Err(ValidationError::MetadataTooLong {
            len,
            max: MAX_METADATA_CHARS,
        });
    }
    Ok(())
}

/// Check that an expiration ordinal leaves at least the minimum window
/// after the current ordinal. The bound is strict: `expires_at` must
/// exceed `now.ordinal + MIN_EXPIRY_WINDOW`.
pub fn check_expiry_window(now: &Moment, expires_at: u64) -> Result<(), ValidationError> {
    if expires_at <= now.ordinal.saturating_add(MIN_EXPIRY_WINDOW) {
        return Err(ValidationError::ExpiryTooSoon {
            expires_at,
            current: now.ordinal,
            min_window: MIN_EXPIRY_WINDOW,
        });
    }
    Ok(())
}

/// Check the recovery-address exclusion rule: when present, the recovery
/// address must differ from both the registering owner and the current
/// admin.
pub fn check_recovery_address(
    owner: &Principal,
    admin: &Principal,
    recovery: Option<&Principal>,
) -> Result<(), ValidationError> {
    if let Some(r) = recovery {
        if r == owner {
            return Err(ValidationError::RecoveryIsOwner);
        }
        if r == admin {
            return Err(ValidationError::RecoveryIsAdmin);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonzero_rejects_zero_hash() {
        assert_eq!(
            require_nonzero(&Hash32::ZERO),
            Err(ValidationError::ZeroHash)
        );
        assert!(require_nonzero(&Hash32::from_bytes([1; 32])).is_ok());
    }

    #[test]
    fn test_proof_size_floor_boundary() {
        assert!(check_proof_size(&vec![0u8; MIN_PROOF_BYTES]).is_ok());
        assert_eq!(
            check_proof_size(&vec![0u8; MIN_PROOF_BYTES - 1]),
            Err(ValidationError::ProofTooSmall {
                len: MIN_PROOF_BYTES - 1,
                min: MIN_PROOF_BYTES,
            })
        );
    }

    #[test]
    fn test_proof_size_ceiling_boundary() {
        assert!(check_proof_size(&vec![0u8; MAX_PROOF_BYTES]).is_ok());
        assert!(matches!(
            check_proof_size(&vec![0u8; MAX_PROOF_BYTES + 1]),
            Err(ValidationError::ProofTooLarge { .. })
        ));
    }

    #[test]
    fn test_metadata_counts_chars_not_bytes() {
        // 256 multibyte chars are within the limit even though the byte
        // length is larger.
        let metadata: String = "é".repeat(MAX_METADATA_CHARS);
        assert!(check_metadata(&metadata).is_ok());
        assert!(check_metadata(&"x".repeat(MAX_METADATA_CHARS + 1)).is_err());
    }

    #[test]
    fn test_expiry_window_is_strict() {
        let now = Moment::new(100, 0);
        assert!(matches!(
            check_expiry_window(&now, 100),
            Err(ValidationError::ExpiryTooSoon { .. })
        ));
        // Exactly current + window fails; one past it succeeds.
        assert!(check_expiry_window(&now, 101).is_err());
        assert!(check_expiry_window(&now, 102).is_ok());
    }

    #[test]
    fn test_expiry_window_at_ordinal_ceiling() {
        // With the ordinal already at the ceiling no deadline can clear
        // the window; the check rejects rather than wrapping.
        let now = Moment::new(u64::MAX, 0);
        assert!(matches!(
            check_expiry_window(&now, u64::MAX),
            Err(ValidationError::ExpiryTooSoon { .. })
        ));
    }

    #[test]
    fn test_recovery_address_exclusions() {
        let owner = Principal::from_bytes([1; 32]);
        let admin = Principal::from_bytes([2; 32]);
        let other = Principal::from_bytes([3; 32]);

        assert!(check_recovery_address(&owner, &admin, None).is_ok());
        assert!(check_recovery_address(&owner, &admin, Some(&other)).is_ok());
        assert_eq!(
            check_recovery_address(&owner, &admin, Some(&owner)),
            Err(ValidationError::RecoveryIsOwner)
        );
        assert_eq!(
            check_recovery_address(&owner, &admin, Some(&admin)),
            Err(ValidationError::RecoveryIsAdmin)
        );
    }
}
