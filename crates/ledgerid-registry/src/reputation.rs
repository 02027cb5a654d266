//! Reputation arithmetic: signed-delta application with a zero floor.
//!
//! Positive deltas are applied without an enforced ceiling; the
//! documented [`MAX_REPUTATION`](ledgerid_core::MAX_REPUTATION) constant
//! is a policy convention, not a checked invariant. Negative deltas fail
//! outright rather than clamping, so the floor at zero holds by
//! construction.

use crate::error::{RegistryError, Result};

/// Apply a signed delta to a score.
pub fn apply_delta(current: u64, delta: i64) -> Result<u64> {
    if delta >= 0 {
        Ok(current.saturating_add(delta as u64))
    } else {
        let magnitude = delta.unsigned_abs();
        if current < magnitude {
            return Err(RegistryError::ReputationUnderflow { current, delta });
        }
        Ok(current - magnitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerid_core::MAX_REPUTATION;

    #[test]
    fn test_positive_delta_has_no_ceiling() {
        // Pins current behavior: the documented maximum is not enforced.
        let score = apply_delta(MAX_REPUTATION, 500).unwrap();
        assert_eq!(score, MAX_REPUTATION + 500);
    }

    #[test]
    fn test_negative_delta_floor() {
        assert_eq!(apply_delta(100, -100), Ok(0));
        assert_eq!(
            apply_delta(100, -101),
            Err(RegistryError::ReputationUnderflow {
                current: 100,
                delta: -101,
            })
        );
    }

    #[test]
    fn test_zero_delta_is_identity() {
        assert_eq!(apply_delta(42, 0), Ok(42));
    }

    #[test]
    fn test_i64_min_magnitude_does_not_overflow() {
        assert_eq!(
            apply_delta(0, i64::MIN),
            Err(RegistryError::ReputationUnderflow {
                current: 0,
                delta: i64::MIN,
            })
        );
    }

    proptest::proptest! {
        #[test]
        fn delta_application_matches_wide_arithmetic(
            current in 0u64..=u64::MAX / 2,
            delta in proptest::prelude::any::<i64>(),
        ) {
            match apply_delta(current, delta) {
                Ok(updated) => {
                    proptest::prop_assert_eq!(
                        updated as i128,
                        current as i128 + delta as i128
                    );
                }
                Err(RegistryError::ReputationUnderflow { .. }) => {
                    proptest::prop_assert!(delta < 0);
                    proptest::prop_assert!((current as i128) < -(delta as i128));
                }
                Err(other) => return Err(proptest::test_runner::TestCaseError::fail(
                    format!("unexpected error: {other}"),
                )),
            }
        }
    }
}
