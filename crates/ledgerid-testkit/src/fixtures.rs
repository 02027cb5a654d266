//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: deterministic principals
//! derived from labels, a manually driven clock, and a registry
//! pre-wired with an admin.

use std::sync::Arc;

use ledgerid::{Registry, RegistryConfig};
use ledgerid_core::{Hash32, ManualClock, Moment, Principal};

/// Derive a deterministic principal from a label.
pub fn principal(label: &str) -> Principal {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"ledgerid-test-principal:");
    hasher.update(label.as_bytes());
    Principal::from_bytes(*hasher.finalize().as_bytes())
}

/// A 32-byte hash filled with one byte value.
pub fn hash(byte: u8) -> Hash32 {
    Hash32::from_bytes([byte; 32])
}

/// A uniformly random principal, for tests that need unrelated actors.
pub fn random_principal() -> Principal {
    let mut bytes = [0u8; 32];
    rand::Rng::fill(&mut rand::thread_rng(), &mut bytes[..]);
    Principal::from_bytes(bytes)
}

/// A test fixture with a manual clock and a registry whose admin is
/// `principal("admin")`.
pub struct TestFixture {
    pub admin: Principal,
    pub clock: Arc<ManualClock>,
    pub registry: Registry<Arc<ManualClock>>,
}

impl TestFixture {
    /// Create a fixture with the clock at ordinal 1.
    pub fn new() -> Self {
        let admin = principal("admin");
        let clock = Arc::new(ManualClock::starting_at(Moment::new(1, 5_000)));
        let registry = Registry::with_clock(admin, Arc::clone(&clock), RegistryConfig::default());
        Self {
            admin,
            clock,
            registry,
        }
    }

    /// Register a principal derived from `label` with a non-zero hash
    /// and no recovery address.
    pub fn register(&self, label: &str) -> Principal {
        let p = principal(label);
        self.registry
            .register_identity(p, Hash32::digest(label.as_bytes()), None)
            .unwrap();
        p
    }

    /// Register a principal with a recovery address, both derived from
    /// labels.
    pub fn register_with_recovery(&self, label: &str, recovery_label: &str) -> Principal {
        let p = principal(label);
        self.registry
            .register_identity(
                p,
                Hash32::digest(label.as_bytes()),
                Some(principal(recovery_label)),
            )
            .unwrap();
        p
    }

    /// Advance the manual clock by `n` ordinals.
    pub fn advance(&self, n: u64) {
        self.clock.advance(n);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
