//! # ledgerid
//!
//! An on-ledger identity, credential, and reputation registry:
//! principals register self-sovereign identities anchored by a
//! commitment hash, receive and revoke verifiable credentials, submit
//! proofs for administrative verification, and accrue an
//! administratively adjusted reputation score.
//!
//! ## Overview
//!
//! The [`Registry`] handle is the single serializing authority over
//! registry state: calls apply atomically in submission order, each one
//! either completing all of its writes or failing with a typed
//! [`RegistryError`] and no partial effect. Successful mutations are
//! announced on a broadcast [`Event`] feed for external observers.
//!
//! ## Usage
//!
//! ```rust
//! use ledgerid::{Hash32, Principal, Registry};
//!
//! let admin = Principal::from_bytes([0xad; 32]);
//! let alice = Principal::from_bytes([0x01; 32]);
//! let bob = Principal::from_bytes([0x02; 32]);
//!
//! let registry = Registry::new(admin);
//! let mut events = registry.subscribe();
//!
//! registry
//!     .register_identity(alice, Hash32::digest(b"alice-commitment"), None)
//!     .unwrap();
//! registry
//!     .register_identity(bob, Hash32::digest(b"bob-commitment"), None)
//!     .unwrap();
//!
//! // Alice issues a credential to Bob, expiring at ordinal 100.
//! let key = registry
//!     .issue_credential(alice, bob, Hash32::digest(b"claim"), 100, "Test")
//!     .unwrap();
//! assert_eq!(registry.verify_credential(&key), Ok(true));
//!
//! // Only the issuer may revoke.
//! registry.revoke_credential(alice, key).unwrap();
//! assert_eq!(registry.verify_credential(&key), Ok(false));
//!
//! assert!(events.try_recv().is_ok());
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `ledgerid::core` - primitives (Principal, Hash32, records, clock)
//! - `ledgerid::engine` - the state-transition engine and its stores

pub mod registry;

// Re-export component crates
pub use ledgerid_core as core;
pub use ledgerid_registry as engine;

// Re-export main types for convenience
pub use registry::{Registry, RegistryConfig};

pub use ledgerid_core::{
    Clock, CredentialKey, CredentialRecord, Hash32, IdentityRecord, IdentityStatus, ManualClock,
    Moment, Principal, ProofRecord, SystemClock, ValidationError,
};
pub use ledgerid_registry::{Event, RegistryError};
