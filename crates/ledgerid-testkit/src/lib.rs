//! # ledgerid Testkit
//!
//! Testing utilities for the ledgerid registry.
//!
//! ## Fixtures
//!
//! Quickly set up test scenarios against a manually driven clock:
//!
//! ```rust
//! use ledgerid_testkit::fixtures::TestFixture;
//!
//! let fixture = TestFixture::new();
//! let alice = fixture.register("alice");
//! let bob = fixture.register("bob");
//! let key = fixture
//!     .registry
//!     .issue_credential(alice, bob, ledgerid_testkit::fixtures::hash(0xcc), 100, "Test")
//!     .unwrap();
//! assert_eq!(fixture.registry.verify_credential(&key), Ok(true));
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use ledgerid_testkit::generators;
//!
//! proptest! {
//!     #[test]
//!     fn scores_never_negative(delta in generators::delta()) {
//!         // ...
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{hash, principal, TestFixture};
