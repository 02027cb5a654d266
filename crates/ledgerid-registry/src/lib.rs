//! # ledgerid Registry
//!
//! The authorization and state-transition engine: who may mutate which
//! record, under what preconditions, and with what numeric and temporal
//! invariants.
//!
//! ## Components
//!
//! - [`AccessState`] - admin identity, optional pause guardian, and the
//!   global pause flag; consulted first by every mutating entry point
//! - [`IdentityStore`] - registration, recovery, status transitions
//! - [`CredentialStore`] - issuance and revocation under the global
//!   sequence counter
//! - [`ProofStore`] - proof submission and administrative verification
//! - [`RegistryState`] - the single owned struct composing all of the
//!   above, with one method per public operation
//!
//! ## Semantics
//!
//! Operations are total: every precondition is checked before any write,
//! and the first failure aborts the call with a specific
//! [`RegistryError`]. Successful mutations return an [`Event`] for the
//! monitoring layer. This crate does no locking; serialization of calls
//! is the embedder's job (see the `ledgerid` facade crate).

pub mod access;
pub mod credential;
pub mod error;
pub mod events;
pub mod identity;
pub mod proof;
pub mod reputation;
pub mod state;

pub use access::AccessState;
pub use credential::CredentialStore;
pub use error::{RegistryError, Result};
pub use events::Event;
pub use identity::IdentityStore;
pub use proof::ProofStore;
pub use state::RegistryState;
