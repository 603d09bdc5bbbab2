//! Merkle-whitelist one-time token claim gate.
//!
//! A fixed set of addresses is committed to as a single Merkle root. Each
//! whitelisted address can mint a fixed allocation exactly once by presenting
//! a membership proof against the currently stored root; an admin can rotate
//! the root to onboard a new whitelist without touching prior claims.
//!
//! The crate is split the usual way:
//! - [`domain`] — leaf encoding, commitment tree construction, proof
//!   verification. Pure, no state.
//! - [`gate`] — the claim state machine composing verification with the
//!   one-time-claim bookkeeping.
//! - [`ports`] — the external token-ledger collaborator the gate credits
//!   allocations through.
//! - [`adapters`] — an in-memory ledger implementation for tests and demos.

pub mod adapters;
pub mod domain;
pub mod gate;
pub mod ports;
