//! Session record storage.
//!
//! # Responsibility
//! - Define the repository contract the service layer programs against.
//! - Provide the in-memory session store that owns all record state.
//!
//! # Invariants
//! - Store writes enforce model validation before any state change.
//! - Store APIs return semantic errors (`NotFound`) alongside validation
//!   failures.

pub mod record_store;
