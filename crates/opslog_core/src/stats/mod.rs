//! Derived dashboard statistics.
//!
//! # Responsibility
//! - Compute summary counts from the current record sequence on demand.
//!
//! # Invariants
//! - Aggregation is a pure function of its input; it holds no state and
//!   can never be stale.

pub mod summary;
