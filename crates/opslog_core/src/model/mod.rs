//! Domain model for the business-operations update log.
//!
//! # Responsibility
//! - Define the canonical `UpdateRecord` shape shared by form, table and
//!   dashboard collaborators.
//! - Keep the category vocabulary (built-in plus custom) in one place.
//!
//! # Invariants
//! - Every record is identified by a stable, never-reused `RecordId`.
//! - Enumerated fields always carry one of their declared variants.

pub mod category;
pub mod record;
