//! Core domain logic for the business-operations update log.
//! This crate is the single source of truth for record and category
//! invariants; UI collaborators (form, editable table, dashboard) call the
//! service layer and render what it returns.

pub mod logging;
pub mod model;
pub mod service;
pub mod stats;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::{CategoryRegistry, DEFAULT_CATEGORIES};
pub use model::record::{
    parse_priority, parse_status, Priority, RecordId, Status, UpdateRecord, ValidationError,
    RECORD_ID_BASE,
};
pub use service::tracker_service::{TrackerService, TrackerServiceError};
pub use stats::summary::{summarize, PriorityCount, StatsSummary, StatusCount};
pub use store::record_store::{
    MemoryRecordStore, MergeOutcome, RecordRepository, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
