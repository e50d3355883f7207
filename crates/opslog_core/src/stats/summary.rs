//! Summary aggregation over the session record sequence.
//!
//! # Responsibility
//! - Produce the totals and group-by counts the dashboard renders as
//!   metric tiles and charts.
//!
//! # Invariants
//! - Recomputed from scratch per call; no cached or incremental state.
//! - Category counts cover only categories present in the data (the
//!   category chart derives its domain from the data). Status and priority
//!   counts cover the full fixed domain, zeros included (the metric tiles
//!   always render every state).

use crate::model::record::{Priority, Status, UpdateRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Count of records in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

/// Count of records at one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriorityCount {
    pub priority: Priority,
    pub count: usize,
}

/// Derived statistics for one snapshot of the record sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSummary {
    /// Total number of logged updates.
    pub total: usize,
    /// Counts per category actually present, in lexicographic order.
    pub by_category: BTreeMap<String, usize>,
    /// Counts for every status, zeros included, in declaration order.
    pub by_status: Vec<StatusCount>,
    /// Counts for every priority, zeros included, ascending order.
    pub by_priority: Vec<PriorityCount>,
}

/// Computes dashboard statistics from the current record sequence.
///
/// Pure function: identical input yields identical output, and calling it
/// has no effect on the records.
pub fn summarize(records: &[UpdateRecord]) -> StatsSummary {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    let mut status_counts = [0usize; Status::ALL.len()];
    let mut priority_counts = [0usize; Priority::ALL.len()];

    for record in records {
        *by_category.entry(record.category.clone()).or_insert(0) += 1;
        status_counts[record.status as usize] += 1;
        priority_counts[record.priority as usize] += 1;
    }

    StatsSummary {
        total: records.len(),
        by_category,
        by_status: Status::ALL
            .iter()
            .map(|&status| StatusCount {
                status,
                count: status_counts[status as usize],
            })
            .collect(),
        by_priority: Priority::ALL
            .iter()
            .map(|&priority| PriorityCount {
                priority,
                count: priority_counts[priority as usize],
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::model::record::{Priority, Status};

    #[test]
    fn empty_input_yields_zeroed_fixed_domains() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert!(summary.by_category.is_empty());
        assert_eq!(summary.by_status.len(), Status::ALL.len());
        assert_eq!(summary.by_priority.len(), Priority::ALL.len());
        assert!(summary.by_status.iter().all(|entry| entry.count == 0));
        assert!(summary.by_priority.iter().all(|entry| entry.count == 0));
    }
}
