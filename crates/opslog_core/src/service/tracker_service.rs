//! Tracker use-case service.
//!
//! # Responsibility
//! - Provide the string-typed entry points the form, editable table and
//!   dashboard collaborators call.
//! - Translate boundary text (record ids, priority names) into typed store
//!   operations.
//!
//! # Invariants
//! - Service APIs never bypass store validation.
//! - Read APIs (`list_updates`, `categories`, `summary`) are side-effect
//!   free and safe to call at arbitrary frequency.

use crate::model::record::{parse_priority, RecordId, UpdateRecord, ValidationError};
use crate::stats::summary::{summarize, StatsSummary};
use crate::store::record_store::{MergeOutcome, RecordRepository, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for tracker use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerServiceError {
    /// Record id text is neither `UPDATE-<n>` nor a bare integer.
    InvalidRecordId(String),
    /// Priority text is not one of the known names.
    InvalidPriority(String),
    /// Store-level validation or lookup failure.
    Store(StoreError),
}

impl Display for TrackerServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecordId(text) => write!(f, "invalid record id: `{text}`"),
            Self::InvalidPriority(text) => {
                write!(f, "invalid priority `{text}`; expected low|medium|high")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TrackerServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for TrackerServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case facade over a record repository.
pub struct TrackerService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> TrackerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Logs one update from form input.
    ///
    /// # Contract
    /// - `priority` is the wire form (`low|medium|high`).
    /// - Returns the stored record with assigned id and timestamp.
    pub fn log_update(
        &mut self,
        description: &str,
        category: &str,
        priority: &str,
    ) -> Result<UpdateRecord, TrackerServiceError> {
        let priority = parse_priority(priority)
            .ok_or_else(|| TrackerServiceError::InvalidPriority(priority.to_string()))?;
        Ok(self.repo.append(description, category, priority)?)
    }

    /// Logs one update under a user-defined category, creating the
    /// category first when it does not exist yet.
    ///
    /// Re-logging into an already-registered custom category is not an
    /// error at this level; only the explicit `add_category` path treats a
    /// duplicate as a failure.
    pub fn log_update_with_custom_category(
        &mut self,
        description: &str,
        category: &str,
        priority: &str,
    ) -> Result<UpdateRecord, TrackerServiceError> {
        match self.repo.add_category(category) {
            Ok(()) => {}
            Err(StoreError::Validation(ValidationError::DuplicateCategory(_))) => {}
            Err(err) => return Err(err.into()),
        }
        self.log_update(description, category, priority)
    }

    /// Applies one in-place edit from the editable table.
    ///
    /// # Contract
    /// - `id_text` is the display form (`UPDATE-<n>`) or a bare integer.
    /// - Only `status` and `priority` are editable.
    pub fn edit_field(
        &mut self,
        id_text: &str,
        field: &str,
        new_value: &str,
    ) -> Result<(), TrackerServiceError> {
        let id = RecordId::parse(id_text)
            .ok_or_else(|| TrackerServiceError::InvalidRecordId(id_text.to_string()))?;
        Ok(self.repo.update_field(id, field, new_value)?)
    }

    /// Registers a new custom category for the form selectbox.
    pub fn add_category(&mut self, name: &str) -> Result<(), TrackerServiceError> {
        Ok(self.repo.add_category(name)?)
    }

    /// All updates in creation order.
    pub fn list_updates(&self) -> Vec<UpdateRecord> {
        self.repo.list_all()
    }

    /// Currently-valid category names in insertion order.
    pub fn categories(&self) -> Vec<String> {
        self.repo.list_categories()
    }

    /// Dashboard statistics for the current record sequence.
    pub fn summary(&self) -> StatsSummary {
        summarize(&self.repo.list_all())
    }

    /// Merges externally-sourced records, skipping ids already present.
    pub fn merge(
        &mut self,
        incoming: Vec<UpdateRecord>,
    ) -> Result<MergeOutcome, TrackerServiceError> {
        Ok(self.repo.merge_records(incoming)?)
    }
}
