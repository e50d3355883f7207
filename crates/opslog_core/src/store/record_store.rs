//! Record repository contract and in-memory session implementation.
//!
//! # Responsibility
//! - Own the authoritative in-session sequence of update records.
//! - Assign ids and creation timestamps; gate every mutation through
//!   validation.
//!
//! # Invariants
//! - Ids are strictly increasing in creation order and never reused, even
//!   after merging externally-sourced records.
//! - A failed operation leaves the store observably unchanged.
//! - Records are never deleted; lifetime ends with the session.

use crate::model::category::CategoryRegistry;
use crate::model::record::{
    parse_priority, parse_status, Priority, RecordId, UpdateRecord, ValidationError,
    RECORD_ID_BASE,
};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for record operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Validation(ValidationError),
    NotFound(RecordId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "update not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Outcome of merging externally-sourced records into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Records appended to the session.
    pub added: usize,
    /// Records skipped because their id already existed.
    pub skipped_duplicates: usize,
}

/// Repository interface for session record operations.
///
/// The service layer programs against this trait so tests can substitute
/// alternative stores without touching use-case code.
pub trait RecordRepository {
    fn append(
        &mut self,
        description: &str,
        category: &str,
        priority: Priority,
    ) -> StoreResult<UpdateRecord>;
    fn update_field(&mut self, id: RecordId, field: &str, new_value: &str) -> StoreResult<()>;
    fn get(&self, id: RecordId) -> Option<UpdateRecord>;
    fn list_all(&self) -> Vec<UpdateRecord>;
    fn add_category(&mut self, name: &str) -> StoreResult<()>;
    fn list_categories(&self) -> Vec<String>;
    fn merge_records(&mut self, incoming: Vec<UpdateRecord>) -> StoreResult<MergeOutcome>;
}

/// In-memory session store. One instance per session, owned by the caller;
/// there is no ambient global instance.
#[derive(Debug)]
pub struct MemoryRecordStore {
    records: Vec<UpdateRecord>,
    categories: CategoryRegistry,
    next_id: u64,
}

impl MemoryRecordStore {
    /// Creates an empty store seeded with the built-in categories.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: CategoryRegistry::new(),
            next_id: RECORD_ID_BASE,
        }
    }

    fn contains_id(&self, id: RecordId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordRepository for MemoryRecordStore {
    fn append(
        &mut self,
        description: &str,
        category: &str,
        priority: Priority,
    ) -> StoreResult<UpdateRecord> {
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if !self.categories.contains(category) {
            return Err(ValidationError::UnknownCategory(category.to_string()).into());
        }

        let record = UpdateRecord::new(
            RecordId::new(self.next_id),
            description,
            category,
            priority,
            current_epoch_ms(),
        );
        self.next_id += 1;
        self.records.push(record.clone());
        Ok(record)
    }

    fn update_field(&mut self, id: RecordId, field: &str, new_value: &str) -> StoreResult<()> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        match field {
            "status" => {
                let status = parse_status(new_value)
                    .ok_or_else(|| ValidationError::InvalidStatus(new_value.to_string()))?;
                record.status = status;
                Ok(())
            }
            "priority" => {
                let priority = parse_priority(new_value)
                    .ok_or_else(|| ValidationError::InvalidPriority(new_value.to_string()))?;
                record.priority = priority;
                Ok(())
            }
            "id" | "description" | "category" | "created_at" => {
                Err(ValidationError::ImmutableField(field.to_string()).into())
            }
            other => Err(ValidationError::UnknownField(other.to_string()).into()),
        }
    }

    fn get(&self, id: RecordId) -> Option<UpdateRecord> {
        self.records.iter().find(|record| record.id == id).cloned()
    }

    fn list_all(&self) -> Vec<UpdateRecord> {
        self.records.clone()
    }

    fn add_category(&mut self, name: &str) -> StoreResult<()> {
        self.categories.add(name)?;
        Ok(())
    }

    fn list_categories(&self) -> Vec<String> {
        self.categories.names().to_vec()
    }

    fn merge_records(&mut self, incoming: Vec<UpdateRecord>) -> StoreResult<MergeOutcome> {
        // Validate the whole batch before touching state so a bad row
        // cannot leave a partial merge behind. Blank categories are rejected
        // here because adoption into the registry would skip them, leaving a
        // record outside the valid category set.
        for record in &incoming {
            record.validate()?;
            if record.category.trim().is_empty() {
                return Err(ValidationError::EmptyCategoryName.into());
            }
        }

        let mut outcome = MergeOutcome {
            added: 0,
            skipped_duplicates: 0,
        };

        for record in incoming {
            if self.contains_id(record.id) {
                outcome.skipped_duplicates += 1;
                continue;
            }
            // Categories created in another session become valid here.
            self.categories.adopt(&record.category);
            self.next_id = self.next_id.max(record.id.value().saturating_add(1));
            self.records.push(record);
            outcome.added += 1;
        }

        info!(
            "event=records_merged module=store status=ok added={} skipped={}",
            outcome.added, outcome.skipped_duplicates
        );
        Ok(outcome)
    }
}

fn current_epoch_ms() -> i64 {
    // A clock before the Unix epoch collapses to 0 rather than failing the
    // append; record creation must not depend on wall-clock sanity.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
