//! Update record domain model.
//!
//! # Responsibility
//! - Define the canonical logged business event and its enumerated fields.
//! - Provide string round-trips used by the form/table boundary.
//!
//! # Invariants
//! - `id` is unique per session and strictly increasing in creation order.
//! - `created_at` is set once at creation and never mutated afterwards.
//! - Only `status` and `priority` are editable after creation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First id handed out by a fresh session store.
pub const RECORD_ID_BASE: u64 = 1001;

static RECORD_ID_TEXT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:UPDATE-)?([0-9]{1,18})$").expect("valid record id pattern"));

/// Stable per-session identifier for one logged update.
///
/// Displayed to collaborators in the `UPDATE-<n>` form; parsed back from
/// either that form or a bare integer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Parses the display form `UPDATE-<n>` or a bare integer.
    ///
    /// Returns `None` for anything else, including negative or oversized
    /// numbers.
    pub fn parse(text: &str) -> Option<Self> {
        let caps = RECORD_ID_TEXT_RE.captures(text.trim())?;
        caps.get(1)?.as_str().parse().ok().map(Self)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "UPDATE-{}", self.0)
    }
}

/// Urgency scale for one update. Ordered: `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// All variants in ascending order, for fixed-domain aggregation.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Human-facing label as rendered by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Parses the stable wire form produced by [`Priority::as_str`].
pub fn parse_priority(value: &str) -> Option<Priority> {
    match value {
        "low" => Some(Priority::Low),
        "medium" => Some(Priority::Medium),
        "high" => Some(Priority::High),
        _ => None,
    }
}

/// Work state of one update. No ordering constraint between variants:
/// any state may transition to any other through an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    InProgress,
    Completed,
    OnHold,
}

impl Status {
    /// All variants in declaration order, for fixed-domain aggregation.
    pub const ALL: [Status; 4] = [
        Status::NotStarted,
        Status::InProgress,
        Status::Completed,
        Status::OnHold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::NotStarted => "not_started",
            Status::InProgress => "in_progress",
            Status::Completed => "completed",
            Status::OnHold => "on_hold",
        }
    }

    /// Human-facing label as rendered by the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::OnHold => "On Hold",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

/// Parses the stable wire form produced by [`Status::as_str`].
pub fn parse_status(value: &str) -> Option<Status> {
    match value {
        "not_started" => Some(Status::NotStarted),
        "in_progress" => Some(Status::InProgress),
        "completed" => Some(Status::Completed),
        "on_hold" => Some(Status::OnHold),
        _ => None,
    }
}

/// Validation failures for record and category input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Description is empty or whitespace-only.
    EmptyDescription,
    /// Category name is not in the currently-valid set.
    UnknownCategory(String),
    /// Custom category name is empty or whitespace-only.
    EmptyCategoryName,
    /// Custom category name already exists (case-sensitive match).
    DuplicateCategory(String),
    /// Field exists on the record but is immutable after creation.
    ImmutableField(String),
    /// Field name does not exist on the record.
    UnknownField(String),
    /// Value is not a valid status.
    InvalidStatus(String),
    /// Value is not a valid priority.
    InvalidPriority(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "update description must not be empty"),
            Self::UnknownCategory(name) => write!(f, "unknown category: `{name}`"),
            Self::EmptyCategoryName => write!(f, "category name must not be empty"),
            Self::DuplicateCategory(name) => {
                write!(f, "category already exists: `{name}`")
            }
            Self::ImmutableField(field) => {
                write!(f, "field `{field}` cannot be edited after creation")
            }
            Self::UnknownField(field) => write!(f, "unknown record field: `{field}`"),
            Self::InvalidStatus(value) => write!(
                f,
                "invalid status `{value}`; expected not_started|in_progress|completed|on_hold"
            ),
            Self::InvalidPriority(value) => {
                write!(f, "invalid priority `{value}`; expected low|medium|high")
            }
        }
    }
}

impl Error for ValidationError {}

/// One logged business event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRecord {
    /// Stable sequential id, assigned by the store at creation.
    pub id: RecordId,
    /// Free-text description supplied through the form.
    pub description: String,
    /// Category name from the session's valid set.
    pub category: String,
    /// Editable after creation through the table.
    pub priority: Priority,
    /// Editable after creation through the table.
    pub status: Status,
    /// Unix epoch milliseconds, stamped once by the store.
    pub created_at: i64,
}

impl UpdateRecord {
    /// Builds a record with the default status.
    ///
    /// Callers are the store's append path and external merge sources; the
    /// store remains responsible for id assignment and category validity.
    pub fn new(
        id: RecordId,
        description: impl Into<String>,
        category: impl Into<String>,
        priority: Priority,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            priority,
            status: Status::default(),
            created_at,
        }
    }

    /// Checks record-local constraints.
    ///
    /// Category membership is session state and is checked by the store,
    /// not here.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }
}
