//! Category vocabulary for logged updates.
//!
//! # Responsibility
//! - Seed the built-in category list shown by the form selectbox.
//! - Accept user-defined custom categories with duplicate protection.
//!
//! # Invariants
//! - Names are compared case-sensitively; `"Legal Update"` and
//!   `"legal update"` are distinct entries.
//! - Insertion order is preserved so collaborator listings are stable.

use crate::model::record::ValidationError;

/// Built-in categories available in every fresh session.
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "Lead Contacted",
    "Client Payment Received",
    "Client Feedback",
    "Software Update",
    "App Update",
    "Digital Marketing Update",
    "Mixing and Mastering Update",
    "Operations Update",
    "Utilities Update",
    "Resource Purchase",
    "Legal Update",
    "UI/UX Update",
];

/// Ordered set of currently-valid category names for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// Creates a registry seeded with [`DEFAULT_CATEGORIES`].
    pub fn new() -> Self {
        Self {
            names: DEFAULT_CATEGORIES.iter().map(|name| (*name).to_string()).collect(),
        }
    }

    /// Returns whether `name` is currently valid (case-sensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|known| known == name)
    }

    /// Adds a custom category.
    ///
    /// # Errors
    /// - `EmptyCategoryName` when `name` is empty or whitespace-only.
    /// - `DuplicateCategory` when `name` already exists.
    pub fn add(&mut self, name: &str) -> Result<(), ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyCategoryName);
        }
        if self.contains(name) {
            return Err(ValidationError::DuplicateCategory(name.to_string()));
        }
        self.names.push(name.to_string());
        Ok(())
    }

    /// Adds `name` if absent, without treating an existing entry as an
    /// error. Used when merging externally-sourced records whose categories
    /// were created in another session.
    pub(crate) fn adopt(&mut self, name: &str) {
        if !name.trim().is_empty() && !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    /// Current valid names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}
