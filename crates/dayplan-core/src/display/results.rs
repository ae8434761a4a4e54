//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create
//! and update operations with consistent messaging and resource display.

use std::fmt;

use crate::models::{BucketItem, CompletionReceipt};

/// Wraps a freshly created resource.
///
/// # Examples
///
/// ```rust
/// use dayplan_core::{display::CreateResult, models::BucketItem};
/// use jiff::Timestamp;
///
/// let item = BucketItem {
///     id: "abc".to_string(),
///     title: "Exercise".to_string(),
///     notes: String::new(),
///     required: false,
///     deadline_date: None,
///     repeat_every: "daily".to_string(),
///     disabled: false,
///     deleted: false,
///     created_at: Timestamp::UNIX_EPOCH,
///     updated_at: Timestamp::UNIX_EPOCH,
/// };
///
/// let output = CreateResult::new(item).to_string();
/// assert!(output.starts_with("Created item with ID: abc"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<BucketItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created item with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wraps an updated resource together with a description of what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<BucketItem> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated item with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl fmt::Display for CompletionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Completed item {} for {}", self.id, self.date)
    }
}
