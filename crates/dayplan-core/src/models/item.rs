//! Bucket item model definition and the required-today rule.

use jiff::{Timestamp, civil::Date};
use serde::{Deserialize, Serialize};

/// A task definition in the bucket catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BucketItem {
    /// Unique identifier, immutable after creation
    pub id: String,

    /// Short title of the task
    pub title: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// Mandatory on every date regardless of deadline
    #[serde(default)]
    pub required: bool,

    /// Single date on which the item becomes mandatory
    pub deadline_date: Option<Date>,

    /// Recurrence tag (informational only)
    pub repeat_every: String,

    /// Excluded from planning but still listed
    #[serde(default)]
    pub disabled: bool,

    /// Soft-delete tombstone; excluded from every read and write path
    #[serde(default)]
    pub deleted: bool,

    /// Timestamp when the item was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the item was last modified (UTC)
    pub updated_at: Timestamp,
}

impl BucketItem {
    /// Whether the item is mandatory on `date`.
    ///
    /// Disabled items are never required. Deleted items are filtered out
    /// before this is ever asked.
    pub fn is_required_on(&self, date: Date) -> bool {
        !self.disabled && (self.required || self.deadline_date == Some(date))
    }

    /// Whether the item may be added to a plan.
    pub fn is_plannable(&self) -> bool {
        !self.deleted && !self.disabled
    }
}
