//! Read-side views of the daily plan.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::BucketItem;

/// A planned item together with its completion state for the day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanItem {
    #[serde(flatten)]
    pub item: BucketItem,

    /// Whether the item was completed today
    pub completed: bool,
}

/// Snapshot of the current day's plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanView {
    /// The date the plan applies to (today when no plan exists yet)
    pub date: Date,

    /// True once setup has been submitted for `date`
    pub setup_locked: bool,

    /// Included items in the order they were added
    pub items: Vec<PlanItem>,
}

impl PlanView {
    /// Number of included items marked completed.
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|entry| entry.completed).count()
    }

    /// Look up a planned item by identifier.
    pub fn item(&self, id: &str) -> Option<&PlanItem> {
        self.items.iter().find(|entry| entry.item.id == id)
    }
}

/// Confirmation returned when an item is marked completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionReceipt {
    pub id: String,
    pub completed: bool,
    pub date: Date,
}
