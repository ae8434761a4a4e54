//! History ledger rows and per-day summaries.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// One row of the permanent per-day ledger.
///
/// The title is a snapshot taken when the row was written, so later edits
/// to the bucket item never alter history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub date: Date,
    pub item_id: String,
    pub title: String,
    pub completed: bool,
    pub skipped: bool,
}

/// Aggregate counts for one ledger date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistorySummary {
    pub date: Date,
    /// Total rows written for the date, skipped rows included
    pub total: u32,
    pub completed: u32,
    pub skipped: u32,
}

impl HistorySummary {
    /// Summarise the rows recorded for `date`.
    pub fn from_entries(date: Date, entries: &[HistoryEntry]) -> Self {
        let completed = entries.iter().filter(|entry| entry.completed).count() as u32;
        let skipped = entries.iter().filter(|entry| entry.skipped).count() as u32;

        Self {
            date,
            total: entries.len() as u32,
            completed,
            skipped,
        }
    }
}
