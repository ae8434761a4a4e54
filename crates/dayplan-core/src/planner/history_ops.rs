//! History ledger queries for the Planner.

use super::Planner;
use crate::{
    error::Result,
    models::{HistoryEntry, HistorySummary},
    params::{HistoryDate, ItemRef},
};

impl Planner {
    /// One summary row per recorded date, newest first.
    pub fn list_history(&self) -> Vec<HistorySummary> {
        self.with_state(|state, _| state.history.summaries())
    }

    /// Raw entries recorded for a date; empty if the date has none.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the date is not `YYYY-MM-DD`.
    pub fn history_for_date(&self, params: &HistoryDate) -> Result<Vec<HistoryEntry>> {
        let date = params.parse()?;
        Ok(self.with_state(|state, _| state.history.entries_for_date(date)))
    }

    /// Every entry referencing an item across all dates, newest first.
    ///
    /// Works for deleted items too: history outlives the catalog.
    pub fn history_for_item(&self, params: &ItemRef) -> Vec<HistoryEntry> {
        self.with_state(|state, _| state.history.entries_for_item(&params.id))
    }
}
