//! Per-date history ledger.

use std::{cmp::Reverse, collections::BTreeMap};

use jiff::civil::Date;

use super::{BucketRegistry, DailyPlan};
use crate::{
    error::Result,
    models::{HistoryEntry, HistorySummary},
};

/// Ledger of what each day's plan looked like.
///
/// The entry list for a date is replaced wholesale on every write. Once the
/// plan rolls over to a new day, earlier dates are never written again.
#[derive(Debug, Clone, Default)]
pub struct HistoryLedger {
    by_date: BTreeMap<Date, Vec<HistoryEntry>>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the full entry list for `date` from a plan.
    ///
    /// One row per included item (title snapshotted from `registry`), plus a
    /// trailing skipped row for `skipped_id` when given.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if a referenced item is missing
    /// from the registry.
    pub fn compose(
        date: Date,
        plan: &DailyPlan,
        registry: &BucketRegistry,
        skipped_id: Option<&str>,
    ) -> Result<Vec<HistoryEntry>> {
        let mut entries = plan
            .item_ids()
            .iter()
            .map(|id| {
                Ok(HistoryEntry {
                    date,
                    item_id: id.clone(),
                    title: registry.get(id)?.title.clone(),
                    completed: plan.is_completed(id),
                    skipped: false,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some(id) = skipped_id {
            entries.push(HistoryEntry {
                date,
                item_id: id.to_string(),
                title: registry.get(id)?.title.clone(),
                completed: false,
                skipped: true,
            });
        }

        Ok(entries)
    }

    /// Replace every entry recorded for `date`.
    pub fn replace(&mut self, date: Date, entries: Vec<HistoryEntry>) {
        self.by_date.insert(date, entries);
    }

    /// Compose and store the entries for `date` in one step.
    ///
    /// # Errors
    ///
    /// See [`HistoryLedger::compose`]. The ledger is untouched on error.
    pub fn write_for_date(
        &mut self,
        date: Date,
        plan: &DailyPlan,
        registry: &BucketRegistry,
        skipped_id: Option<&str>,
    ) -> Result<()> {
        let entries = Self::compose(date, plan, registry, skipped_id)?;
        self.replace(date, entries);
        Ok(())
    }

    /// One summary per recorded date, newest first.
    pub fn summaries(&self) -> Vec<HistorySummary> {
        self.by_date
            .iter()
            .rev()
            .map(|(date, entries)| HistorySummary::from_entries(*date, entries))
            .collect()
    }

    /// Raw entries for `date`, empty if nothing was recorded.
    pub fn entries_for_date(&self, date: Date) -> Vec<HistoryEntry> {
        self.by_date.get(&date).cloned().unwrap_or_default()
    }

    /// Every entry referencing `item_id`, newest date first.
    pub fn entries_for_item(&self, item_id: &str) -> Vec<HistoryEntry> {
        let mut entries: Vec<HistoryEntry> = self
            .by_date
            .values()
            .flatten()
            .filter(|entry| entry.item_id == item_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| Reverse(entry.date));
        entries
    }

    /// Number of dates with recorded entries.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}
