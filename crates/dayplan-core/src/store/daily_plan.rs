//! The single current-day plan cursor and its rollover rule.

use std::collections::HashSet;

use jiff::civil::Date;

/// State of the current day's plan.
///
/// Lifecycle: *uninitialized* (no date) until the first setup or add,
/// then *active* for that date. Once the calendar moves past the plan date
/// the plan is *stale*, and [`DailyPlan::roll_over`] clears it back to the
/// uninitialized state before anything else observes it.
///
/// Completed ids are always a subset of the included ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyPlan {
    plan_date: Option<Date>,
    setup_locked: bool,
    item_ids: Vec<String>,
    completed_ids: HashSet<String>,
}

impl DailyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the plan if it belongs to a date other than `today`.
    ///
    /// Returns the stale plan date when a reset happened. A plan with no
    /// date, or one already dated today, is left untouched.
    pub fn roll_over(&mut self, today: Date) -> Option<Date> {
        match self.plan_date {
            Some(date) if date != today => {
                *self = Self::default();
                Some(date)
            }
            _ => None,
        }
    }

    pub fn plan_date(&self) -> Option<Date> {
        self.plan_date
    }

    /// The plan date, or `today` when no plan has been started.
    pub fn date_or(&self, today: Date) -> Date {
        self.plan_date.unwrap_or(today)
    }

    pub fn is_setup_locked(&self) -> bool {
        self.setup_locked
    }

    /// Included item ids, in the order they were added.
    pub fn item_ids(&self) -> &[String] {
        &self.item_ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.item_ids.iter().any(|item_id| item_id == id)
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed_ids.contains(id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed_ids.len()
    }

    /// Commit the day's setup: replace the contents with `item_ids`
    /// (deduplicated, first occurrence wins), clear completions and lock.
    pub fn lock_setup(&mut self, date: Date, item_ids: &[String]) {
        self.plan_date = Some(date);
        self.item_ids = dedup(item_ids);
        self.completed_ids.clear();
        self.setup_locked = true;
    }

    /// Date the plan for `date` if no plan has been started yet.
    pub fn start(&mut self, date: Date) {
        if self.plan_date.is_none() {
            self.plan_date = Some(date);
        }
    }

    /// Add an id to the plan. Returns false if it was already included.
    pub fn include(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.item_ids.push(id.to_string());
        true
    }

    /// Drop an id from both the included and completed sets.
    /// Returns false if it was not included.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.item_ids.len();
        self.item_ids.retain(|item_id| item_id != id);
        self.completed_ids.remove(id);
        self.item_ids.len() != before
    }

    /// Mark an included id as completed. Ids outside the plan are ignored
    /// and return false.
    pub fn complete(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.completed_ids.insert(id.to_string());
        true
    }

    /// Whether every completed id is also included.
    pub fn is_consistent(&self) -> bool {
        self.completed_ids.iter().all(|id| self.contains(id))
    }
}

fn dedup(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}
