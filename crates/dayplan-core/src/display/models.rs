//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the structs stay plain data.
//! Everything renders as Markdown: headings for single resources, bullet
//! metadata, and a checkbox per planned item.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{BucketItem, HistoryEntry, HistorySummary, PlanItem, PlanView};

impl BucketItem {
    /// Status badge shown next to the title.
    fn badge(&self) -> &'static str {
        match (self.disabled, self.required) {
            (true, _) => " (disabled)",
            (false, true) => " (required)",
            (false, false) => "",
        }
    }
}

impl fmt::Display for BucketItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}{}", self.title, self.badge())?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(deadline) = self.deadline_date {
            writeln!(f, "- Deadline: {deadline}")?;
        }
        writeln!(f, "- Repeats: {}", self.repeat_every)?;
        writeln!(f, "- Created: {}", LocalDateTime(self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(self.updated_at))?;

        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { 'x' } else { ' ' };
        write!(f, "- [{mark}] {} (ID: {})", self.item.title, self.item.id)?;
        if self.item.required {
            write!(f, " *required*")?;
        } else if let Some(deadline) = self.item.deadline_date {
            write!(f, " *due {deadline}*")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Plan for {}", self.date)?;
        writeln!(f)?;

        let setup = if self.setup_locked {
            "locked"
        } else {
            "open"
        };
        writeln!(f, "- Setup: {setup}")?;
        writeln!(
            f,
            "- Progress: {}/{}",
            self.completed_count(),
            self.items.len()
        )?;
        writeln!(f)?;

        if self.items.is_empty() {
            writeln!(f, "No items planned for today.")?;
        } else {
            for item in &self.items {
                write!(f, "{item}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match (self.completed, self.skipped) {
            (true, _) => "completed",
            (false, true) => "skipped",
            (false, false) => "not completed",
        };
        writeln!(
            f,
            "- {}: {} (ID: {}), {state}",
            self.date, self.title, self.item_id
        )
    }
}

impl fmt::Display for HistorySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {}: {}/{} completed, {} skipped",
            self.date, self.completed, self.total, self.skipped
        )
    }
}
