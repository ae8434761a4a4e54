//! Builder for creating and configuring Planner instances.

use std::sync::Arc;

use jiff::civil::Date;
use log::debug;

use super::Planner;
use crate::{
    clock::{Clock, SystemClock},
    models::NewItem,
    store::BucketRegistry,
};

/// Builder for creating and configuring Planner instances.
#[derive(Clone)]
pub struct PlannerBuilder {
    clock: Option<Arc<dyn Clock>>,
    sample_items: bool,
}

impl PlannerBuilder {
    /// Creates a new builder with default settings: UTC system clock and an
    /// empty catalog.
    pub fn new() -> Self {
        Self {
            clock: None,
            sample_items: false,
        }
    }

    /// Sets the clock the planner reads "today" from.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Start the catalog with a few sample household items.
    ///
    /// One of them carries a deadline of the clock's current date, so it
    /// shows up as required on the day the planner is built.
    pub fn with_sample_items(mut self, enabled: bool) -> Self {
        self.sample_items = enabled;
        self
    }

    /// Builds the configured planner instance.
    pub fn build(self) -> Planner {
        let clock = self
            .clock
            .unwrap_or_else(|| Arc::new(SystemClock::default()));

        let mut registry = BucketRegistry::new();
        if self.sample_items {
            let now = clock.now();
            for item in sample_items(clock.today()) {
                registry.create(item, now);
            }
            debug!("Seeded bucket with {} sample items", registry.len());
        }

        Planner::new(clock, registry)
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_items(today: Date) -> Vec<NewItem> {
    vec![
        NewItem {
            title: "Clean the kitchen".to_string(),
            notes: "Weekly household task".to_string(),
            required: true,
            deadline_date: None,
            repeat_every: "weekly".to_string(),
        },
        NewItem {
            title: "Exercise".to_string(),
            notes: "At least 30 minutes".to_string(),
            required: false,
            deadline_date: None,
            repeat_every: "daily".to_string(),
        },
        NewItem {
            title: "Pay electricity bill".to_string(),
            notes: "Payment before due date".to_string(),
            required: true,
            deadline_date: Some(today),
            repeat_every: "monthly".to_string(),
        },
    ]
}
