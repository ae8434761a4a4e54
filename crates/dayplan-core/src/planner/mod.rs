//! High-level planner API for the bucket catalog, the daily plan and the
//! history ledger.
//!
//! [`Planner`] is the only entry point callers use. It owns the three
//! in-memory stores from [`crate::store`] behind a single lock and a
//! [`Clock`] that decides what "today" is.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Operations    │    │  Rollover guard │    │     Stores      │
//! │ (bucket_ops,    │───▶│ (one lock, one  │───▶│ (bucket, plan,  │
//! │  plan_ops, ...) │    │  "today" read)  │    │  history)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Planner`] instances with configuration
//! - [`bucket_ops`]: Catalog operations (list, create, update, delete, ...)
//! - [`plan_ops`]: Daily plan operations (setup, add, remove, complete, ...)
//! - [`history_ops`]: Ledger queries
//!
//! ## Guarantees
//!
//! 1. **Lazy rollover**: every public method reads today's date first and
//!    resets a stale plan before doing anything else. Nothing runs on a timer.
//! 2. **Serialized access**: each method holds the lock from the rollover
//!    check to its last write, so two racing setups see the lock atomically.
//! 3. **All or nothing**: plan changes are staged on a copy and committed
//!    together with the history rewrite, or not at all.
//!
//! # Usage Examples
//!
//! ```rust
//! use dayplan_core::{
//!     PlannerBuilder,
//!     params::{CreateItem, ItemRef, SetupPlan},
//! };
//!
//! # fn example() -> dayplan_core::Result<()> {
//! let planner = PlannerBuilder::new().build();
//!
//! let walk = planner.create_item(&CreateItem {
//!     title: "Walk the dog".to_string(),
//!     required: Some(true),
//!     ..Default::default()
//! })?;
//!
//! let plan = planner.setup_plan(&SetupPlan {
//!     item_ids: vec![walk.id.clone()],
//! })?;
//! assert!(plan.setup_locked);
//!
//! planner.complete_item(&ItemRef::new(&walk.id))?;
//! assert_eq!(planner.get_plan()?.completed_count(), 1);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use jiff::civil::Date;
use log::info;

use crate::{
    clock::Clock,
    error::Result,
    models::{PlanItem, PlanView},
    store::{BucketRegistry, DailyPlan, HistoryLedger},
};

pub mod bucket_ops;
pub mod builder;
pub mod history_ops;
pub mod plan_ops;

#[cfg(test)]
mod tests;

pub use builder::PlannerBuilder;

/// Main planner interface for the daily task-planning engine.
pub struct Planner {
    state: Mutex<PlannerState>,
    clock: Arc<dyn Clock>,
}

/// Everything the lock guards.
#[derive(Debug, Default)]
pub(crate) struct PlannerState {
    pub(crate) registry: BucketRegistry,
    pub(crate) plan: DailyPlan,
    pub(crate) history: HistoryLedger,
}

impl Planner {
    pub(crate) fn new(clock: Arc<dyn Clock>, registry: BucketRegistry) -> Self {
        Self {
            state: Mutex::new(PlannerState {
                registry,
                ..Default::default()
            }),
            clock,
        }
    }

    /// The engine's current notion of today.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Run `op` under the lock after applying the rollover guard.
    ///
    /// Every public method goes through here. A poisoned lock is recovered:
    /// operations only commit fully-built state, so a panic mid-operation
    /// cannot leave it half-written.
    pub(crate) fn with_state<T>(&self, op: impl FnOnce(&mut PlannerState, Date) -> T) -> T {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let today = self.clock.today();
        if let Some(stale) = state.plan.roll_over(today) {
            info!("Day changed from {stale} to {today}; daily plan reset");
        }
        op(&mut state, today)
    }
}

impl PlannerState {
    /// Commit a staged plan together with its history rewrite.
    ///
    /// The ledger is written first; if that fails neither the plan nor the
    /// ledger changes.
    pub(crate) fn commit_plan(
        &mut self,
        next: DailyPlan,
        today: Date,
        skipped_id: Option<&str>,
    ) -> Result<()> {
        let date = next.date_or(today);
        self.history
            .write_for_date(date, &next, &self.registry, skipped_id)?;
        self.plan = next;
        Ok(())
    }

    /// Read-only view of the current plan.
    pub(crate) fn plan_view(&self, today: Date) -> Result<PlanView> {
        let items = self
            .plan
            .item_ids()
            .iter()
            .map(|id| {
                Ok(PlanItem {
                    item: self.registry.get(id)?.clone(),
                    completed: self.plan.is_completed(id),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PlanView {
            date: self.plan.date_or(today),
            setup_locked: self.plan.is_setup_locked(),
            items,
        })
    }
}
