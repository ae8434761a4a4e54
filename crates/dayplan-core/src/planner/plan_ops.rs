//! Daily plan operations for the Planner.

use log::{debug, info};

use super::Planner;
use crate::{
    error::{PlannerError, Result},
    models::{BucketFilter, BucketItem, CompletionReceipt, PlanView},
    params::{ItemRef, SetupPlan},
};

impl Planner {
    /// Lists the items that any setup submitted today must include.
    pub fn list_required_for_today(&self) -> Vec<BucketItem> {
        self.with_state(|state, today| state.registry.list(BucketFilter::RequiredOn(today)))
    }

    /// Commits and locks today's plan.
    ///
    /// Duplicate ids are ignored. Every id must name a plannable item, and
    /// every item required today must be present.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanAlreadySetUp` - When setup already ran today
    /// * `PlannerError::ItemNotFound` - When an id is missing or deleted
    /// * `PlannerError::ItemDisabled` - When an id names a disabled item
    /// * `PlannerError::RequiredItemsMissing` - When required items are
    ///   left out; lists all of them
    pub fn setup_plan(&self, params: &SetupPlan) -> Result<PlanView> {
        self.with_state(|state, today| {
            if state.plan.is_setup_locked() {
                return Err(PlannerError::PlanAlreadySetUp {
                    date: state.plan.date_or(today),
                });
            }

            for id in &params.item_ids {
                state.registry.get_plannable(id)?;
            }

            let missing: Vec<String> = state
                .registry
                .required_ids_on(today)
                .into_iter()
                .filter(|id| !params.item_ids.contains(id))
                .collect();
            if !missing.is_empty() {
                return Err(PlannerError::RequiredItemsMissing { ids: missing });
            }

            let mut next = state.plan.clone();
            next.lock_setup(today, &params.item_ids);
            state.commit_plan(next, today, None)?;

            info!(
                "Plan for {today} set up with {} items",
                state.plan.item_ids().len()
            );
            state.plan_view(today)
        })
    }

    /// Adds a single item to today's plan, starting the plan if needed.
    ///
    /// Adding an item that is already planned is a no-op apart from the
    /// history rewrite.
    ///
    /// # Errors
    ///
    /// * `PlannerError::ItemNotFound` - When the item is missing or deleted
    /// * `PlannerError::ItemDisabled` - When the item is disabled
    pub fn add_to_plan(&self, params: &ItemRef) -> Result<PlanView> {
        self.with_state(|state, today| {
            state.registry.get_plannable(&params.id)?;

            let mut next = state.plan.clone();
            next.start(today);
            if next.include(&params.id) {
                debug!("Added {} to the plan for {today}", params.id);
            }
            state.commit_plan(next, today, None)?;

            state.plan_view(today)
        })
    }

    /// Skips a planned item, recording the skip in today's history.
    ///
    /// # Errors
    ///
    /// * `PlannerError::PlanItemNotFound` - When the item is not planned
    /// * `PlannerError::ItemAlreadyCompleted` - When the item is completed
    /// * `PlannerError::ItemRequiredToday` - When the item is required today
    pub fn remove_from_plan(&self, params: &ItemRef) -> Result<PlanView> {
        self.with_state(|state, today| {
            let id = params.id.as_str();
            if !state.plan.contains(id) {
                return Err(PlannerError::PlanItemNotFound { id: id.to_string() });
            }
            if state.plan.is_completed(id) {
                return Err(PlannerError::ItemAlreadyCompleted { id: id.to_string() });
            }
            if state.registry.get(id)?.is_required_on(today) {
                return Err(PlannerError::ItemRequiredToday { id: id.to_string() });
            }

            let mut next = state.plan.clone();
            next.remove(id);
            state.commit_plan(next, today, Some(id))?;

            debug!("Skipped {id} for {today}");
            state.plan_view(today)
        })
    }

    /// Marks a planned item as completed. Completing twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanItemNotFound` if the item is not planned.
    pub fn complete_item(&self, params: &ItemRef) -> Result<CompletionReceipt> {
        self.with_state(|state, today| {
            let id = params.id.as_str();
            let mut next = state.plan.clone();
            if !next.complete(id) {
                return Err(PlannerError::PlanItemNotFound { id: id.to_string() });
            }
            state.commit_plan(next, today, None)?;

            debug!("Completed {id} for {today}");
            Ok(CompletionReceipt {
                id: id.to_string(),
                completed: true,
                date: today,
            })
        })
    }

    /// Returns today's plan, applying any pending day rollover first.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` only if a planned item vanished
    /// from the catalog, which delete and disable prevent.
    pub fn get_plan(&self) -> Result<PlanView> {
        self.with_state(|state, today| state.plan_view(today))
    }
}
