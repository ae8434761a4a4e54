//! Bucket catalog operations for the Planner.

use log::debug;

use super::Planner;
use crate::{
    error::Result,
    models::{BucketFilter, BucketItem, ItemChanges, ItemStateChange, NewItem},
    params::{CreateItem, ItemRef, UpdateItem},
};

impl Planner {
    /// Lists every non-deleted item, in creation order.
    pub fn list_bucket(&self) -> Vec<BucketItem> {
        self.with_state(|state, _| state.registry.list(BucketFilter::All))
    }

    /// Lists the items that are required today.
    pub fn list_required_today(&self) -> Vec<BucketItem> {
        self.with_state(|state, today| state.registry.list(BucketFilter::RequiredOn(today)))
    }

    /// Lists the items that are not required today.
    pub fn list_optional_today(&self) -> Vec<BucketItem> {
        self.with_state(|state, today| state.registry.list(BucketFilter::OptionalOn(today)))
    }

    /// Retrieves a single item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn get_item(&self, params: &ItemRef) -> Result<BucketItem> {
        self.with_state(|state, _| state.registry.get(&params.id).cloned())
    }

    /// Creates a new item with a generated identifier.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the title is blank or the
    /// deadline is not a `YYYY-MM-DD` date.
    pub fn create_item(&self, params: &CreateItem) -> Result<BucketItem> {
        let new_item = NewItem::try_from(params)?;
        let now = self.clock.now();

        self.with_state(|state, _| {
            let item = state.registry.create(new_item, now);
            debug!("Created bucket item {} ('{}')", item.id, item.title);
            Ok(item)
        })
    }

    /// Merges the supplied fields into an existing item.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When no field is supplied or a field
    ///   is malformed
    /// * `PlannerError::ItemNotFound` - When the item is missing or deleted
    pub fn update_item(&self, params: &UpdateItem) -> Result<BucketItem> {
        let changes = ItemChanges::try_from(params)?;
        let now = self.clock.now();

        self.with_state(|state, _| {
            let item = state.registry.update(&params.id, &changes, now)?;
            debug!("Updated bucket item {}: {:?}", item.id, changes.describe());
            Ok(item)
        })
    }

    /// Soft-deletes an item and drops it from the current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or already
    /// deleted.
    pub fn delete_item(&self, params: &ItemRef) -> Result<ItemStateChange> {
        let now = self.clock.now();

        self.with_state(|state, _| {
            state.registry.soft_delete(&params.id, now)?;
            if state.plan.remove(&params.id) {
                debug!("Removed deleted item {} from the current plan", params.id);
            }
            Ok(ItemStateChange::deleted(&params.id))
        })
    }

    /// Disables an item and drops it from the current plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn disable_item(&self, params: &ItemRef) -> Result<ItemStateChange> {
        let now = self.clock.now();

        self.with_state(|state, _| {
            state.registry.set_disabled(&params.id, true, now)?;
            if state.plan.remove(&params.id) {
                debug!("Removed disabled item {} from the current plan", params.id);
            }
            Ok(ItemStateChange::disabled(&params.id, true))
        })
    }

    /// Re-enables an item. The plan is not touched.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn enable_item(&self, params: &ItemRef) -> Result<ItemStateChange> {
        let now = self.clock.now();

        self.with_state(|state, _| {
            state.registry.set_disabled(&params.id, false, now)?;
            Ok(ItemStateChange::disabled(&params.id, false))
        })
    }
}
