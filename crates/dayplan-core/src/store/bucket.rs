//! Bucket catalog storage and lifecycle operations.

use std::collections::HashMap;

use jiff::{Timestamp, civil::Date};
use uuid::Uuid;

use crate::{
    error::{PlannerError, Result},
    models::{BucketFilter, BucketItem, ItemChanges, NewItem},
};

/// Catalog of task definitions.
///
/// Items are never physically removed: delete sets a tombstone, and every
/// lookup treats a tombstoned item as missing. Listing preserves insertion
/// order.
#[derive(Debug, Clone, Default)]
pub struct BucketRegistry {
    items: Vec<BucketItem>,
    index: HashMap<String, usize>,
}

impl BucketRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active (non-deleted) items matching `filter`, in insertion order.
    pub fn list(&self, filter: BucketFilter) -> Vec<BucketItem> {
        self.active()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    /// Identifiers of the items required on `date`.
    pub fn required_ids_on(&self, date: Date) -> Vec<String> {
        self.active()
            .filter(|item| item.is_required_on(date))
            .map(|item| item.id.clone())
            .collect()
    }

    /// Look up an active item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn get(&self, id: &str) -> Result<&BucketItem> {
        self.index
            .get(id)
            .map(|&pos| &self.items[pos])
            .filter(|item| !item.deleted)
            .ok_or_else(|| PlannerError::item_not_found(id))
    }

    /// Look up an item that may be added to a plan.
    ///
    /// # Errors
    ///
    /// * `PlannerError::ItemNotFound` - When the item is missing or deleted
    /// * `PlannerError::ItemDisabled` - When the item is disabled
    pub fn get_plannable(&self, id: &str) -> Result<&BucketItem> {
        let item = self.get(id)?;
        if !item.is_plannable() {
            return Err(PlannerError::ItemDisabled { id: id.to_string() });
        }
        Ok(item)
    }

    /// Store a new item under a freshly generated identifier.
    pub fn create(&mut self, new_item: NewItem, now: Timestamp) -> BucketItem {
        let item = new_item.into_item(Uuid::new_v4().to_string(), now);
        self.insert(item.clone());
        item
    }

    /// Merge `changes` into an active item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn update(&mut self, id: &str, changes: &ItemChanges, now: Timestamp) -> Result<BucketItem> {
        let item = self.get_mut(id)?;
        changes.apply(item, now);
        Ok(item.clone())
    }

    /// Tombstone an active item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or already
    /// deleted.
    pub fn soft_delete(&mut self, id: &str, now: Timestamp) -> Result<()> {
        let item = self.get_mut(id)?;
        item.deleted = true;
        item.updated_at = now;
        Ok(())
    }

    /// Set or clear the disabled flag of an active item.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::ItemNotFound` if the item is missing or deleted.
    pub fn set_disabled(&mut self, id: &str, disabled: bool, now: Timestamp) -> Result<BucketItem> {
        let item = self.get_mut(id)?;
        item.disabled = disabled;
        item.updated_at = now;
        Ok(item.clone())
    }

    /// Number of active items.
    pub fn len(&self) -> usize {
        self.active().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn insert(&mut self, item: BucketItem) {
        match self.index.get(&item.id) {
            Some(&pos) => self.items[pos] = item,
            None => {
                self.index.insert(item.id.clone(), self.items.len());
                self.items.push(item);
            }
        }
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut BucketItem> {
        self.index
            .get(id)
            .map(|&pos| &mut self.items[pos])
            .filter(|item| !item.deleted)
            .ok_or_else(|| PlannerError::item_not_found(id))
    }

    fn active(&self) -> impl Iterator<Item = &BucketItem> {
        self.items.iter().filter(|item| !item.deleted)
    }
}
