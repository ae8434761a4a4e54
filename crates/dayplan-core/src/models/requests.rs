//! Validated request types built from raw parameters.

use jiff::{Timestamp, civil::Date};

use super::BucketItem;
use crate::{
    error::PlannerError,
    params::{CreateItem, UpdateItem, parse_date},
};

/// Recurrence tag used when a create request leaves it out.
pub const DEFAULT_REPEAT_EVERY: &str = "custom";

/// A validated create request with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub notes: String,
    pub required: bool,
    pub deadline_date: Option<Date>,
    pub repeat_every: String,
}

impl NewItem {
    /// Materialise the item with a fresh identifier.
    pub fn into_item(self, id: String, now: Timestamp) -> BucketItem {
        BucketItem {
            id,
            title: self.title,
            notes: self.notes,
            required: self.required,
            deadline_date: self.deadline_date,
            repeat_every: self.repeat_every,
            disabled: false,
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<&CreateItem> for NewItem {
    type Error = PlannerError;

    /// Trim text fields, apply defaults and parse the deadline.
    ///
    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When the title is blank
    /// * `PlannerError::InvalidInput` - When the deadline is not `YYYY-MM-DD`
    fn try_from(params: &CreateItem) -> Result<Self, Self::Error> {
        let title = non_blank_title(&params.title)?;
        let deadline_date = params
            .deadline_date
            .as_deref()
            .map(|value| parse_date("deadlineDate", value))
            .transpose()?;

        Ok(Self {
            title,
            notes: params.notes.as_deref().map(str::trim).unwrap_or_default().to_string(),
            required: params.required.unwrap_or(false),
            deadline_date,
            repeat_every: params
                .repeat_every
                .as_deref()
                .map(str::trim)
                .unwrap_or(DEFAULT_REPEAT_EVERY)
                .to_string(),
        })
    }
}

/// A validated partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub required: Option<bool>,
    /// `Some(None)` clears the deadline
    pub deadline_date: Option<Option<Date>>,
    pub repeat_every: Option<String>,
}

impl ItemChanges {
    /// Merge the supplied fields into `item` and bump its update timestamp.
    pub fn apply(&self, item: &mut BucketItem, now: Timestamp) {
        if let Some(title) = &self.title {
            item.title.clone_from(title);
        }
        if let Some(notes) = &self.notes {
            item.notes.clone_from(notes);
        }
        if let Some(required) = self.required {
            item.required = required;
        }
        if let Some(deadline_date) = self.deadline_date {
            item.deadline_date = deadline_date;
        }
        if let Some(repeat_every) = &self.repeat_every {
            item.repeat_every.clone_from(repeat_every);
        }
        item.updated_at = now;
    }

    /// Human-readable list of the fields this update touches.
    pub fn describe(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(format!("Title set to '{title}'"));
        }
        if self.notes.is_some() {
            changes.push("Notes updated".to_string());
        }
        if let Some(required) = self.required {
            changes.push(format!(
                "Marked as {}",
                if required { "required" } else { "optional" }
            ));
        }
        match self.deadline_date {
            Some(Some(date)) => changes.push(format!("Deadline set to {date}")),
            Some(None) => changes.push("Deadline cleared".to_string()),
            None => {}
        }
        if let Some(repeat_every) = &self.repeat_every {
            changes.push(format!("Repeats {repeat_every}"));
        }
        changes
    }
}

impl TryFrom<&UpdateItem> for ItemChanges {
    type Error = PlannerError;

    /// # Errors
    ///
    /// * `PlannerError::InvalidInput` - When no field is supplied
    /// * `PlannerError::InvalidInput` - When a supplied title is blank
    /// * `PlannerError::InvalidInput` - When the deadline is not `YYYY-MM-DD`
    fn try_from(params: &UpdateItem) -> Result<Self, Self::Error> {
        if params.is_empty() {
            return Err(PlannerError::invalid_input("payload")
                .with_reason("At least one field is required"));
        }

        let deadline_date = match &params.deadline_date {
            Some(Some(value)) => Some(Some(parse_date("deadlineDate", value)?)),
            Some(None) => Some(None),
            None => None,
        };

        Ok(Self {
            title: params.title.as_deref().map(non_blank_title).transpose()?,
            notes: params.notes.as_deref().map(|notes| notes.trim().to_string()),
            required: params.required,
            deadline_date,
            repeat_every: params
                .repeat_every
                .as_deref()
                .map(|repeat| repeat.trim().to_string()),
        })
    }
}

fn non_blank_title(title: &str) -> Result<String, PlannerError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(PlannerError::invalid_input("title").with_reason("Title must not be empty"));
    }
    Ok(title.to_string())
}
