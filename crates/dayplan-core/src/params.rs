//! Parameter structures for planner operations
//!
//! These structures carry raw caller input into the engine. They depend only
//! on serde (plus schemars behind the `schema` feature), so every shell (the
//! MCP server, a future HTTP layer, tests) can deserialize straight into them
//! without the core knowing about its framework.
//!
//! Dates arrive as canonical `YYYY-MM-DD` strings and are parsed by the
//! engine; anything else fails with [`PlannerError::InvalidInput`]. Field
//! names are camelCase on the wire, and the identifier fields accept the
//! aliases older clients send (`todoId`, `todoIds`, `list`, `ids`).

use jiff::civil::Date;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PlannerError, Result};

/// Parameters for operations targeting a single bucket item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ItemRef {
    /// Identifier of the bucket item
    #[serde(alias = "todoId", alias = "todo_id", alias = "itemId", alias = "item_id")]
    pub id: String,
}

impl ItemRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for creating a bucket item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    /// Title of the item (required, non-empty)
    pub title: String,
    /// Optional free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether the item is mandatory every day (default false)
    #[serde(default)]
    pub required: Option<bool>,
    /// Date (YYYY-MM-DD) on which the item becomes mandatory
    #[serde(default, alias = "deadline_date")]
    pub deadline_date: Option<String>,
    /// Recurrence tag such as "daily" or "weekly" (default "custom")
    #[serde(default, alias = "repeat_every")]
    pub repeat_every: Option<String>,
}

/// Parameters for a partial update of a bucket item.
///
/// Only the supplied fields are merged. `deadlineDate: null` clears the
/// deadline, while omitting it leaves the deadline untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    /// Identifier of the item to update
    #[serde(alias = "todoId", alias = "todo_id")]
    pub id: String,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New notes
    #[serde(default)]
    pub notes: Option<String>,
    /// New required flag
    #[serde(default)]
    pub required: Option<bool>,
    /// New deadline (YYYY-MM-DD), or null to clear it
    #[serde(
        default,
        alias = "deadline_date",
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub deadline_date: Option<Option<String>>,
    /// New recurrence tag
    #[serde(default, alias = "repeat_every")]
    pub repeat_every: Option<String>,
}

impl UpdateItem {
    /// True when no field besides the identifier was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.notes.is_none()
            && self.required.is_none()
            && self.deadline_date.is_none()
            && self.repeat_every.is_none()
    }
}

/// Parameters for the once-per-day plan setup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct SetupPlan {
    /// Identifiers of every item to include; duplicates are ignored
    #[serde(alias = "todoIds", alias = "item_ids", alias = "list", alias = "ids")]
    pub item_ids: Vec<String>,
}

/// Parameters for ledger lookups by date.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct HistoryDate {
    /// Calendar date in YYYY-MM-DD form
    pub date: String,
}

impl HistoryDate {
    /// Parse the requested date.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` if the date is not `YYYY-MM-DD`.
    pub fn parse(&self) -> Result<Date> {
        parse_date("date", &self.date)
    }
}

/// Parse a canonical `YYYY-MM-DD` calendar date for `field`.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` for any other shape or an impossible
/// date such as `2026-02-30`.
pub fn parse_date(field: &str, value: &str) -> Result<Date> {
    let bytes = value.as_bytes();
    let canonical = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    if !canonical {
        return Err(PlannerError::invalid_input(field)
            .with_reason(format!("'{value}' is not a date in YYYY-MM-DD format")));
    }

    value.parse::<Date>().map_err(|e| {
        PlannerError::invalid_input(field).with_reason(format!("'{value}' is not a valid date: {e}"))
    })
}

/// Distinguishes an explicit `null` from an absent field.
fn deserialize_present<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
