//! Lifecycle state changes reported by delete/disable/enable.

use serde::{Deserialize, Serialize};

/// Outcome of a bucket lifecycle operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemStateChange {
    pub id: String,

    /// Set by soft delete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,

    /// Set by disable/enable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

impl ItemStateChange {
    pub fn deleted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            deleted: Some(true),
            disabled: None,
        }
    }

    pub fn disabled(id: impl Into<String>, disabled: bool) -> Self {
        Self {
            id: id.into(),
            deleted: None,
            disabled: Some(disabled),
        }
    }
}
