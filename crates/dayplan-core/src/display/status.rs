//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::models::ItemStateChange;

/// Confirmation line for operations without a resource to show.
pub struct OperationStatus {
    pub message: String,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&ItemStateChange> for OperationStatus {
    fn from(change: &ItemStateChange) -> Self {
        let message = match (change.deleted, change.disabled) {
            (Some(true), _) => format!("Deleted item {}", change.id),
            (_, Some(true)) => format!(
                "Disabled item {}. It is excluded from planning until re-enabled.",
                change.id
            ),
            (_, Some(false)) => format!("Enabled item {}", change.id),
            _ => format!("Item {} unchanged", change.id),
        };
        Self::success(message)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Success: {}", self.message)
    }
}
