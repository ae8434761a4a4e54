//! Error types for the planner engine.

use std::fmt;

use jiff::civil::Date;
use thiserror::Error;

/// Coarse classification of every engine failure.
///
/// Shells translate these into their own transport representation (HTTP
/// status, MCP error code, exit code). None of them is retried by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The referenced item or plan entry does not exist or is not eligible
    NotFound,
    /// The target exists but is disabled
    Disabled,
    /// A once-per-day operation already ran, or the target state forbids it
    Conflict,
    /// A structural precondition on the input was violated
    Validation,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Disabled => "disabled",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Validation => "validation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlannerError {
    /// Bucket item missing or soft-deleted
    #[error("Item '{id}' was not found")]
    ItemNotFound { id: String },
    /// Item is not part of today's plan
    #[error("Item '{id}' is not in today's plan")]
    PlanItemNotFound { id: String },
    /// Disabled items can never be planned
    #[error("Item '{id}' is disabled and cannot be added to the plan")]
    ItemDisabled { id: String },
    /// Plan setup already submitted for the day
    #[error("Plan setup for {date} was already submitted; it can only run once per day")]
    PlanAlreadySetUp { date: Date },
    /// Setup submission left out items that are required today
    #[error("Required items must be included in the plan setup: {}", ids.join(", "))]
    RequiredItemsMissing { ids: Vec<String> },
    /// Completed items cannot be skipped
    #[error("Item '{id}' is already completed and cannot be skipped")]
    ItemAlreadyCompleted { id: String },
    /// Items required today cannot be skipped
    #[error("Item '{id}' is required today and cannot be skipped")]
    ItemRequiredToday { id: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlannerError {
        PlannerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlannerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// The engine-level kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlannerError::ItemNotFound { .. } | PlannerError::PlanItemNotFound { .. } => {
                ErrorKind::NotFound
            }
            PlannerError::ItemDisabled { .. } => ErrorKind::Disabled,
            PlannerError::PlanAlreadySetUp { .. } => ErrorKind::Conflict,
            PlannerError::ItemAlreadyCompleted { .. } => ErrorKind::Conflict,
            PlannerError::RequiredItemsMissing { .. }
            | PlannerError::ItemRequiredToday { .. }
            | PlannerError::InvalidInput { .. } => ErrorKind::Validation,
        }
    }

    /// Stable machine-readable code, suitable for response envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            PlannerError::ItemNotFound { .. } => "ITEM_NOT_FOUND",
            PlannerError::PlanItemNotFound { .. } => "PLAN_ITEM_NOT_FOUND",
            PlannerError::ItemDisabled { .. } => "ITEM_DISABLED",
            PlannerError::PlanAlreadySetUp { .. } => "PLAN_ALREADY_SETUP",
            PlannerError::RequiredItemsMissing { .. } => "REQUIRED_ITEM_MISSING",
            PlannerError::ItemAlreadyCompleted { .. } => "ITEM_ALREADY_COMPLETED",
            PlannerError::ItemRequiredToday { .. } => "ITEM_REQUIRED_TODAY",
            PlannerError::InvalidInput { .. } => "VALIDATION_ERROR",
        }
    }

    pub(crate) fn item_not_found(id: impl Into<String>) -> Self {
        PlannerError::ItemNotFound { id: id.into() }
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
