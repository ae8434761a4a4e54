//! Display formatting for models and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds newtype wrappers for collections and for the outcome of
//! write operations, so every shell renders the same Markdown.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Collections &  │    │    Markdown     │
//! │ (item, plan,    │───▶│  Result Types   │───▶│     Output      │
//! │  history)       │    │                 │    │   (MCP, logs)   │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (BucketItems, HistorySummaries,
//!   HistoryEntries)
//! - [`results`]: Operation result types (CreateResult, UpdateResult)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use dayplan_core::display::{HistorySummaries, OperationStatus};
//!
//! let status = OperationStatus::success("Disabled item abc");
//! assert_eq!(status.to_string(), "Success: Disabled item abc\n");
//!
//! let history = HistorySummaries(vec![]);
//! assert_eq!(history.to_string(), "No history recorded yet.\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{BucketItems, HistoryEntries, HistorySummaries};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;
