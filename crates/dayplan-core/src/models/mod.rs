//! Data models for bucket items, the daily plan and the history ledger.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures apart from
//! presentation.
//!
//! All models serialize with camelCase field names (`deadlineDate`,
//! `setupLocked`, `itemId`, ...) so shells can pass them straight through
//! to JSON clients. Calendar dates are [`jiff::civil::Date`] values, which
//! render in canonical `YYYY-MM-DD` form.
//!
//! # Examples
//!
//! ```rust
//! use dayplan_core::models::BucketItem;
//! use jiff::{Timestamp, civil::date};
//!
//! let item = BucketItem {
//!     id: "pay-bill".to_string(),
//!     title: "Pay electricity bill".to_string(),
//!     notes: String::new(),
//!     required: false,
//!     deadline_date: Some(date(2026, 10, 18)),
//!     repeat_every: "monthly".to_string(),
//!     disabled: false,
//!     deleted: false,
//!     created_at: Timestamp::UNIX_EPOCH,
//!     updated_at: Timestamp::UNIX_EPOCH,
//! };
//!
//! assert!(item.is_required_on(date(2026, 10, 18)));
//! assert!(!item.is_required_on(date(2026, 10, 19)));
//! ```

pub mod filters;
pub mod history;
pub mod item;
pub mod plan;
pub mod requests;
pub mod status;


pub use filters::BucketFilter;
pub use history::{HistoryEntry, HistorySummary};
pub use item::BucketItem;
pub use plan::{CompletionReceipt, PlanItem, PlanView};
pub use requests::{DEFAULT_REPEAT_EVERY, ItemChanges, NewItem};
pub use status::ItemStateChange;
