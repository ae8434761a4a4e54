//! Core library for the dayplan daily task-planning engine.
//!
//! The engine keeps three pieces of in-memory state:
//!
//! - a **bucket** of reusable task definitions ([`store::BucketRegistry`]),
//! - the **daily plan** chosen from that bucket for the current date
//!   ([`store::DailyPlan`]), which resets on its own once the date changes,
//! - a **history ledger** of what each day's plan looked like
//!   ([`store::HistoryLedger`]).
//!
//! All access goes through [`Planner`], which reads "today" from a
//! [`Clock`] on every call and applies any pending day rollover before
//! doing anything else.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use dayplan_core::{
//!     ManualClock, PlannerBuilder,
//!     params::{CreateItem, ItemRef, SetupPlan},
//! };
//! use jiff::civil::date;
//!
//! # fn example() -> dayplan_core::Result<()> {
//! let clock = Arc::new(ManualClock::new(date(2026, 10, 18)));
//! let planner = PlannerBuilder::new().with_clock(clock.clone()).build();
//!
//! let bill = planner.create_item(&CreateItem {
//!     title: "Pay electricity bill".to_string(),
//!     deadline_date: Some("2026-10-18".to_string()),
//!     ..Default::default()
//! })?;
//!
//! // Due today, so setup must include it.
//! planner.setup_plan(&SetupPlan {
//!     item_ids: vec![bill.id.clone()],
//! })?;
//! planner.complete_item(&ItemRef::new(&bill.id))?;
//!
//! // The next day starts with an empty, unlocked plan.
//! clock.advance_days(1);
//! let plan = planner.get_plan()?;
//! assert!(plan.items.is_empty());
//! assert!(!plan.setup_locked);
//!
//! // Yesterday is preserved in the ledger.
//! let history = planner.list_history();
//! assert_eq!(history[0].completed, 1);
//! println!("{}", dayplan_core::display::HistorySummaries(history));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod planner;
pub mod store;

// Re-export commonly used types
pub use clock::{Clock, ManualClock, SystemClock};
pub use display::{
    BucketItems, CreateResult, HistoryEntries, HistorySummaries, LocalDateTime, OperationStatus,
    UpdateResult,
};
pub use error::{ErrorKind, PlannerError, Result};
pub use models::{
    BucketFilter, BucketItem, CompletionReceipt, HistoryEntry, HistorySummary, ItemStateChange,
    PlanItem, PlanView,
};
pub use params::{CreateItem, HistoryDate, ItemRef, SetupPlan, UpdateItem};
pub use planner::{Planner, PlannerBuilder};
