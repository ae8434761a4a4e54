//! In-memory stores behind the planner.
//!
//! Each store owns one piece of engine state and knows nothing about
//! locking or about "today":
//!
//! - [`BucketRegistry`]: the catalog of task definitions, the single source
//!   of truth for item existence and required-ness
//! - [`DailyPlan`]: the cursor for the current day's plan
//! - [`HistoryLedger`]: the per-date record of what each day's plan looked
//!   like
//!
//! [`crate::Planner`] holds all three behind one lock and coordinates the
//! cross-store effects (rollover, history rewrites, plan cleanup on delete).

pub mod bucket;
pub mod daily_plan;
pub mod history;

pub use bucket::BucketRegistry;
pub use daily_plan::DailyPlan;
pub use history::HistoryLedger;
