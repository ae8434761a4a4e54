use std::sync::Arc;

use dayplan_core::{
    ManualClock, Planner, PlannerBuilder,
    params::{CreateItem, ItemRef},
};
use jiff::civil::{Date, date};

pub const DAY_ONE: Date = date(2026, 10, 18);

/// Helper function to create a test planner pinned to [`DAY_ONE`]
pub fn create_test_planner() -> (Arc<ManualClock>, Planner) {
    let clock = Arc::new(ManualClock::new(DAY_ONE));
    let planner = PlannerBuilder::new().with_clock(clock.clone()).build();
    (clock, planner)
}

/// Create an item and return its id
#[allow(dead_code)]
pub fn create_item(
    planner: &Planner,
    title: &str,
    required: bool,
    deadline_date: Option<&str>,
) -> String {
    planner
        .create_item(&CreateItem {
            title: title.to_string(),
            required: Some(required),
            deadline_date: deadline_date.map(String::from),
            ..Default::default()
        })
        .expect("Failed to create item")
        .id
}

#[allow(dead_code)]
pub fn item(id: &str) -> ItemRef {
    ItemRef::new(id)
}
