//! Tests for the planner module.

use std::sync::Arc;

use jiff::civil::{Date, date};

use super::*;
use crate::{
    clock::ManualClock,
    error::{ErrorKind, PlannerError},
    params::{CreateItem, HistoryDate, ItemRef, SetupPlan, UpdateItem},
};

const TODAY: Date = date(2026, 10, 18);

/// Helper function to create a test planner pinned to [`TODAY`]
fn create_test_planner() -> (Arc<ManualClock>, Planner) {
    let clock = Arc::new(ManualClock::new(TODAY));
    let planner = PlannerBuilder::new().with_clock(clock.clone()).build();
    (clock, planner)
}

fn create(planner: &Planner, title: &str, required: bool, deadline: Option<&str>) -> String {
    planner
        .create_item(&CreateItem {
            title: title.to_string(),
            required: Some(required),
            deadline_date: deadline.map(String::from),
            ..Default::default()
        })
        .expect("Failed to create item")
        .id
}

fn item_ref(id: &str) -> ItemRef {
    ItemRef::new(id)
}

#[test]
fn test_sample_items_seeded_with_todays_deadline() {
    let clock = Arc::new(ManualClock::new(TODAY));
    let planner = PlannerBuilder::new()
        .with_clock(clock)
        .with_sample_items(true)
        .build();

    let titles: Vec<_> = planner
        .list_bucket()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(
        titles,
        vec!["Clean the kitchen", "Exercise", "Pay electricity bill"]
    );

    let required: Vec<_> = planner
        .list_required_today()
        .into_iter()
        .map(|item| item.title)
        .collect();
    assert_eq!(required, vec!["Clean the kitchen", "Pay electricity bill"]);
    assert_eq!(planner.list_optional_today().len(), 1);
}

#[test]
fn test_update_requires_fields_and_existing_item() {
    let (_clock, planner) = create_test_planner();
    let id = create(&planner, "Read", false, None);

    let err = planner
        .update_item(&UpdateItem {
            id: id.clone(),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let err = planner
        .update_item(&UpdateItem {
            id: "missing".to_string(),
            title: Some("x".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let updated = planner
        .update_item(&UpdateItem {
            id: id.clone(),
            deadline_date: Some(Some("2026-10-18".to_string())),
            ..Default::default()
        })
        .expect("Failed to update item");
    assert_eq!(updated.deadline_date, Some(TODAY));
    assert!(updated.updated_at >= updated.created_at);
    assert_eq!(planner.list_required_today().len(), 1);
}

#[test]
fn test_create_rejects_malformed_deadline() {
    let (_clock, planner) = create_test_planner();
    let err = planner
        .create_item(&CreateItem {
            title: "Bad date".to_string(),
            deadline_date: Some("18/10/2026".to_string()),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
    assert!(planner.list_bucket().is_empty());
}

#[test]
fn test_add_to_plan_starts_plan_without_locking() {
    let (_clock, planner) = create_test_planner();
    let id = create(&planner, "Stretch", false, None);

    let plan = planner.add_to_plan(&item_ref(&id)).expect("Failed to add");
    assert_eq!(plan.date, TODAY);
    assert!(!plan.setup_locked);
    assert_eq!(plan.items.len(), 1);

    // Idempotent
    let plan = planner.add_to_plan(&item_ref(&id)).expect("Failed to re-add");
    assert_eq!(plan.items.len(), 1);

    // Setup is still allowed afterwards and replaces the contents
    let other = create(&planner, "Read", false, None);
    let plan = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![other.clone()],
        })
        .expect("Setup after add should succeed");
    assert!(plan.setup_locked);
    assert_eq!(plan.items.len(), 1);
    assert_eq!(plan.items[0].item.id, other);
}

#[test]
fn test_add_to_plan_rejects_disabled_and_deleted() {
    let (_clock, planner) = create_test_planner();
    let disabled = create(&planner, "Disabled", false, None);
    let deleted = create(&planner, "Deleted", false, None);
    planner.disable_item(&item_ref(&disabled)).unwrap();
    planner.delete_item(&item_ref(&deleted)).unwrap();

    assert_eq!(
        planner.add_to_plan(&item_ref(&disabled)).unwrap_err().kind(),
        ErrorKind::Disabled
    );
    assert_eq!(
        planner.add_to_plan(&item_ref(&deleted)).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert!(planner.list_history().is_empty());
}

#[test]
fn test_setup_reports_every_missing_required_item() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "A", true, None);
    let b = create(&planner, "B", false, Some("2026-10-18"));
    let c = create(&planner, "C", false, None);

    match planner.setup_plan(&SetupPlan {
        item_ids: vec![c.clone()],
    }) {
        Err(PlannerError::RequiredItemsMissing { ids }) => assert_eq!(ids, vec![a, b]),
        other => panic!("Expected RequiredItemsMissing, got {other:?}"),
    }

    let plan = planner.get_plan().unwrap();
    assert!(!plan.setup_locked);
    assert!(plan.items.is_empty());
    assert!(planner.list_history().is_empty());
}

#[test]
fn test_setup_validates_ids_before_required_check() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "A", true, None);
    let disabled = create(&planner, "Off", false, None);
    planner.disable_item(&item_ref(&disabled)).unwrap();

    let err = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone(), disabled],
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Disabled);

    let err = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a, "ghost".to_string()],
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_setup_deduplicates_ids() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "A", false, None);

    let plan = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone(), a.clone(), a],
        })
        .unwrap();
    assert_eq!(plan.items.len(), 1);

    let history = planner
        .history_for_date(&HistoryDate {
            date: "2026-10-18".to_string(),
        })
        .unwrap();
    assert_eq!(history.len(), 1);
}

#[test]
fn test_complete_is_idempotent_and_requires_planned_item() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "A", false, None);

    assert_eq!(
        planner.complete_item(&item_ref(&a)).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    planner.add_to_plan(&item_ref(&a)).unwrap();
    let receipt = planner.complete_item(&item_ref(&a)).unwrap();
    assert!(receipt.completed);
    assert_eq!(receipt.date, TODAY);
    planner.complete_item(&item_ref(&a)).unwrap();

    let plan = planner.get_plan().unwrap();
    assert_eq!(plan.completed_count(), 1);
}

#[test]
fn test_disable_removes_completed_item_from_plan() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "A", false, None);
    planner.add_to_plan(&item_ref(&a)).unwrap();
    planner.complete_item(&item_ref(&a)).unwrap();

    planner.disable_item(&item_ref(&a)).unwrap();
    assert!(planner.get_plan().unwrap().items.is_empty());

    // Enable does not put it back
    planner.enable_item(&item_ref(&a)).unwrap();
    assert!(planner.get_plan().unwrap().items.is_empty());

    planner.with_state(|state, _| assert!(state.plan.is_consistent()));
}

#[test]
fn test_history_titles_are_snapshots() {
    let (_clock, planner) = create_test_planner();
    let a = create(&planner, "Old title", false, None);
    planner.add_to_plan(&item_ref(&a)).unwrap();

    planner
        .update_item(&UpdateItem {
            id: a.clone(),
            title: Some("New title".to_string()),
            ..Default::default()
        })
        .unwrap();

    let entries = planner.history_for_item(&item_ref(&a));
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Old title");

    planner.complete_item(&item_ref(&a)).unwrap();
    let entries = planner.history_for_item(&item_ref(&a));
    assert_eq!(entries[0].title, "New title");
}

#[test]
fn test_history_for_date_rejects_malformed_date() {
    let (_clock, planner) = create_test_planner();
    let err = planner
        .history_for_date(&HistoryDate {
            date: "yesterday".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // Surrounding whitespace is not canonical either.
    let err = planner
        .history_for_date(&HistoryDate {
            date: " 2026-10-18 ".to_string(),
        })
        .unwrap_err();
    assert_eq!(err.code(), "VALIDATION_ERROR");
}

#[test]
fn test_rollover_applies_to_bucket_operations_too() {
    let (clock, planner) = create_test_planner();
    let a = create(&planner, "A", false, None);
    planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone()],
        })
        .unwrap();

    clock.advance_days(1);
    // A catalog read is enough to reset the stale plan.
    planner.list_bucket();
    planner.with_state(|state, _| {
        assert_eq!(state.plan.plan_date(), None);
        assert!(!state.plan.is_setup_locked());
    });
}
