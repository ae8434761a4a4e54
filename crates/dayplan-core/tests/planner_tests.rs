//! End-to-end behaviour of the planner driven through a manual clock.

mod common;

use std::{
    sync::{Arc, Barrier},
    thread,
};

use common::{DAY_ONE, create_item, create_test_planner, item};
use dayplan_core::{
    Clock, ErrorKind, Planner, PlannerError,
    params::{HistoryDate, SetupPlan, UpdateItem},
};
use jiff::civil::date;

fn history_date(value: &str) -> HistoryDate {
    HistoryDate {
        date: value.to_string(),
    }
}

#[test]
fn test_required_today_partition_tracks_the_date() {
    let (clock, planner) = create_test_planner();
    let always = create_item(&planner, "Always", true, None);
    let due = create_item(&planner, "Due", false, Some("2026-10-19"));
    let optional = create_item(&planner, "Optional", false, None);
    let disabled = create_item(&planner, "Disabled", true, Some("2026-10-18"));
    let deleted = create_item(&planner, "Deleted", true, None);
    planner.disable_item(&item(&disabled)).unwrap();
    planner.delete_item(&item(&deleted)).unwrap();

    let ids = |items: Vec<dayplan_core::BucketItem>| -> Vec<String> {
        items.into_iter().map(|i| i.id).collect()
    };

    assert_eq!(ids(planner.list_required_today()), vec![always.clone()]);
    assert_eq!(
        ids(planner.list_optional_today()),
        vec![due.clone(), optional.clone(), disabled.clone()]
    );

    clock.set(date(2026, 10, 19));
    assert_eq!(
        ids(planner.list_required_today()),
        vec![always.clone(), due.clone()]
    );
    assert_eq!(ids(planner.list_required_for_today()), vec![always, due]);

    // Deleted items are gone from every listing.
    assert_eq!(planner.list_bucket().len(), 4);
    assert_eq!(
        planner.get_item(&item(&deleted)).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_setup_complete_and_skip_scenario() {
    let (_clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", true, None);
    let b = create_item(&planner, "B", false, None);

    let err = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![b.clone()],
        })
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err,
        PlannerError::RequiredItemsMissing {
            ids: vec![a.clone()]
        }
    );

    let plan = planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone(), b.clone()],
        })
        .expect("Setup with every required item should succeed");
    assert_eq!(plan.date, DAY_ONE);
    assert!(plan.setup_locked);
    let listed: Vec<_> = plan
        .items
        .iter()
        .map(|entry| (entry.item.id.clone(), entry.completed))
        .collect();
    assert_eq!(listed, vec![(a.clone(), false), (b.clone(), false)]);

    let receipt = planner.complete_item(&item(&a)).unwrap();
    assert_eq!(receipt.id, a);
    assert!(receipt.completed);
    assert_eq!(receipt.date, DAY_ONE);

    let plan = planner.get_plan().unwrap();
    assert!(plan.item(&a).unwrap().completed);
    assert!(!plan.item(&b).unwrap().completed);

    let plan = planner.remove_from_plan(&item(&b)).unwrap();
    assert!(plan.item(&b).is_none());
    assert_eq!(planner.get_plan().unwrap().items.len(), 1);

    let entries = planner.history_for_date(&history_date("2026-10-18")).unwrap();
    assert_eq!(entries.len(), 2);
    let row_a = entries.iter().find(|e| e.item_id == a).unwrap();
    assert!(row_a.completed && !row_a.skipped);
    let row_b = entries.iter().find(|e| e.item_id == b).unwrap();
    assert!(row_b.skipped && !row_b.completed);
    assert_eq!(row_b.title, "B");
}

#[test]
fn test_setup_twice_same_day_conflicts() {
    let (_clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", false, None);
    let setup = SetupPlan {
        item_ids: vec![a.clone()],
    };

    planner.setup_plan(&setup).unwrap();
    let err = planner.setup_plan(&setup).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(err, PlannerError::PlanAlreadySetUp { date: DAY_ONE });
}

#[test]
fn test_setup_succeeds_once_per_day_across_rollover() {
    let (clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", false, None);
    let setup = SetupPlan {
        item_ids: vec![a.clone()],
    };

    for _ in 0..3 {
        let plan = planner.setup_plan(&setup).expect("Setup should succeed");
        assert_eq!(plan.date, clock.today());
        clock.advance_days(1);
    }
    assert_eq!(planner.list_history().len(), 3);
}

#[test]
fn test_remove_from_plan_guards() {
    let (_clock, planner) = create_test_planner();
    let due = create_item(&planner, "Due today", false, Some("2026-10-18"));
    let done = create_item(&planner, "Done", false, None);
    let unplanned = create_item(&planner, "Unplanned", false, None);

    planner
        .setup_plan(&SetupPlan {
            item_ids: vec![due.clone(), done.clone()],
        })
        .unwrap();
    planner.complete_item(&item(&done)).unwrap();

    let err = planner.remove_from_plan(&item(&due)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.code(), "ITEM_REQUIRED_TODAY");

    let err = planner.remove_from_plan(&item(&done)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let err = planner.remove_from_plan(&item(&unplanned)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Nothing changed.
    let plan = planner.get_plan().unwrap();
    assert_eq!(plan.items.len(), 2);
    assert_eq!(plan.completed_count(), 1);
}

#[test]
fn test_delete_and_disable_remove_item_from_plan() {
    let (_clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", false, None);
    let b = create_item(&planner, "B", false, None);
    let c = create_item(&planner, "C", false, None);
    planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone(), b.clone(), c.clone()],
        })
        .unwrap();
    planner.complete_item(&item(&a)).unwrap();
    planner.complete_item(&item(&b)).unwrap();

    let change = planner.delete_item(&item(&a)).unwrap();
    assert_eq!(change.deleted, Some(true));
    let change = planner.disable_item(&item(&b)).unwrap();
    assert_eq!(change.disabled, Some(true));

    let plan = planner.get_plan().unwrap();
    let ids: Vec<_> = plan.items.iter().map(|entry| entry.item.id.clone()).collect();
    assert_eq!(ids, vec![c.clone()]);
    assert_eq!(plan.completed_count(), 0);

    // Completing a removed item is no longer possible.
    assert_eq!(
        planner.complete_item(&item(&a)).unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        planner.delete_item(&item(&a)).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    // History for the deleted item outlives it.
    assert_eq!(planner.history_for_item(&item(&a)).len(), 1);
}

#[test]
fn test_rollover_resets_plan_and_preserves_history() {
    let (clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", true, None);
    let b = create_item(&planner, "B", false, None);
    planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone(), b.clone()],
        })
        .unwrap();
    planner.complete_item(&item(&a)).unwrap();

    let before = planner.history_for_date(&history_date("2026-10-18")).unwrap();

    clock.advance_days(1);
    let plan = planner.get_plan().unwrap();
    assert_eq!(plan.date, date(2026, 10, 19));
    assert!(!plan.setup_locked);
    assert!(plan.items.is_empty());

    // New day's work does not touch yesterday.
    planner
        .update_item(&UpdateItem {
            id: a.clone(),
            title: Some("A renamed".to_string()),
            ..Default::default()
        })
        .unwrap();
    planner
        .setup_plan(&SetupPlan {
            item_ids: vec![a.clone()],
        })
        .unwrap();
    planner.complete_item(&item(&a)).unwrap();

    let after = planner.history_for_date(&history_date("2026-10-18")).unwrap();
    assert_eq!(before, after);
    assert_eq!(after[0].title, "A");

    let summaries = planner.list_history();
    let dates: Vec<_> = summaries.iter().map(|s| s.date).collect();
    assert_eq!(dates, vec![date(2026, 10, 19), DAY_ONE]);
    assert_eq!((summaries[1].total, summaries[1].completed), (2, 1));

    let for_a = planner.history_for_item(&item(&a));
    assert_eq!(for_a.len(), 2);
    assert_eq!(for_a[0].date, date(2026, 10, 19));
    assert_eq!(for_a[0].title, "A renamed");
}

/// Assert the plan holds exactly `expected` (id, completed) in order.
fn assert_plan(planner: &Planner, expected: &[(&str, bool)]) {
    let plan = planner.get_plan().unwrap();
    let actual: Vec<_> = plan
        .items
        .iter()
        .map(|entry| (entry.item.id.as_str(), entry.completed))
        .collect();
    assert_eq!(actual, expected);
    assert!(plan.completed_count() <= plan.items.len());
}

#[test]
fn test_completed_subset_of_included_after_every_operation() {
    let (clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", false, None);
    let b = create_item(&planner, "B", false, None);

    planner.add_to_plan(&item(&a)).unwrap();
    assert_plan(&planner, &[(a.as_str(), false)]);
    planner.add_to_plan(&item(&b)).unwrap();
    assert_plan(&planner, &[(a.as_str(), false), (b.as_str(), false)]);
    planner.complete_item(&item(&a)).unwrap();
    assert_plan(&planner, &[(a.as_str(), true), (b.as_str(), false)]);
    planner.complete_item(&item(&b)).unwrap();
    assert_plan(&planner, &[(a.as_str(), true), (b.as_str(), true)]);
    planner.disable_item(&item(&b)).unwrap();
    assert_plan(&planner, &[(a.as_str(), true)]);
    planner.enable_item(&item(&b)).unwrap();
    assert_plan(&planner, &[(a.as_str(), true)]);

    // Re-adding does not bring the old completion back.
    planner.add_to_plan(&item(&b)).unwrap();
    assert_plan(&planner, &[(a.as_str(), true), (b.as_str(), false)]);
    planner.delete_item(&item(&a)).unwrap();
    assert_plan(&planner, &[(b.as_str(), false)]);
    planner.remove_from_plan(&item(&b)).unwrap();
    assert_plan(&planner, &[]);

    clock.advance_days(1);
    assert_plan(&planner, &[]);
    planner.add_to_plan(&item(&b)).unwrap();
    assert_plan(&planner, &[(b.as_str(), false)]);
}

#[test]
fn test_failed_operations_leave_state_untouched() {
    let (_clock, planner) = create_test_planner();
    let a = create_item(&planner, "A", true, None);
    let b = create_item(&planner, "B", false, None);
    let c = create_item(&planner, "C", false, None);
    planner.add_to_plan(&item(&a)).unwrap();
    planner.add_to_plan(&item(&b)).unwrap();
    planner.complete_item(&item(&b)).unwrap();

    let plan_before = planner.get_plan().unwrap();
    let history_before = planner.history_for_date(&history_date("2026-10-18")).unwrap();
    let summaries_before = planner.list_history();

    let failures = [
        planner.setup_plan(&SetupPlan {
            item_ids: vec![b.clone(), "ghost".to_string()],
        }),
        planner.setup_plan(&SetupPlan {
            item_ids: vec![b.clone(), b.clone()],
        }),
        planner.remove_from_plan(&item(&a)),
        planner.remove_from_plan(&item(&b)),
        planner.remove_from_plan(&item(&c)),
        planner.add_to_plan(&item("ghost")),
    ];
    let kinds: Vec<_> = failures
        .iter()
        .map(|result| result.as_ref().unwrap_err().kind())
        .collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::NotFound,
            ErrorKind::Validation,
            ErrorKind::Validation,
            ErrorKind::Conflict,
            ErrorKind::NotFound,
            ErrorKind::NotFound,
        ]
    );
    assert_eq!(
        planner.complete_item(&item(&c)).unwrap_err().kind(),
        ErrorKind::NotFound
    );

    assert_eq!(planner.get_plan().unwrap(), plan_before);
    assert!(!plan_before.setup_locked);
    assert_eq!(
        planner.history_for_date(&history_date("2026-10-18")).unwrap(),
        history_before
    );
    assert_eq!(planner.list_history(), summaries_before);
}

#[test]
fn test_concurrent_setup_exactly_one_succeeds() {
    const THREADS: usize = 8;

    for _ in 0..50 {
        let (_clock, planner) = create_test_planner();
        let a = create_item(&planner, "A", true, None);
        let planner = Arc::new(planner);
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let planner = Arc::clone(&planner);
                let barrier = Arc::clone(&barrier);
                let setup = SetupPlan {
                    item_ids: vec![a.clone()],
                };
                thread::spawn(move || {
                    barrier.wait();
                    planner.setup_plan(&setup)
                })
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().expect("Setup thread panicked"))
            .collect();

        let successes = results.iter().filter(|result| result.is_ok()).count();
        assert_eq!(successes, 1);
        for result in results.iter().filter(|result| result.is_err()) {
            assert_eq!(
                result.as_ref().unwrap_err(),
                &PlannerError::PlanAlreadySetUp { date: DAY_ONE }
            );
        }

        let plan = planner.get_plan().unwrap();
        assert!(plan.setup_locked);
        assert_eq!(plan.items.len(), 1);
    }
}

#[test]
fn test_empty_history_queries() {
    let (_clock, planner) = create_test_planner();
    assert!(planner.list_history().is_empty());
    assert!(
        planner
            .history_for_date(&history_date("2020-01-01"))
            .unwrap()
            .is_empty()
    );
    assert!(planner.history_for_item(&item("nope")).is_empty());
}
