//! Filter engine tests: ownership, view modes, predicates and ordering
mod common;

use common::{due, task, task_with};
use taskhub::{
    FilterCriteria, Priority, PriorityFilter, Status, StatusFilter, ViewMode, filter_tasks,
    local_date_today,
};

const ALL_VIEWS: [ViewMode; 5] = [
    ViewMode::All,
    ViewMode::NotStarted,
    ViewMode::InProgress,
    ViewMode::Completed,
    ViewMode::Deleted,
];

#[test]
fn test_other_owners_tasks_never_returned() {
    let records = vec![task("t1", "Payroll", "user-2")];

    for view in ALL_VIEWS {
        let mut criteria = FilterCriteria::for_owner("user-1");
        criteria.view_mode = view;
        assert!(
            filter_tasks(&records, &criteria).is_empty(),
            "cross-owner leak in {:?} view",
            view
        );
    }
}

#[test]
fn test_missing_owner_fails_closed() {
    let records = vec![task("t1", "Payroll", "user-1")];
    let criteria = FilterCriteria::default();
    assert!(criteria.owner_id.is_none());
    assert!(filter_tasks(&records, &criteria).is_empty());
}

#[test]
fn test_deleted_tasks_only_in_deleted_view() {
    let records = vec![task_with(
        "t1",
        "Old budget review",
        "user-1",
        Status::Deleted,
        Priority::High,
    )];

    for view in [
        ViewMode::All,
        ViewMode::NotStarted,
        ViewMode::InProgress,
        ViewMode::Completed,
    ] {
        let mut criteria = FilterCriteria::for_owner("user-1");
        criteria.view_mode = view;
        assert!(filter_tasks(&records, &criteria).is_empty());
    }

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.view_mode = ViewMode::Deleted;
    assert_eq!(filter_tasks(&records, &criteria).len(), 1);
}

#[test]
fn test_view_mode_buckets() {
    let records = vec![
        task_with("t1", "A", "user-1", Status::NotStarted, Priority::Mid),
        task_with("t2", "B", "user-1", Status::InProgress, Priority::Mid),
        task_with("t3", "C", "user-1", Status::Completed, Priority::Mid),
    ];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.view_mode = ViewMode::InProgress;
    let visible = filter_tasks(&records, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t2");

    criteria.view_mode = ViewMode::All;
    assert_eq!(filter_tasks(&records, &criteria).len(), 3);
}

#[test]
fn test_all_view_scenario() {
    // Three tasks, same owner: Completed, NotStarted and Deleted
    let records = vec![
        due(
            task_with("t1", "Report", "user-1", Status::Completed, Priority::High),
            2025,
            5,
            1,
        ),
        due(
            task_with("t2", "Filing", "user-1", Status::NotStarted, Priority::Low),
            2025,
            5,
            10,
        ),
        due(
            task_with("t3", "Cleanup", "user-1", Status::Deleted, Priority::Mid),
            2025,
            5,
            5,
        ),
    ];

    let criteria = FilterCriteria::for_owner("user-1");
    let visible = filter_tasks(&records, &criteria);
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t1", "t2"]);

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.view_mode = ViewMode::Deleted;
    let deleted = filter_tasks(&records, &criteria);
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, "t3");
}

#[test]
fn test_filtering_is_idempotent() {
    let records = vec![
        due(
            task_with("t1", "Tax return", "user-1", Status::NotStarted, Priority::High),
            2025,
            4,
            10,
        ),
        task_with("t2", "Shredding", "user-1", Status::Deleted, Priority::Low),
        task("t3", "Someone else's", "user-2"),
    ];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.search_text = "tax".to_string();

    let once = filter_tasks(&records, &criteria);
    let twice = filter_tasks(&once, &criteria);
    assert_eq!(once.len(), twice.len());
    let once_ids: Vec<&str> = once.iter().map(|t| t.id.as_str()).collect();
    let twice_ids: Vec<&str> = twice.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(once_ids, twice_ids);
}

#[test]
fn test_search_is_case_insensitive() {
    let records = vec![task("t1", "Annual Tax Filing", "user-1")];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.search_text = "TAX".to_string();
    assert_eq!(filter_tasks(&records, &criteria).len(), 1);

    criteria.search_text = "audit".to_string();
    assert!(filter_tasks(&records, &criteria).is_empty());
}

#[test]
fn test_search_matches_category_too() {
    let mut record = task("t1", "Untitled", "user-1");
    record.category = Some("Reporting".to_string());
    let records = vec![record];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.search_text = "report".to_string();
    assert_eq!(filter_tasks(&records, &criteria).len(), 1);
}

#[test]
fn test_dateless_task_survives_date_range() {
    let records = vec![task("t1", "No due date", "user-1")];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.date_from = chrono::NaiveDate::from_ymd_opt(2025, 1, 1);
    criteria.date_to = chrono::NaiveDate::from_ymd_opt(2025, 1, 2);
    assert_eq!(filter_tasks(&records, &criteria).len(), 1);
}

#[test]
fn test_date_range_excludes_out_of_bounds() {
    let records = vec![
        due(task("t1", "Early", "user-1"), 2025, 3, 1),
        due(task("t2", "Inside", "user-1"), 2025, 5, 15),
        due(task("t3", "Late", "user-1"), 2025, 8, 1),
    ];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.date_from = chrono::NaiveDate::from_ymd_opt(2025, 5, 1);
    criteria.date_to = chrono::NaiveDate::from_ymd_opt(2025, 6, 1);
    let visible = filter_tasks(&records, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t2");
}

#[test]
fn test_status_dropdown_independent_of_view_mode() {
    let records = vec![
        task_with("t1", "A", "user-1", Status::NotStarted, Priority::Mid),
        task_with("t2", "B", "user-1", Status::InProgress, Priority::Mid),
    ];

    // View mode keeps both; the dropdown narrows to one
    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.view_mode = ViewMode::All;
    criteria.status = StatusFilter::Only(Status::InProgress);
    let visible = filter_tasks(&records, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t2");
}

#[test]
fn test_priority_filter_exact_match() {
    let records = vec![
        task_with("t1", "A", "user-1", Status::NotStarted, Priority::High),
        task_with("t2", "B", "user-1", Status::NotStarted, Priority::Low),
    ];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.priority = PriorityFilter::Only(Priority::High);
    let visible = filter_tasks(&records, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t1");
}

#[test]
fn test_unknown_status_visible_in_all_view_only() {
    let records = vec![task_with(
        "t1",
        "Legacy row",
        "user-1",
        Status::Unknown,
        Priority::Unknown,
    )];

    // "all" only excludes Deleted, so legacy rows stay visible
    let criteria = FilterCriteria::for_owner("user-1");
    assert_eq!(filter_tasks(&records, &criteria).len(), 1);

    // but an exact status or priority filter never matches them
    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.status = StatusFilter::Only(Status::NotStarted);
    assert!(filter_tasks(&records, &criteria).is_empty());

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.priority = PriorityFilter::Only(Priority::Low);
    assert!(filter_tasks(&records, &criteria).is_empty());
}

#[test]
fn test_today_window_drops_past_due_dates() {
    // The today view bounds results to a window starting at the
    // current date
    let today = local_date_today();
    let mut overdue = task("t1", "Overdue", "user-1");
    overdue.due_date = today.pred_opt();
    let mut current = task("t2", "Current", "user-1");
    current.due_date = Some(today);
    let records = vec![overdue, current];

    let mut criteria = FilterCriteria::for_owner("user-1");
    criteria.date_from = Some(today);
    let visible = filter_tasks(&records, &criteria);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "t2");
}

#[test]
fn test_results_sorted_by_due_date_ascending() {
    let records = vec![
        due(task("t1", "Late", "user-1"), 2025, 7, 1),
        task("t2", "Dateless", "user-1"),
        due(task("t3", "Early", "user-1"), 2025, 2, 1),
    ];

    let criteria = FilterCriteria::for_owner("user-1");
    let visible = filter_tasks(&records, &criteria);
    let ids: Vec<&str> = visible.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t3", "t1", "t2"]);
}
