//! Task filtering and ordering
//!
//! The display path of the filter engine: given one collection of task
//! records and the caller's criteria, produce the subset a page shows,
//! sorted for presentation. All functions are pure; the caller supplies
//! every input per invocation and nothing here performs I/O.

use chrono::NaiveDate;

use crate::task::{FilterCriteria, TaskRecord};

/// Filter a task collection for display
///
/// Applies, in order: the ownership guard (no `owner_id` means no
/// results, never cross-user leakage), the view-mode predicate, and the
/// AND-combined secondary predicates (search, priority dropdown, status
/// dropdown, date range). Results come back sorted by ascending due
/// date. Company/category selections are export-only and ignored here.
pub fn filter_tasks(records: &[TaskRecord], criteria: &FilterCriteria) -> Vec<TaskRecord> {
    let Some(owner) = criteria.owner_id.as_deref() else {
        return Vec::new();
    };

    let mut kept: Vec<TaskRecord> = records
        .iter()
        .filter(|task| task.created_by == owner)
        .filter(|task| criteria.view_mode.keeps(task.status))
        .filter(|task| matches_search(task, &criteria.search_text))
        .filter(|task| criteria.priority.matches(task.priority))
        .filter(|task| criteria.status.matches(task.status))
        .filter(|task| within_date_range(task.due_date, criteria.date_from, criteria.date_to))
        .cloned()
        .collect();

    sort_by_due_date(&mut kept);
    kept
}

/// Sort ascending by due date; records without a date go last
pub fn sort_by_due_date(tasks: &mut [TaskRecord]) {
    tasks.sort_by_key(|task| (task.due_date.is_none(), task.due_date));
}

/// Sort for the "today's tasks" view: priority rank first (High before
/// Mid before Low), due date as tie-break
pub fn sort_by_priority(tasks: &mut [TaskRecord]) {
    tasks.sort_by_key(|task| (task.priority.rank(), task.due_date.is_none(), task.due_date));
}

/// Case-insensitive substring match on title or category
///
/// An empty search always passes.
fn matches_search(task: &TaskRecord, search_text: &str) -> bool {
    if search_text.is_empty() {
        return true;
    }
    let needle = search_text.to_lowercase();
    let title_matches = task.title.to_lowercase().contains(&needle);
    let category_matches = task
        .category
        .as_ref()
        .map(|c| c.to_lowercase().contains(&needle))
        .unwrap_or(false);
    title_matches || category_matches
}

/// Date-range check with unconstrained absent bounds
///
/// A record without a due date always passes: missing dates are treated
/// as unconstrained, never as grounds for exclusion.
pub(crate) fn within_date_range(
    due_date: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    let Some(due) = due_date else {
        return true;
    };
    from.is_none_or(|from| from <= due) && to.is_none_or(|to| due <= to)
}
