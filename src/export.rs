//! Export row shaping
//!
//! The export path of the filter engine: given the four source
//! collections (one-time, weekly, monthly, deleted) and a set of
//! selected task-type flags, flatten the matching records into uniform
//! rows for a spreadsheet or print view.
//!
//! Export deliberately does not apply the view-mode or status-dropdown
//! predicates: "deleted" is its own explicit type flag, not a status
//! filter. The deleted flag sweeps all four collections for soft-deleted
//! records, since a deleted item's origin collection may differ.

use crate::filter::within_date_range;
use crate::recurrence::recurrence_label;
use crate::task::{FilterCriteria, TaskRecord};

/// The four caller-supplied source collections
#[derive(Debug, Clone, Default)]
pub struct TaskCollections {
    pub one_time: Vec<TaskRecord>,
    pub weekly: Vec<TaskRecord>,
    pub monthly: Vec<TaskRecord>,
    pub deleted: Vec<TaskRecord>,
}

/// Which task types to include in an export
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportSelection {
    pub one_time: bool,
    pub weekly: bool,
    pub monthly: bool,
    pub deleted: bool,
}

impl ExportSelection {
    /// Select every task type, including deleted records
    pub fn everything() -> Self {
        Self {
            one_time: true,
            weekly: true,
            monthly: true,
            deleted: true,
        }
    }
}

/// One uniform export row, all fields rendered as display strings
///
/// Recurring tasks render their due date as a recurrence description
/// ("15th of every month"); one-time tasks as an ISO date; a missing
/// date renders empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub title: String,
    pub company: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
}

impl ExportRow {
    fn from_record(task: &TaskRecord) -> Self {
        let due_date = match recurrence_label(task) {
            Some(label) => label,
            None => task
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
        };
        Self {
            title: task.title.clone(),
            company: task.company.clone().unwrap_or_default(),
            category: task.category.clone().unwrap_or_default(),
            priority: task.priority.to_string(),
            status: task.status.to_string(),
            due_date,
        }
    }
}

/// Build export rows from the selected task types
///
/// Each selected type runs the ownership guard plus the company,
/// category, priority and date-range predicates. The one-time, weekly
/// and monthly flags keep only non-deleted records from their own
/// collection; the deleted flag pulls `status = Deleted` records from
/// all four collections, so selecting a type flag together with the
/// deleted flag never duplicates a row.
pub fn build_export_rows(
    collections: &TaskCollections,
    selection: &ExportSelection,
    criteria: &FilterCriteria,
) -> Vec<ExportRow> {
    let Some(owner) = criteria.owner_id.as_deref() else {
        return Vec::new();
    };

    let mut rows = Vec::new();
    let active_sources = [
        (selection.one_time, &collections.one_time),
        (selection.weekly, &collections.weekly),
        (selection.monthly, &collections.monthly),
    ];

    for (selected, source) in active_sources {
        if !selected {
            continue;
        }
        rows.extend(
            source
                .iter()
                .filter(|task| !task.is_deleted() && matches_export(task, owner, criteria))
                .map(ExportRow::from_record),
        );
    }

    if selection.deleted {
        let all_sources = [
            &collections.one_time,
            &collections.weekly,
            &collections.monthly,
            &collections.deleted,
        ];
        for source in all_sources {
            rows.extend(
                source
                    .iter()
                    .filter(|task| task.is_deleted() && matches_export(task, owner, criteria))
                    .map(ExportRow::from_record),
            );
        }
    }

    rows
}

fn matches_export(task: &TaskRecord, owner: &str, criteria: &FilterCriteria) -> bool {
    task.created_by == owner
        && criteria.companies.is_selected(task.company.as_deref())
        && criteria.categories.is_selected(task.category.as_deref())
        && criteria.priority.matches(task.priority)
        && within_date_range(task.due_date, criteria.date_from, criteria.date_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{RecurrenceKind, Status};
    use chrono::NaiveDate;

    fn record(title: &str, recurrence: Option<RecurrenceKind>) -> TaskRecord {
        TaskRecord {
            title: title.to_string(),
            company: Some("Gentyx".to_string()),
            due_date: NaiveDate::from_ymd_opt(2025, 6, 2),
            created_by: "user-1".to_string(),
            recurrence,
            ..TaskRecord::default()
        }
    }

    #[test]
    fn test_row_renders_recurrence_labels() {
        let row = ExportRow::from_record(&record("Payroll", Some(RecurrenceKind::Monthly)));
        assert_eq!(row.due_date, "2nd of every month");

        let row = ExportRow::from_record(&record("Standup notes", Some(RecurrenceKind::Weekly)));
        assert_eq!(row.due_date, "Monday of every week");

        let row = ExportRow::from_record(&record("File taxes", None));
        assert_eq!(row.due_date, "2025-06-02");
    }

    #[test]
    fn test_row_renders_missing_fields_empty() {
        let task = TaskRecord {
            title: "Orphan".to_string(),
            created_by: "user-1".to_string(),
            ..TaskRecord::default()
        };
        let row = ExportRow::from_record(&task);
        assert_eq!(row.company, "");
        assert_eq!(row.category, "");
        assert_eq!(row.due_date, "");
        assert_eq!(row.status, Status::NotStarted.to_string());
    }
}
