//! Common test utilities for integration tests

use chrono::NaiveDate;
use taskhub::{Priority, RecurrenceKind, Status, TaskRecord};

/// Create a test task owned by `owner` with minimal fields
pub fn task(id: &str, title: &str, owner: &str) -> TaskRecord {
    TaskRecord {
        id: id.to_string(),
        title: title.to_string(),
        company_id: "co-1".to_string(),
        created_by: owner.to_string(),
        ..TaskRecord::default()
    }
}

/// Task with status and priority set
pub fn task_with(
    id: &str,
    title: &str,
    owner: &str,
    status: Status,
    priority: Priority,
) -> TaskRecord {
    TaskRecord {
        status,
        priority,
        ..task(id, title, owner)
    }
}

/// Attach a due date
#[allow(dead_code)]
pub fn due(mut record: TaskRecord, year: i32, month: u32, day: u32) -> TaskRecord {
    record.due_date = NaiveDate::from_ymd_opt(year, month, day);
    record
}

/// Attach company and category names
#[allow(dead_code)]
pub fn labeled(mut record: TaskRecord, company: &str, category: &str) -> TaskRecord {
    record.company = Some(company.to_string());
    record.category = Some(category.to_string());
    record
}

/// Tag as recurring
#[allow(dead_code)]
pub fn recurring(mut record: TaskRecord, kind: RecurrenceKind) -> TaskRecord {
    record.recurrence = Some(kind);
    record
}
