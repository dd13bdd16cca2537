use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task priority as shown in the dashboard
///
/// The `Unknown` variant captures legacy values found in stored data.
/// It deserializes from any unrecognized label, never matches an exact
/// priority filter, and sorts after the three known priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Mid,
    Low,
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Ordering rank used by the "today's tasks" sort (High first)
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Mid => 1,
            Priority::Low => 2,
            Priority::Unknown => 3,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Priority::High),
            "Mid" => Ok(Priority::Mid),
            "Low" => Ok(Priority::Low),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: High, Mid, Low",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Priority::High => "High",
            Priority::Mid => "Mid",
            Priority::Low => "Low",
            Priority::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Lifecycle status of a task
///
/// Serialized labels match the dashboard's stored values ("Not Started",
/// "In Progress", ...). Deletion is soft: a task is never removed from
/// its collection, only marked `Deleted` until restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Deleted,
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Whether moving from `self` to `next` is a defined transition
    ///
    /// The workflow is deliberately permissive: tasks move freely among
    /// NotStarted, InProgress and Completed (the dashboard's status
    /// dropdown allows all of them). Any status may be soft-deleted,
    /// and the only way out of Deleted is a restore to NotStarted.
    pub fn can_transition_to(self, next: Status) -> bool {
        if next == Status::Deleted {
            return true;
        }
        match self {
            Status::Deleted => next == Status::NotStarted,
            Status::NotStarted | Status::InProgress | Status::Completed => matches!(
                next,
                Status::NotStarted | Status::InProgress | Status::Completed
            ),
            Status::Unknown => false,
        }
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Not Started" => Ok(Status::NotStarted),
            "In Progress" => Ok(Status::InProgress),
            "Completed" => Ok(Status::Completed),
            "Deleted" => Ok(Status::Deleted),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: Not Started, In Progress, Completed, Deleted",
                s
            )),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::NotStarted => "Not Started",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Deleted => "Deleted",
            Status::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}

/// Recurrence kind for weekly and monthly tasks
///
/// A recurring task's `due_date` is its occurrence anchor: only the
/// weekday (weekly) or the day-of-month (monthly) of the stored date is
/// semantically meaningful, never its year or month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Weekly,
    Monthly,
}

impl FromStr for RecurrenceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(RecurrenceKind::Weekly),
            "monthly" => Ok(RecurrenceKind::Monthly),
            _ => Err(format!(
                "Invalid recurrence '{}'. Valid options are: weekly, monthly",
                s
            )),
        }
    }
}

/// A single normalized task record
///
/// One-time, weekly and monthly tasks share this shape; the `recurrence`
/// field distinguishes them. Storage backends with diverging field names
/// (`dueDate` vs `due_date`, joined company names) are expected to map
/// into this shape at the boundary before the core operates on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskRecord {
    /// Unique identifier
    pub id: String,
    /// Title shown in task lists
    pub title: String,
    /// Owning company's identifier
    pub company_id: String,
    /// Resolved company name, if the join succeeded
    pub company: Option<String>,
    /// Due date for one-time tasks; occurrence anchor for recurring ones
    pub due_date: Option<NaiveDate>,
    /// Priority (High, Mid, Low)
    pub priority: Priority,
    /// Lifecycle status
    pub status: Status,
    /// Optional free-form description
    pub description: Option<String>,
    /// Optional category label (e.g. "Tax", "Reporting")
    pub category: Option<String>,
    /// Identifier of the user who created the task; tasks are only ever
    /// visible to their owner
    pub created_by: String,
    /// Recurrence kind, None for one-time tasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceKind>,
}

impl Default for TaskRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            company_id: String::new(),
            company: None,
            due_date: None,
            priority: Priority::Mid,
            status: Status::NotStarted,
            description: None,
            category: None,
            created_by: String::new(),
            recurrence: None,
        }
    }
}

impl TaskRecord {
    /// Check if this record is a recurring (weekly or monthly) task
    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    /// Check if this record has been soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.status == Status::Deleted
    }
}
