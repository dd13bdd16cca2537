//! Task domain models
//!
//! This module contains the normalized task record shared by one-time,
//! weekly and monthly tasks, and the filter criteria the presentation
//! layer supplies. It is split into submodules:
//! - `record`: `TaskRecord` and its status/priority/recurrence enums
//! - `criteria`: `FilterCriteria` and the individual filter types

mod criteria;
mod record;

pub use criteria::{FilterCriteria, PriorityFilter, Selection, StatusFilter, ViewMode};
pub use record::{Priority, RecurrenceKind, Status, TaskRecord, local_date_today};
