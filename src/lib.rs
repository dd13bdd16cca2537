//! TaskHub core library
//!
//! This library provides the pure core of the TaskHub multi-tenant task
//! dashboard: recurrence-anchor formatting, multi-dimension task
//! filtering, and tabular export shaping, plus a TOML storage adapter
//! for running the core outside the hosted dashboard.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain layer**: `task` module - normalized task records and
//!   filter criteria
//! - **Core layer**: `filter`, `export` and `recurrence` modules -
//!   pure, synchronous functions over caller-supplied collections
//! - **Persistence layer**: `storage` module - TOML-file adapter that
//!   supplies the collections the core operates on
//!
//! The core performs no I/O and holds no shared state; every function
//! takes its inputs per invocation and is safe to call concurrently.
//!
//! # Example
//!
//! ```
//! use taskhub::{FilterCriteria, TaskRecord, ViewMode, filter_tasks};
//!
//! let records = vec![TaskRecord {
//!     title: "Quarterly Financial Report".to_string(),
//!     created_by: "user-1".to_string(),
//!     ..TaskRecord::default()
//! }];
//!
//! let mut criteria = FilterCriteria::for_owner("user-1");
//! criteria.view_mode = ViewMode::All;
//! let visible = filter_tasks(&records, &criteria);
//! assert_eq!(visible.len(), 1);
//! ```

mod export;
mod filter;
mod recurrence;
mod storage;
mod task;

// Re-export commonly used types
pub use export::{ExportRow, ExportSelection, TaskCollections, build_export_rows};
pub use filter::{filter_tasks, sort_by_due_date, sort_by_priority};
pub use recurrence::{
    format_monthly_recurrence, format_weekly_recurrence, ordinal_suffix, recurrence_label,
};
pub use storage::{Storage, TaskBook};
pub use task::{
    FilterCriteria, Priority, PriorityFilter, RecurrenceKind, Selection, Status, StatusFilter,
    TaskRecord, ViewMode, local_date_today,
};
