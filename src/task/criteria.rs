use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

use super::record::{Priority, Status};

/// Coarse lifecycle bucket selected by the task-list view buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    All,
    NotStarted,
    InProgress,
    Completed,
    Deleted,
}

impl ViewMode {
    /// View-mode predicate: which statuses this view keeps
    ///
    /// Every view except the dedicated deleted view excludes soft-deleted
    /// records; statuses unknown to the filter (legacy data) remain
    /// visible in the "all" view.
    pub fn keeps(self, status: Status) -> bool {
        match self {
            ViewMode::All => status != Status::Deleted,
            ViewMode::NotStarted => status == Status::NotStarted,
            ViewMode::InProgress => status == Status::InProgress,
            ViewMode::Completed => status == Status::Completed,
            ViewMode::Deleted => status == Status::Deleted,
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ViewMode::All),
            "not_started" => Ok(ViewMode::NotStarted),
            "in_progress" => Ok(ViewMode::InProgress),
            "completed" => Ok(ViewMode::Completed),
            "deleted" => Ok(ViewMode::Deleted),
            _ => Err(format!(
                "Invalid view mode '{}'. Valid options are: all, not_started, in_progress, completed, deleted",
                s
            )),
        }
    }
}

/// Priority dropdown filter ("all" or one exact priority)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    pub fn matches(self, priority: Priority) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(wanted) => priority == wanted,
        }
    }
}

/// Status dropdown filter, independent of the view mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    pub fn matches(self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => status == wanted,
        }
    }
}

/// A company or category selection: everything, or an explicit set
///
/// Used by the export path. A record with no value in the filtered
/// field can only pass when the selection is `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    All,
    Only(BTreeSet<String>),
}

impl Selection {
    /// Build a selection from an explicit list of names
    pub fn only<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Only(names.into_iter().map(Into::into).collect())
    }

    pub fn is_selected(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(set) => value.is_some_and(|v| set.contains(v)),
        }
    }
}

/// Filter criteria supplied by the presentation layer
///
/// `owner_id` is mandatory for any result to come back: filtering is
/// fail-closed, and an unauthenticated caller (None) always sees an
/// empty set rather than another user's tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub owner_id: Option<String>,
    /// Case-insensitive substring matched against title or category
    pub search_text: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
    pub view_mode: ViewMode,
    /// Company selection (export path only)
    pub companies: Selection,
    /// Category selection (export path only)
    pub categories: Selection,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Criteria scoped to one owner, with every other filter wide open
    pub fn for_owner(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: Some(owner_id.into()),
            ..Self::default()
        }
    }
}
