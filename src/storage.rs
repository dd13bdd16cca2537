//! TOML-file persistence of the task book
//!
//! The hosted dashboard keeps its tasks in a managed database; this
//! adapter stores the same collections in a local TOML file so the
//! filtering and export core can be exercised end to end. The file
//! holds three tables matching the dashboard's storage: one-time tasks,
//! weekly tasks and monthly tasks. Soft-deleted records stay in their
//! collection.

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::TaskCollections;
use crate::task::{RecurrenceKind, Status, TaskRecord};

/// All persisted task collections
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskBook {
    /// One-time tasks, including soft-deleted ones
    pub tasks: Vec<TaskRecord>,
    /// Weekly recurring tasks
    pub weekly: Vec<TaskRecord>,
    /// Monthly recurring tasks
    pub monthly: Vec<TaskRecord>,
}

impl TaskBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of records across all collections
    pub fn len(&self) -> usize {
        self.tasks.len() + self.weekly.len() + self.monthly.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Tag recurring records with their collection's recurrence kind
    ///
    /// The weekly and monthly tables imply the recurrence of their
    /// records; the tag is normalized after load so the core never has
    /// to know which table a record came from.
    fn normalize(&mut self) {
        for task in &mut self.weekly {
            task.recurrence = Some(RecurrenceKind::Weekly);
        }
        for task in &mut self.monthly {
            task.recurrence = Some(RecurrenceKind::Monthly);
        }
        for task in &mut self.tasks {
            task.recurrence = None;
        }
    }

    /// Split into the four source collections the export path expects
    ///
    /// Soft-deleted one-time tasks move to the dedicated deleted
    /// collection; weekly and monthly collections keep theirs inline,
    /// where the deleted view mode and the export's deleted sweep find
    /// them.
    pub fn collections(&self) -> TaskCollections {
        let (deleted, one_time) = self
            .tasks
            .iter()
            .cloned()
            .partition(|task: &TaskRecord| task.is_deleted());
        TaskCollections {
            one_time,
            weekly: self.weekly.clone(),
            monthly: self.monthly.clone(),
            deleted,
        }
    }

    /// Every record in one flat list, for views that span collections
    pub fn all_records(&self) -> Vec<TaskRecord> {
        let mut records = self.tasks.clone();
        records.extend(self.weekly.iter().cloned());
        records.extend(self.monthly.iter().cloned());
        records
    }

    /// Add a record to the collection matching its recurrence
    pub fn add(&mut self, task: TaskRecord) {
        match task.recurrence {
            Some(RecurrenceKind::Weekly) => self.weekly.push(task),
            Some(RecurrenceKind::Monthly) => self.monthly.push(task),
            None => self.tasks.push(task),
        }
    }

    /// Find a record by ID across all collections
    pub fn find(&self, id: &str) -> Option<&TaskRecord> {
        self.tasks
            .iter()
            .chain(&self.weekly)
            .chain(&self.monthly)
            .find(|task| task.id == id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut TaskRecord> {
        self.tasks
            .iter_mut()
            .chain(self.weekly.iter_mut())
            .chain(self.monthly.iter_mut())
            .find(|task| task.id == id)
    }

    /// Move a record to a new status
    ///
    /// Undefined transitions (anything out of Deleted except a restore,
    /// or any move from an unknown legacy status) are rejected.
    ///
    /// # Returns
    /// `Some(())` if the record was found and the transition is defined
    pub fn set_status(&mut self, id: &str, next: Status) -> Option<()> {
        let task = self.find_mut(id)?;
        if !task.status.can_transition_to(next) {
            return None;
        }
        task.status = next;
        Some(())
    }

    /// Soft-delete a record (defined from every status)
    pub fn delete(&mut self, id: &str) -> Option<()> {
        self.set_status(id, Status::Deleted)
    }

    /// Restore a soft-deleted record
    ///
    /// Restore always lands in NotStarted, regardless of the status the
    /// record had before deletion.
    pub fn restore(&mut self, id: &str) -> Option<()> {
        let task = self.find_mut(id)?;
        if task.status != Status::Deleted {
            return None;
        }
        task.status = Status::NotStarted;
        Some(())
    }
}

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<TaskBook> {
        if !self.file_path.exists() {
            debug!(
                "no task file at {}, starting empty",
                self.file_path.display()
            );
            return Ok(TaskBook::new());
        }

        let content = fs::read_to_string(&self.file_path)?;
        let mut book: TaskBook = toml::from_str(&content)?;
        book.normalize();
        debug!(
            "loaded {} records from {}",
            book.len(),
            self.file_path.display()
        );
        Ok(book)
    }

    pub fn save(&self, book: &TaskBook) -> Result<()> {
        let content = toml::to_string_pretty(book)?;
        fs::write(&self.file_path, content)?;
        debug!(
            "saved {} records to {}",
            book.len(),
            self.file_path.display()
        );
        Ok(())
    }
}
