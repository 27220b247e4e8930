//! Task model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Priority;

/// A unit of work inside a plan.
///
/// Freshly generated tasks carry no dates; the scheduler fills in
/// `start_date`, `end_date` and `deadline` (always equal to `end_date`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Identifier, unique within a plan while scheduling
    pub id: u64,

    /// What needs to be done
    pub description: String,

    /// Free-form grouping label (e.g. "Research")
    pub category: String,

    /// Priority, carried through unchanged
    #[serde(default)]
    pub priority: Priority,

    /// Estimated duration in whole days, never below 1 after scheduling
    pub duration_days: u32,

    /// Ids of tasks that must finish before this one starts
    #[serde(default)]
    pub dependencies: Vec<u64>,

    /// Scheduled start date
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Scheduled end date (`start_date + duration_days`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Date>,

    /// Duplicate of `end_date`, kept for consumers that read deadlines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Date>,

    /// Set by progress updates, never by the scheduler
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Creates an unscheduled, incomplete task.
    pub fn new(
        id: u64,
        description: impl Into<String>,
        category: impl Into<String>,
        priority: Priority,
        duration_days: u32,
        dependencies: Vec<u64>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            category: category.into(),
            priority,
            duration_days,
            dependencies,
            start_date: None,
            end_date: None,
            deadline: None,
            completed: false,
        }
    }

    /// Returns true once the scheduler has assigned dates.
    pub fn is_scheduled(&self) -> bool {
        self.start_date.is_some() && self.end_date.is_some()
    }

    /// Drops any previously assigned dates.
    pub(crate) fn clear_schedule(&mut self) {
        self.start_date = None;
        self.end_date = None;
        self.deadline = None;
    }
}
