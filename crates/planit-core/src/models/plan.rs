//! Plan model definition and related functionality.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Task;

/// A goal plus its scheduled tasks, bounded by a start/end window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// The user's objective, immutable once created
    pub goal: String,

    /// Classification label, informational only
    pub domain: String,

    /// First day of the window
    pub start_date: Date,

    /// Hard end of the window
    pub end_date: Date,

    /// `end_date - start_date` in days; zero or negative when misordered
    pub total_days: i64,

    /// Tasks in finalization order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Always `tasks.len()`
    pub total_tasks: usize,

    /// Whether the tasks came from the text generator rather than the
    /// fallback template
    pub ai_generated: bool,

    /// When the plan was assembled (UTC)
    pub generated_at: Timestamp,
}

impl Plan {
    /// Looks up a task by id.
    pub fn task(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Number of tasks flagged completed.
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    /// Returns true when the plan has tasks and all of them are completed.
    pub fn is_complete(&self) -> bool {
        !self.tasks.is_empty() && self.tasks.iter().all(|task| task.completed)
    }

    /// Tasks whose end date falls after the plan window, left there by
    /// one-day compression floors.
    pub fn overrunning_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |task| task.end_date.is_some_and(|end| end > self.end_date))
    }

    /// Applies completion flags from a set of task ids. Dates are untouched.
    pub fn mark_completed(&mut self, completed_ids: &[u64]) {
        for task in &mut self.tasks {
            task.completed = completed_ids.contains(&task.id);
        }
    }
}
