//! Stored plan record.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Plan;

/// A plan as kept by a [`crate::store::PlanStore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanRecord {
    /// Store-assigned identifier
    pub id: u64,
    /// Copy of the plan's goal, indexed for listing
    pub goal: String,
    /// The plan body
    pub plan: Plan,
    /// When the record was first stored (UTC)
    pub created_at: Timestamp,
    /// True once every task in the plan is completed
    pub completed: bool,
    /// Task ids reported complete by the last progress update
    #[serde(default)]
    pub completed_tasks: Vec<u64>,
}

impl PlanRecord {
    /// Number of tasks in the stored plan.
    pub fn total_tasks(&self) -> usize {
        self.plan.tasks.len()
    }
}
