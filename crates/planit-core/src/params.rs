//! Parameter structures for PlanIt operations
//!
//! Interface-agnostic inputs shared by the CLI and the [`crate::Planner`]
//! facade. Interface layers define their own argument types (clap derives,
//! etc.) and convert into these with `From` impls, so the core stays free of
//! framework attributes.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the plan to operate on
    pub id: u64,
}

/// Parameters for generating a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlan {
    /// Natural-language goal (required)
    pub goal: String,
    /// First day of the plan window
    pub start_date: Date,
    /// Last day of the plan window
    pub end_date: Date,
}

/// Parameters for recording task completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProgress {
    /// ID of the stored plan
    pub plan_id: u64,
    /// Ids of every task now considered complete
    #[serde(default)]
    pub completed_tasks: Vec<u64>,
}

/// Parameters for regenerating a plan around completed work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegeneratePlan {
    /// ID of the stored plan to regenerate from
    pub plan_id: u64,
    /// Completed task ids; the stored progress is used when absent
    #[serde(default)]
    pub completed_tasks: Option<Vec<u64>>,
    /// Free-text guidance for the generator
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Parameters for inserting an ad-hoc task into a stored plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCustomTask {
    /// ID of the stored plan
    pub plan_id: u64,
    /// What needs to be done (required)
    pub description: String,
    /// Duration in days, between 1 and 14
    pub duration_days: u32,
    /// Ids of existing tasks this one waits for
    #[serde(default)]
    pub dependencies: Vec<u64>,
}
