//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::{models::Plan, operations::SavedPlan};

/// Wrapper type for displaying a newly stored plan.
///
/// # Examples
///
/// ```rust
/// use jiff::{civil::date, Timestamp};
/// use planit_core::{display::CreateResult, models::Plan, operations::SavedPlan};
///
/// let plan = Plan {
///     goal: "Plant a garden".to_string(),
///     domain: "Gardening".to_string(),
///     start_date: date(2024, 4, 1),
///     end_date: date(2024, 4, 30),
///     total_days: 29,
///     tasks: vec![],
///     total_tasks: 0,
///     ai_generated: true,
///     generated_at: Timestamp::now(),
/// };
///
/// let result = CreateResult::new(SavedPlan { id: 3, plan });
/// assert!(result.to_string().starts_with("Created plan with ID: 3"));
/// ```
pub struct CreateResult {
    pub saved: SavedPlan,
}

impl CreateResult {
    /// Create a new CreateResult wrapper.
    pub fn new(saved: SavedPlan) -> Self {
        Self { saved }
    }
}

impl fmt::Display for CreateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.saved.id)?;
        writeln!(f)?;
        write!(f, "{}", self.saved.plan)
    }
}

/// Wrapper type for displaying a plan changed in place, with a list of what
/// changed.
pub struct UpdateResult {
    pub id: u64,
    pub plan: Plan,
    pub changes: Vec<String>,
}

impl UpdateResult {
    /// Create an UpdateResult with no change notes.
    pub fn new(id: u64, plan: Plan) -> Self {
        Self {
            id,
            plan,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult listing specific changes.
    pub fn with_changes(id: u64, plan: Plan, changes: Vec<String>) -> Self {
        Self { id, plan, changes }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plan with ID: {}", self.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}
