//! Plan assembly: wraps scheduled tasks with plan-level metadata.

use jiff::{civil::Date, Timestamp};

use crate::{
    error::Result,
    models::{Plan, Task},
    schedule::dates::days_between,
};

/// Where a plan's tasks came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
    /// Produced by the text generator
    Generated,
    /// Produced by the fixed fallback template
    Fallback,
}

/// Builds the externally visible plan from already scheduled tasks.
///
/// No scheduling happens here; `tasks` must come out of
/// [`crate::schedule::schedule`] so that their order is the finalization
/// order.
pub fn assemble(
    tasks: Vec<Task>,
    goal: &str,
    start_date: Date,
    end_date: Date,
    domain: &str,
    source: TaskSource,
) -> Result<Plan> {
    Ok(Plan {
        goal: goal.to_string(),
        domain: domain.to_string(),
        start_date,
        end_date,
        total_days: days_between(start_date, end_date)?,
        total_tasks: tasks.len(),
        tasks,
        ai_generated: source == TaskSource::Generated,
        generated_at: Timestamp::now(),
    })
}
