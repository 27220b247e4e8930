//! The task scheduling engine.
//!
//! [`schedule`] turns an unordered, possibly messy task list into a dated
//! sequence inside a plan window:
//!
//! 1. Every task starts provisionally at the window start; stale dates from
//!    an earlier run are discarded.
//! 2. The [`resolver`] decides the finalization order from the dependency
//!    edges. Unknown dependency ids are ignored; cycles are rejected with
//!    [`PlannerError::UnschedulableGraph`](crate::PlannerError::UnschedulableGraph).
//! 3. In that order each task starts at the later of the window start and the
//!    latest end of its dependencies, and ends `duration_days` later.
//! 4. A task that would end past the window end is compressed to the days
//!    left (never below one). Compression changes duration and end, never the
//!    start, and does not shift slack to other tasks.
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use planit_core::{models::{Priority, Task}, schedule::schedule};
//!
//! let tasks = vec![
//!     Task::new(1, "Outline", "Planning", Priority::High, 3, vec![]),
//!     Task::new(2, "Draft", "Writing", Priority::Medium, 2, vec![1]),
//! ];
//! let scheduled = schedule(tasks, date(2024, 1, 1), date(2024, 1, 31)).unwrap();
//!
//! assert_eq!(scheduled[0].end_date, Some(date(2024, 1, 4)));
//! assert_eq!(scheduled[1].start_date, Some(date(2024, 1, 4)));
//! assert_eq!(scheduled[1].end_date, Some(date(2024, 1, 6)));
//! ```

use jiff::civil::Date;
use log::{debug, warn};

use crate::{error::Result, models::Task};

pub mod dates;
pub(crate) mod resolver;

#[cfg(test)]
mod tests;

use resolver::DependencyGraph;

/// Assigns start and end dates to every task, returned in finalization order.
///
/// Durations below one day are coerced to one. The window is not validated:
/// a zero-length or inverted window simply compresses every task to a
/// single day.
///
/// # Errors
///
/// - `PlannerError::UnschedulableGraph` when the dependencies form a cycle
/// - `PlannerError::InvalidInput` when two tasks share an id
/// - `PlannerError::DateOutOfRange` when a date leaves the calendar range
pub fn schedule(mut tasks: Vec<Task>, plan_start: Date, plan_end: Date) -> Result<Vec<Task>> {
    for task in &mut tasks {
        task.clear_schedule();
        task.duration_days = task.duration_days.max(1);
    }

    let graph = DependencyGraph::build(&tasks)?;
    let order = graph.finalization_order(&tasks)?;

    for &position in &order {
        let latest_dependency_end = graph
            .dependencies_of(position)
            .iter()
            .filter_map(|&dep| tasks[dep].end_date)
            .max();
        let start = latest_dependency_end.map_or(plan_start, |end| end.max(plan_start));

        let task = &mut tasks[position];
        let requested = task.duration_days;
        dates::place(task, start, plan_end)?;

        if task.duration_days < requested {
            debug!(
                "Compressed task {} from {requested} to {} day(s)",
                task.id, task.duration_days
            );
        }
        if task.end_date.is_some_and(|end| end > plan_end) {
            warn!(
                "Task {} ends after the plan window closes on {plan_end}",
                task.id
            );
        }
    }

    let mut slots: Vec<Option<Task>> = tasks.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|position| slots[position].take())
        .collect())
}
