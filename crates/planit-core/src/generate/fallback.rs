//! Fixed six-phase template used whenever generation fails.

use crate::models::{Priority, Task};

/// Domain label for plans built from the template.
pub const FALLBACK_DOMAIN: &str = "General Project";

/// (description, category, priority, minimum days, divisor of the window)
const PHASES: [(&str, &str, Priority, i64, i64); 6] = [
    ("Research and information gathering", "Research", Priority::High, 2, 6),
    ("Define clear objectives and milestones", "Planning", Priority::High, 1, 8),
    ("Gather necessary resources", "Preparation", Priority::Medium, 1, 10),
    ("Execute main implementation phase", "Execution", Priority::High, 4, 3),
    ("Review progress and make adjustments", "Review", Priority::Medium, 2, 6),
    ("Finalize and complete project", "Completion", Priority::High, 1, 8),
];

/// Builds the template scaled to a window of `total_days`.
///
/// Each phase depends on the one before it and lasts a fixed fraction of the
/// window, never less than its minimum.
///
/// # Examples
///
/// ```rust
/// use planit_core::generate::fallback::fallback_tasks;
///
/// let tasks = fallback_tasks(30);
/// let durations: Vec<u32> = tasks.iter().map(|t| t.duration_days).collect();
/// assert_eq!(durations, vec![5, 3, 3, 10, 5, 3]);
/// ```
pub fn fallback_tasks(total_days: i64) -> Vec<Task> {
    (1u64..)
        .zip(PHASES)
        .map(|(id, (description, category, priority, minimum, divisor))| {
            let days = total_days.div_euclid(divisor).max(minimum);
            let dependencies = if id == 1 { Vec::new() } else { vec![id - 1] };
            Task::new(
                id,
                description,
                category,
                priority,
                u32::try_from(days).unwrap_or(u32::MAX),
                dependencies,
            )
        })
        .collect()
}
