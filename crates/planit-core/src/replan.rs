//! Replanning: merging completed work with a freshly generated tail.
//!
//! A replan concatenates the completed tasks (caller order) with the new
//! tail, renumbers everything `1..=N` in that order, and reschedules the
//! merged set inside the *original* plan window. Completed tasks are
//! rescheduled too, so their dates may move.
//!
//! Dependency ids are rewritten during renumbering:
//!
//! - completed tasks resolve their dependencies against the completed
//!   prefix's original ids;
//! - tail tasks are assumed to number their dependencies relative to the
//!   tail itself, falling back to the completed prefix's original ids;
//! - an id that resolves in neither is dropped and logged.

use std::collections::HashMap;

use jiff::civil::Date;
use log::{debug, warn};

use crate::{
    assemble::{assemble, TaskSource},
    error::Result,
    generate::{GenerationRequest, TaskGenerator},
    models::{Plan, Task},
    schedule::schedule,
};

/// Domain used when the original plan carries none.
pub const REGENERATED_DOMAIN: &str = "AI Regenerated";

fn id_map(tasks: &[Task], offset: u64) -> HashMap<u64, u64> {
    let mut map = HashMap::with_capacity(tasks.len());
    for (new_id, task) in (offset + 1..).zip(tasks) {
        map.entry(task.id).or_insert(new_id);
    }
    map
}

fn remap(task: &mut Task, maps: &[&HashMap<u64, u64>]) {
    let old_id = task.id;
    task.dependencies = task
        .dependencies
        .iter()
        .filter_map(|dep| {
            let mapped = maps.iter().find_map(|map| map.get(dep).copied());
            if mapped.is_none() {
                warn!("Dropping dependency {dep} of task {old_id}: no such task after merge");
            }
            mapped
        })
        .collect();
}

/// Concatenates completed tasks with the new tail and renumbers them.
///
/// Completed tasks keep `completed = true`; tail tasks always start out
/// incomplete. Dates are cleared by the subsequent scheduling pass.
pub fn merge_completed_and_tail(completed: Vec<Task>, tail: Vec<Task>) -> Vec<Task> {
    let prefix_ids = id_map(&completed, 0);
    let tail_ids = id_map(&tail, completed.len() as u64);

    let prefix = completed.into_iter().map(|mut task| {
        remap(&mut task, &[&prefix_ids]);
        task.completed = true;
        task
    });
    let tail = tail.into_iter().map(|mut task| {
        remap(&mut task, &[&tail_ids, &prefix_ids]);
        task.completed = false;
        task
    });

    (1u64..)
        .zip(prefix.chain(tail))
        .map(|(new_id, mut task)| {
            if task.id != new_id {
                debug!("Renumbered task {} to {new_id}", task.id);
            }
            task.id = new_id;
            task
        })
        .collect()
}

/// Builds a new plan from the original's completed work plus a new tail.
///
/// # Errors
///
/// Scheduling errors from the merged set are returned unchanged, e.g.
/// `PlannerError::UnschedulableGraph` when the tail introduces a cycle.
pub fn replan(original: &Plan, completed: Vec<Task>, tail: Vec<Task>) -> Result<Plan> {
    let merged = merge_completed_and_tail(completed, tail);
    let scheduled = schedule(merged, original.start_date, original.end_date)?;
    let domain = if original.domain.trim().is_empty() {
        REGENERATED_DOMAIN
    } else {
        original.domain.as_str()
    };

    assemble(
        scheduled,
        &original.goal,
        original.start_date,
        original.end_date,
        domain,
        TaskSource::Generated,
    )
}

/// Asks the generator for the remaining work and replans around it.
///
/// When generation fails the original plan is returned unmodified.
///
/// # Errors
///
/// Only scheduling errors from [`replan`] are returned.
pub fn regenerate(
    original: &Plan,
    completed: Vec<Task>,
    feedback: Option<String>,
    today: Date,
    generator: &dyn TaskGenerator,
) -> Result<Plan> {
    let request = GenerationRequest::Replan {
        goal: original.goal.clone(),
        total_days: original.total_days,
        today,
        completed: completed.iter().map(|t| t.description.clone()).collect(),
        feedback: feedback.filter(|f| !f.trim().is_empty()),
    };

    match generator.generate(&request) {
        Ok(generated) => replan(original, completed, generated.tasks),
        Err(e) => {
            warn!("Regeneration failed, keeping the original plan: {e}");
            Ok(original.clone())
        }
    }
}
