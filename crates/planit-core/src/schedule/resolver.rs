//! Dependency resolution: the order in which tasks are finalized.
//!
//! The order reproduces a repeated in-input-order readiness scan: a pass
//! walks the unfinished tasks by input position and finalizes every task
//! whose known dependencies are already finalized, including ones finalized
//! earlier in the same pass. Instead of rescanning, two ready heaps keyed by
//! input position are kept. A task that becomes ready behind the scan cursor
//! waits for the next pass; one that becomes ready ahead of it joins the
//! current pass. This runs in O((n + e) log n) and detects cycles when both
//! heaps drain while tasks remain.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
    mem,
};

use log::debug;

use crate::{
    error::{PlannerError, Result},
    models::Task,
};

/// Dependency graph over a task slice, indexed by input position.
pub(crate) struct DependencyGraph {
    /// Known, deduplicated dependency positions per task
    dependencies: Vec<Vec<usize>>,
    /// Reverse edges: positions of tasks waiting on each task
    dependents: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Builds the graph. Dependency ids with no matching task are vacuous.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::InvalidInput` when two tasks share an id.
    pub(crate) fn build(tasks: &[Task]) -> Result<Self> {
        let mut position_of = HashMap::with_capacity(tasks.len());
        for (position, task) in tasks.iter().enumerate() {
            if position_of.insert(task.id, position).is_some() {
                return Err(PlannerError::invalid_input("id")
                    .with_reason(format!("duplicate task id {}", task.id)));
            }
        }

        let mut dependencies = vec![Vec::new(); tasks.len()];
        let mut dependents = vec![Vec::new(); tasks.len()];
        for (position, task) in tasks.iter().enumerate() {
            for dep_id in &task.dependencies {
                let Some(&dep) = position_of.get(dep_id) else {
                    debug!("Task {} depends on unknown id {dep_id}; ignoring", task.id);
                    continue;
                };
                if dependencies[position].contains(&dep) {
                    continue;
                }
                dependencies[position].push(dep);
                dependents[dep].push(position);
            }
        }

        Ok(Self {
            dependencies,
            dependents,
        })
    }

    /// Positions of the known dependencies of the task at `position`.
    pub(crate) fn dependencies_of(&self, position: usize) -> &[usize] {
        &self.dependencies[position]
    }

    /// Computes the finalization order as input positions.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnschedulableGraph` with the ids of every task
    /// that could not be finalized when the graph contains a cycle.
    pub(crate) fn finalization_order(&self, tasks: &[Task]) -> Result<Vec<usize>> {
        let mut pending: Vec<usize> = self.dependencies.iter().map(Vec::len).collect();
        let mut current: BinaryHeap<Reverse<usize>> = pending
            .iter()
            .enumerate()
            .filter(|(_, count)| **count == 0)
            .map(|(position, _)| Reverse(position))
            .collect();
        let mut next = BinaryHeap::new();
        let mut order = Vec::with_capacity(tasks.len());
        let mut passes = 1;

        loop {
            let Some(Reverse(position)) = current.pop() else {
                if next.is_empty() {
                    break;
                }
                current = mem::take(&mut next);
                passes += 1;
                continue;
            };

            order.push(position);
            for &waiting in &self.dependents[position] {
                pending[waiting] -= 1;
                if pending[waiting] == 0 {
                    if waiting > position {
                        current.push(Reverse(waiting));
                    } else {
                        next.push(Reverse(waiting));
                    }
                }
            }
        }

        if order.len() < tasks.len() {
            let unresolved = pending
                .iter()
                .zip(tasks)
                .filter(|(count, _)| **count > 0)
                .map(|(_, task)| task.id)
                .collect();
            return Err(PlannerError::UnschedulableGraph { unresolved });
        }

        debug!("Resolved {} tasks in {passes} pass(es)", order.len());
        Ok(order)
    }
}
