//! Plan storage abstraction.
//!
//! Workflows in [`crate::operations`] only talk to a [`PlanStore`]; the
//! scheduler itself never touches storage. Each call is atomic on its own.
//! Callers read a plan, compute a new one, and write it back.

use std::collections::BTreeMap;

use jiff::Timestamp;

use crate::{
    error::{PlannerError, Result},
    models::{Plan, PlanRecord},
};

/// Key-value store of plans keyed by a store-assigned id.
pub trait PlanStore {
    /// Stores a new plan with no recorded progress and returns its id.
    fn put(&mut self, plan: &Plan) -> Result<u64> {
        self.put_with_progress(plan, &[])
    }

    /// Stores a new plan together with its completed-task list in one write.
    fn put_with_progress(&mut self, plan: &Plan, completed_tasks: &[u64]) -> Result<u64>;

    /// Fetches a stored plan.
    fn get(&self, id: u64) -> Result<Option<PlanRecord>>;

    /// Replaces a stored plan body and its completed-task list.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` when no record has that id.
    fn update(&mut self, id: u64, plan: &Plan, completed_tasks: &[u64]) -> Result<()>;

    /// Lists all stored plans, newest first.
    fn list(&self) -> Result<Vec<PlanRecord>>;
}

/// Process-local store, handy for tests and one-shot tools.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: BTreeMap<u64, PlanRecord>,
    last_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlanStore for MemoryStore {
    fn put_with_progress(&mut self, plan: &Plan, completed_tasks: &[u64]) -> Result<u64> {
        self.last_id += 1;
        let id = self.last_id;
        self.records.insert(
            id,
            PlanRecord {
                id,
                goal: plan.goal.clone(),
                plan: plan.clone(),
                created_at: Timestamp::now(),
                completed: plan.is_complete(),
                completed_tasks: completed_tasks.to_vec(),
            },
        );
        Ok(id)
    }

    fn get(&self, id: u64) -> Result<Option<PlanRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn update(&mut self, id: u64, plan: &Plan, completed_tasks: &[u64]) -> Result<()> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(PlannerError::PlanNotFound { id })?;
        record.plan = plan.clone();
        record.completed = plan.is_complete();
        record.completed_tasks = completed_tasks.to_vec();
        Ok(())
    }

    fn list(&self) -> Result<Vec<PlanRecord>> {
        Ok(self.records.values().rev().cloned().collect())
    }
}
