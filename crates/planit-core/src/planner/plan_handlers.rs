//! Plan handler operations that return display wrapper types.

use super::Planner;
use crate::{
    display::{CreateResult, PlanRecords, UpdateResult},
    error::{PlannerError, Result},
    models::PlanRecord,
    params::{AddCustomTask, GeneratePlan, Id, RegeneratePlan, UpdateProgress},
};

impl Planner {
    /// Handle generating a plan, returning the stored result for display.
    pub async fn generate_plan_result(&self, params: &GeneratePlan) -> Result<CreateResult> {
        self.generate_plan(params).await.map(CreateResult::new)
    }

    /// Handle showing a stored plan.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::PlanNotFound` when the plan does not exist.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use planit_core::{params::Id, PlannerBuilder};
    /// # async {
    /// let planner = PlannerBuilder::new().build().await?;
    /// let record = planner.show_plan(&Id { id: 1 }).await?;
    /// println!("{record}");
    /// # Result::<(), planit_core::PlannerError>::Ok(())
    /// # };
    /// ```
    pub async fn show_plan(&self, params: &Id) -> Result<PlanRecord> {
        self.get_plan(params)
            .await?
            .ok_or(PlannerError::PlanNotFound { id: params.id })
    }

    /// Handle listing all stored plans.
    pub async fn list_plans_summary(&self) -> Result<PlanRecords> {
        self.list_plans().await.map(PlanRecords)
    }

    /// Handle a progress update, noting how many tasks are now complete.
    pub async fn update_progress_result(&self, params: &UpdateProgress) -> Result<UpdateResult> {
        let plan = self.update_progress(params).await?;
        let change = format!(
            "{}/{} task(s) completed",
            plan.completed_count(),
            plan.total_tasks
        );
        Ok(UpdateResult::with_changes(params.plan_id, plan, vec![change]))
    }

    /// Handle regenerating a plan, returning the new record for display.
    pub async fn regenerate_plan_result(&self, params: &RegeneratePlan) -> Result<CreateResult> {
        self.regenerate_plan(params).await.map(CreateResult::new)
    }

    /// Handle adding a custom task, noting the new task's id.
    pub async fn add_custom_task_result(&self, params: &AddCustomTask) -> Result<UpdateResult> {
        let plan = self.add_custom_task(params).await?;
        let changes = plan
            .tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map(|id| vec![format!("Added task {id}: {}", params.description.trim())])
            .unwrap_or_default();
        Ok(UpdateResult::with_changes(params.plan_id, plan, changes))
    }
}
