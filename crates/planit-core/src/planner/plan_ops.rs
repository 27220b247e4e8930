//! Plan operations for the Planner.

use jiff::Zoned;

use super::Planner;
use crate::{
    error::Result,
    models::{Plan, PlanRecord},
    operations::{self, SavedPlan},
    params::{AddCustomTask, GeneratePlan, Id, RegeneratePlan, UpdateProgress},
    store::PlanStore,
};

impl Planner {
    /// Generates a plan for a goal and stores it.
    ///
    /// Falls back to the built-in template when the generator fails or
    /// returns tasks that cannot be scheduled.
    pub async fn generate_plan(&self, params: &GeneratePlan) -> Result<SavedPlan> {
        let params = params.clone();
        self.with_database(move |db, generator| {
            operations::generate_plan(db, generator, &params)
        })
        .await
    }

    /// Retrieves a stored plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<PlanRecord>> {
        let id = params.id;
        self.with_database(move |db, _| db.get(id)).await
    }

    /// Lists all stored plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<PlanRecord>> {
        self.with_database(|db, _| db.list()).await
    }

    /// Records completed tasks for a plan without rescheduling it.
    pub async fn update_progress(&self, params: &UpdateProgress) -> Result<Plan> {
        let params = params.clone();
        self.with_database(move |db, _| operations::update_progress(db, &params))
            .await
    }

    /// Regenerates the remaining work of a plan into a new stored plan.
    ///
    /// The generator is told today's date in the system timezone.
    pub async fn regenerate_plan(&self, params: &RegeneratePlan) -> Result<SavedPlan> {
        let params = params.clone();
        let today = Zoned::now().date();
        self.with_database(move |db, generator| {
            operations::regenerate_plan(db, generator, &params, today)
        })
        .await
    }

    /// Adds a custom task to a plan and reschedules it in place.
    pub async fn add_custom_task(&self, params: &AddCustomTask) -> Result<Plan> {
        let params = params.clone();
        self.with_database(move |db, _| operations::add_custom_task(db, &params))
            .await
    }
}
