//! Plan workflows shared by every interface.
//!
//! Each workflow combines the pure pieces (generation with fallback,
//! [`schedule`], [`assemble`], [`replan`](crate::replan)) with a
//! [`PlanStore`]. They are synchronous; [`crate::Planner`] runs them on a
//! blocking thread against the SQLite store.

use jiff::civil::Date;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    assemble::{assemble, TaskSource},
    error::{PlannerError, Result},
    generate::{
        fallback::{fallback_tasks, FALLBACK_DOMAIN},
        GenerationRequest, TaskGenerator,
    },
    models::{Plan, Priority, Task},
    params::{AddCustomTask, GeneratePlan, RegeneratePlan, UpdateProgress},
    replan::regenerate,
    schedule::{dates::days_between, schedule},
    store::PlanStore,
};

/// Domain used when the generator does not name one.
pub const GENERATED_DOMAIN: &str = "AI Generated";

/// Category given to tasks added by hand.
pub const CUSTOM_CATEGORY: &str = "Custom";

/// Longest duration accepted for an ad-hoc task.
pub const MAX_CUSTOM_DURATION: u32 = 14;

/// A plan together with the id it was stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: u64,
    pub plan: Plan,
}

/// Builds a dated plan for a goal, degrading to the fallback template.
///
/// The generator's tasks are used when it succeeds and they form a
/// schedulable graph; otherwise the six-phase template scaled to the window
/// is scheduled instead.
///
/// # Errors
///
/// Returns `PlannerError::InvalidInput` for an empty goal. Scheduling the
/// fallback template itself cannot fail except on calendar overflow.
pub fn build_plan(
    generator: &dyn TaskGenerator,
    goal: &str,
    start_date: Date,
    end_date: Date,
) -> Result<Plan> {
    let goal = goal.trim();
    if goal.is_empty() {
        return Err(PlannerError::invalid_input("goal").with_reason("Goal is required"));
    }

    let total_days = days_between(start_date, end_date)?;
    let request = GenerationRequest::Initial {
        goal: goal.to_string(),
        start_date,
        end_date,
        total_days,
    };

    match generator.generate(&request) {
        Ok(generated) => match schedule(generated.tasks, start_date, end_date) {
            Ok(tasks) => {
                let domain = generated.domain.as_deref().unwrap_or(GENERATED_DOMAIN);
                return assemble(
                    tasks,
                    goal,
                    start_date,
                    end_date,
                    domain,
                    TaskSource::Generated,
                );
            }
            Err(
                e @ (PlannerError::UnschedulableGraph { .. }
                | PlannerError::InvalidInput { .. }
                | PlannerError::DateOutOfRange { .. }),
            ) => {
                warn!("Generated tasks cannot be scheduled, using fallback template: {e}");
            }
            Err(e) => return Err(e),
        },
        Err(e) => warn!("Task generation failed, using fallback template: {e}"),
    }

    let tasks = schedule(fallback_tasks(total_days), start_date, end_date)?;
    assemble(
        tasks,
        goal,
        start_date,
        end_date,
        FALLBACK_DOMAIN,
        TaskSource::Fallback,
    )
}

/// Generates a plan and stores it.
pub fn generate_plan<S: PlanStore + ?Sized>(
    store: &mut S,
    generator: &dyn TaskGenerator,
    params: &GeneratePlan,
) -> Result<SavedPlan> {
    let plan = build_plan(generator, &params.goal, params.start_date, params.end_date)?;
    let id = store.put(&plan)?;
    info!("Generated plan {id} with {} task(s)", plan.total_tasks);
    Ok(SavedPlan { id, plan })
}

/// Records which tasks are complete. Never reschedules.
///
/// # Errors
///
/// Returns `PlannerError::PlanNotFound` when the plan does not exist.
pub fn update_progress<S: PlanStore + ?Sized>(
    store: &mut S,
    params: &UpdateProgress,
) -> Result<Plan> {
    let record = store
        .get(params.plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

    let mut plan = record.plan;
    plan.mark_completed(&params.completed_tasks);
    store.update(params.plan_id, &plan, &params.completed_tasks)?;
    Ok(plan)
}

/// Regenerates the remaining work of a stored plan into a new record.
///
/// The original record is left untouched. When the generator fails, the new
/// record holds a copy of the original plan.
///
/// # Errors
///
/// - `PlannerError::PlanNotFound` when the plan does not exist
/// - scheduling errors from the merged task set
pub fn regenerate_plan<S: PlanStore + ?Sized>(
    store: &mut S,
    generator: &dyn TaskGenerator,
    params: &RegeneratePlan,
    today: Date,
) -> Result<SavedPlan> {
    let record = store
        .get(params.plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;

    let completed_ids = params
        .completed_tasks
        .clone()
        .unwrap_or(record.completed_tasks);
    let completed: Vec<Task> = record
        .plan
        .tasks
        .iter()
        .filter(|task| completed_ids.contains(&task.id))
        .cloned()
        .collect();

    let plan = regenerate(
        &record.plan,
        completed,
        params.feedback.clone(),
        today,
        generator,
    )?;

    let progress: Vec<u64> = plan
        .tasks
        .iter()
        .filter(|task| task.completed)
        .map(|task| task.id)
        .collect();
    let id = store.put_with_progress(&plan, &progress)?;

    info!("Regenerated plan {} as plan {id}", params.plan_id);
    Ok(SavedPlan { id, plan })
}

/// Inserts an ad-hoc task and reschedules the plan in place.
///
/// # Errors
///
/// - `PlannerError::PlanNotFound` when the plan does not exist
/// - `PlannerError::InvalidInput` for an empty description, a duration
///   outside `1..=14`, or a dependency on a task the plan does not have
pub fn add_custom_task<S: PlanStore + ?Sized>(
    store: &mut S,
    params: &AddCustomTask,
) -> Result<Plan> {
    let description = params.description.trim();
    if description.is_empty() {
        return Err(PlannerError::invalid_input("description")
            .with_reason("Task description is required"));
    }
    if !(1..=MAX_CUSTOM_DURATION).contains(&params.duration_days) {
        return Err(PlannerError::invalid_input("duration_days").with_reason(format!(
            "Duration must be between 1 and {MAX_CUSTOM_DURATION} days"
        )));
    }

    let record = store
        .get(params.plan_id)?
        .ok_or(PlannerError::PlanNotFound { id: params.plan_id })?;
    let original = record.plan;

    if let Some(missing) = params
        .dependencies
        .iter()
        .find(|dep| original.task(**dep).is_none())
    {
        return Err(PlannerError::invalid_input("dependencies")
            .with_reason(format!("Plan has no task with ID {missing}")));
    }

    let next_id = original.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
    let mut tasks = original.tasks.clone();
    tasks.push(Task::new(
        next_id,
        description,
        CUSTOM_CATEGORY,
        Priority::Medium,
        params.duration_days,
        params.dependencies.clone(),
    ));

    let scheduled = schedule(tasks, original.start_date, original.end_date)?;
    let source = if original.ai_generated {
        TaskSource::Generated
    } else {
        TaskSource::Fallback
    };
    let plan = assemble(
        scheduled,
        &original.goal,
        original.start_date,
        original.end_date,
        &original.domain,
        source,
    )?;

    store.update(params.plan_id, &plan, &record.completed_tasks)?;
    info!("Added task {next_id} to plan {}", params.plan_id);
    Ok(plan)
}
