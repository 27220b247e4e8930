//! Command argument types and their handlers.
//!
//! Each command has a clap `Args` struct that converts into the matching
//! core parameter type with a `From` impl, so clap attributes never leak into
//! `planit-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```

use std::{fmt::Display, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use jiff::civil::Date;
use log::debug;
use planit_core::{
    display::{CreateResult, UpdateResult},
    params::{AddCustomTask, GeneratePlan, Id, RegeneratePlan, UpdateProgress},
    schedule::dates::days_between,
    GenerationRequest, Planner, SavedPlan,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

/// Generate a plan for a goal
#[derive(Args)]
pub struct GenerateArgs {
    /// What you want to achieve
    pub goal: String,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Last day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
    /// File holding a model response to the `prompt` output. Without it the
    /// built-in template is used
    #[arg(long)]
    pub response_file: Option<PathBuf>,
}

impl From<GenerateArgs> for GeneratePlan {
    fn from(val: GenerateArgs) -> Self {
        GeneratePlan {
            goal: val.goal,
            start_date: val.start,
            end_date: val.end,
        }
    }
}

/// Show a stored plan
#[derive(Args)]
pub struct ShowPlanArgs {
    /// ID of the plan to display
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record completed tasks
#[derive(Args)]
pub struct ProgressArgs {
    /// ID of the plan
    pub id: u64,
    /// Comma-separated ids of every completed task, e.g. `1,2,4`
    #[arg(long, value_delimiter = ',')]
    pub completed: Vec<u64>,
}

impl From<ProgressArgs> for UpdateProgress {
    fn from(val: ProgressArgs) -> Self {
        UpdateProgress {
            plan_id: val.id,
            completed_tasks: val.completed,
        }
    }
}

/// Regenerate the remaining work of a plan
#[derive(Args)]
pub struct RegenerateArgs {
    /// ID of the plan to regenerate from
    pub id: u64,
    /// Comma-separated ids of completed tasks; defaults to the stored progress
    #[arg(long, value_delimiter = ',')]
    pub completed: Option<Vec<u64>>,
    /// Guidance for the generator, e.g. "less time on research"
    #[arg(long)]
    pub feedback: Option<String>,
    /// File holding a model response with the remaining tasks
    #[arg(long)]
    pub response_file: Option<PathBuf>,
}

impl From<RegenerateArgs> for RegeneratePlan {
    fn from(val: RegenerateArgs) -> Self {
        RegeneratePlan {
            plan_id: val.id,
            completed_tasks: val.completed,
            feedback: val.feedback,
        }
    }
}

/// Add a custom task to a plan
#[derive(Args)]
pub struct AddTaskArgs {
    /// ID of the plan
    pub id: u64,
    /// What needs to be done
    pub description: String,
    /// Duration in days (1-14)
    #[arg(long, default_value_t = 1)]
    pub duration: u32,
    /// Comma-separated ids of tasks this one waits for
    #[arg(long, value_delimiter = ',')]
    pub depends_on: Vec<u64>,
}

impl From<AddTaskArgs> for AddCustomTask {
    fn from(val: AddTaskArgs) -> Self {
        AddCustomTask {
            plan_id: val.id,
            description: val.description,
            duration_days: val.duration,
            dependencies: val.depends_on,
        }
    }
}

/// Print the generator prompt for a goal
#[derive(Args)]
pub struct PromptArgs {
    /// What you want to achieve
    pub goal: String,
    /// First day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub start: Date,
    /// Last day of the plan (YYYY-MM-DD)
    #[arg(long)]
    pub end: Date,
}

impl PromptArgs {
    /// Builds the request a generator would receive for `generate`.
    pub fn request(&self) -> Result<GenerationRequest> {
        let total_days =
            days_between(self.start, self.end).context("Failed to compute plan length")?;
        Ok(GenerationRequest::Initial {
            goal: self.goal.trim().to_string(),
            start_date: self.start,
            end_date: self.end,
            total_days,
        })
    }
}

/// Runs commands against a planner and prints their results.
pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            planner,
            renderer,
            json,
        }
    }

    fn output<T: Serialize>(&self, value: &T, markdown: &impl Display) -> Result<()> {
        if self.json {
            let text = serde_json::to_string_pretty(value).context("Failed to encode JSON")?;
            println!("{text}");
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    fn output_created(&self, result: &CreateResult) -> Result<()> {
        self.output(&result.saved, result)
    }

    fn output_updated(&self, result: &UpdateResult) -> Result<()> {
        let saved = SavedPlan {
            id: result.id,
            plan: result.plan.clone(),
        };
        self.output(&saved, result)
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let params = GeneratePlan::from(args);
        debug!("Generating plan for '{}'", params.goal);
        let result = self
            .planner
            .generate_plan_result(&params)
            .await
            .context("Failed to generate plan")?;
        self.output_created(&result)
    }

    pub async fn show(&self, args: ShowPlanArgs) -> Result<()> {
        let record = self.planner.show_plan(&Id::from(args)).await?;
        self.output(&record, &record)
    }

    pub async fn list(&self) -> Result<()> {
        let records = self
            .planner
            .list_plans_summary()
            .await
            .context("Failed to list plans")?;
        self.output(&records.0, &records)
    }

    pub async fn progress(&self, args: ProgressArgs) -> Result<()> {
        let result = self
            .planner
            .update_progress_result(&UpdateProgress::from(args))
            .await?;
        self.output_updated(&result)
    }

    pub async fn regenerate(&self, args: RegenerateArgs) -> Result<()> {
        let result = self
            .planner
            .regenerate_plan_result(&RegeneratePlan::from(args))
            .await?;
        self.output_created(&result)
    }

    pub async fn add_task(&self, args: AddTaskArgs) -> Result<()> {
        let result = self
            .planner
            .add_custom_task_result(&AddCustomTask::from(args))
            .await?;
        self.output_updated(&result)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use jiff::civil::date;

    use super::*;
    use crate::args::{Args as CliArgs, Commands};

    #[test]
    fn test_generate_args_into_params() {
        let args = CliArgs::try_parse_from([
            "planit",
            "generate",
            "Learn piano",
            "--start",
            "2024-01-01",
            "--end",
            "2024-02-01",
        ])
        .expect("Failed to parse");

        let Some(Commands::Generate(generate)) = args.command else {
            panic!("expected generate command");
        };
        let params = GeneratePlan::from(generate);
        assert_eq!(params.goal, "Learn piano");
        assert_eq!(params.start_date, date(2024, 1, 1));
        assert_eq!(params.end_date, date(2024, 2, 1));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = CliArgs::try_parse_from([
            "planit",
            "generate",
            "Goal",
            "--start",
            "January",
            "--end",
            "2024-02-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_comma_separated_ids() {
        let args = CliArgs::try_parse_from(["planit", "progress", "3", "--completed", "1,2,5"])
            .expect("Failed to parse");

        let Some(Commands::Progress(progress)) = args.command else {
            panic!("expected progress command");
        };
        let params = UpdateProgress::from(progress);
        assert_eq!(params.plan_id, 3);
        assert_eq!(params.completed_tasks, vec![1, 2, 5]);
    }

    #[test]
    fn test_regenerate_without_completed_uses_stored_progress() {
        let args = CliArgs::try_parse_from(["planit", "regenerate", "2", "--feedback", "faster"])
            .expect("Failed to parse");

        let Some(Commands::Regenerate(regenerate)) = args.command else {
            panic!("expected regenerate command");
        };
        let params = RegeneratePlan::from(regenerate);
        assert_eq!(params.completed_tasks, None);
        assert_eq!(params.feedback.as_deref(), Some("faster"));
    }

    #[test]
    fn test_add_task_args_into_params() {
        let args = CliArgs::try_parse_from([
            "planit",
            "add-task",
            "4",
            "Call the venue",
            "--duration",
            "2",
            "--depends-on",
            "1,3",
        ])
        .expect("Failed to parse");

        let Some(Commands::AddTask(add)) = args.command else {
            panic!("expected add-task command");
        };
        let params = AddCustomTask::from(add);
        assert_eq!(params.plan_id, 4);
        assert_eq!(params.duration_days, 2);
        assert_eq!(params.dependencies, vec![1, 3]);
    }

    #[test]
    fn test_prompt_request_counts_days() {
        let args = PromptArgs {
            goal: " Write a thesis ".to_string(),
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        };

        let request = args.request().unwrap();
        assert_eq!(request.goal(), "Write a thesis");
        assert!(request.prompt().contains("30"));
    }
}
