use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    AddTaskArgs, GenerateArgs, ProgressArgs, PromptArgs, RegenerateArgs, ShowPlanArgs,
};

/// Turn goals into dated, dependency-ordered task plans
///
/// PlanIt asks a task generator for a breakdown of your goal, schedules the
/// tasks inside your date window, and keeps plans in a local SQLite database
/// so progress can be tracked and the remaining work replanned.
#[derive(Parser)]
#[command(version, about, name = "planit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/planit/planit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the PlanIt CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate and store a plan for a goal
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show a stored plan
    Show(ShowPlanArgs),
    /// List stored plans, newest first
    #[command(alias = "ls")]
    List,
    /// Record which tasks are complete
    Progress(ProgressArgs),
    /// Replan the remaining work of a plan into a new plan
    Regenerate(RegenerateArgs),
    /// Add a custom task to a plan and reschedule it
    AddTask(AddTaskArgs),
    /// Print the generator prompt for a goal
    Prompt(PromptArgs),
}
