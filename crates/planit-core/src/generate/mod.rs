//! Task generation capability.
//!
//! Turning a natural-language goal into tasks is delegated to an external
//! text generator behind the [`TaskGenerator`] trait. Generators are
//! best-effort: they may fail outright or return malformed text, so every
//! caller pairs them with the deterministic [`fallback`] template.
//!
//! ```text
//! GenerationRequest ──prompt()──▶ external model ──text──▶ parse_response()
//!         │                                                     │
//!         └──────────── on GenerationError ─────▶ fallback::fallback_tasks()
//! ```

use std::path::PathBuf;

use jiff::civil::Date;
use thiserror::Error;

use crate::models::Task;

pub mod fallback;
pub mod response;
pub mod sources;

pub use response::parse_response;
pub use sources::{ResponseFileGenerator, StaticGenerator, UnavailableGenerator};

/// Failure of the external generation step.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No generator is configured or reachable
    #[error("Task generator unavailable: {0}")]
    Unavailable(String),
    /// The generator's output could not be read
    #[error("Failed to read generator output at '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The output holds no JSON object
    #[error("Generator response contains no JSON object")]
    MissingJson,
    /// The JSON object does not describe a task set
    #[error("Malformed generator response: {source}")]
    Malformed {
        #[from]
        source: serde_json::Error,
    },
    /// The response parsed but listed no tasks
    #[error("Generator response contains no tasks")]
    NoTasks,
}

/// What the generator is asked to produce.
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationRequest {
    /// A full task breakdown for a new plan
    Initial {
        goal: String,
        start_date: Date,
        end_date: Date,
        total_days: i64,
    },
    /// The remaining work for an existing plan
    Replan {
        goal: String,
        total_days: i64,
        today: Date,
        completed: Vec<String>,
        feedback: Option<String>,
    },
}

/// Tasks returned by a generator, not yet scheduled.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeneratedTasks {
    /// Classification label suggested by the generator
    pub domain: Option<String>,
    /// Unscheduled tasks with generator-assigned ids
    pub tasks: Vec<Task>,
}

/// A source of generated tasks.
pub trait TaskGenerator: Send + Sync {
    /// Produces tasks for the request.
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedTasks, GenerationError>;
}

const RESPONSE_SHAPE: &str = r#"{
    "domain": "domain_name",
    "tasks": [
        {
            "id": 1,
            "description": "specific task description",
            "category": "task category",
            "priority": "high|medium|low",
            "duration_days": 2,
            "dependencies": []
        }
    ]
}"#;

impl GenerationRequest {
    /// The goal the request is about.
    pub fn goal(&self) -> &str {
        match self {
            Self::Initial { goal, .. } | Self::Replan { goal, .. } => goal,
        }
    }

    /// Renders the instruction text handed to an external model.
    pub fn prompt(&self) -> String {
        match self {
            Self::Initial {
                goal,
                start_date,
                end_date,
                total_days,
            } => format!(
                "Break the following goal into concrete, actionable tasks.\n\n\
                 GOAL: {goal}\n\
                 TIMELINE: {total_days} days ({start_date} to {end_date})\n\n\
                 Return a domain label for the goal and 6-8 tasks, each with a clear \
                 description, a realistic duration in days, a priority (high, medium or \
                 low), dependencies on earlier task ids and a category.\n\n\
                 Respond with JSON only:\n{RESPONSE_SHAPE}\n\n\
                 Keep the total effort realistic for {total_days} days."
            ),
            Self::Replan {
                goal,
                total_days,
                today,
                completed,
                feedback,
            } => {
                let done = if completed.is_empty() {
                    "Nothing yet".to_string()
                } else {
                    completed
                        .iter()
                        .map(|description| format!("Completed: {description}"))
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                let feedback = feedback.as_deref().unwrap_or("No specific feedback");
                format!(
                    "Original goal: {goal}\n\
                     Timeline: {total_days} days total\n\
                     Current date: {today}\n\n\
                     Already completed:\n{done}\n\n\
                     User feedback: {feedback}\n\n\
                     Plan the REMAINING work only, taking the completed work, the time left \
                     and the feedback into account. Number the new tasks from 1; dependencies \
                     refer to those new numbers. Provide 4-6 tasks as JSON:\n{RESPONSE_SHAPE}"
                )
            }
        }
    }
}
