//! Parsing of raw generator output into tasks.
//!
//! Models wrap their JSON in prose or code fences, so the object is taken
//! from the first `{` to the last `}` before deserializing. Fields a model
//! commonly gets wrong are tolerated: missing categories and priorities get
//! defaults, unknown priorities become medium and durations are rounded and
//! floored at one day.

use log::debug;
use serde::Deserialize;

use super::{GeneratedTasks, GenerationError};
use crate::models::{Priority, Task};

const DEFAULT_CATEGORY: &str = "General";

#[derive(Deserialize)]
struct RawResponse {
    #[serde(default)]
    domain: Option<String>,
    tasks: Vec<RawTask>,
}

#[derive(Deserialize)]
struct RawTask {
    id: u64,
    description: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    duration_days: f64,
    #[serde(default)]
    dependencies: Vec<u64>,
}

impl From<RawTask> for Task {
    fn from(raw: RawTask) -> Self {
        let category = raw
            .category
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        let priority = match raw.priority.as_deref().map(str::parse::<Priority>) {
            Some(Ok(priority)) => priority,
            Some(Err(e)) => {
                debug!("Task {}: {e}; using medium", raw.id);
                Priority::Medium
            }
            None => Priority::Medium,
        };
        // Float-to-int casts saturate, so huge or NaN durations stay in range.
        let duration_days = (raw.duration_days.round() as u32).max(1);

        Task::new(
            raw.id,
            raw.description,
            category,
            priority,
            duration_days,
            raw.dependencies,
        )
    }
}

/// Extracts a task set from free-form generator output.
///
/// # Errors
///
/// - `GenerationError::MissingJson` when no `{ ... }` span exists
/// - `GenerationError::Malformed` when the span is not a valid task set
/// - `GenerationError::NoTasks` when the task list is empty
///
/// # Examples
///
/// ```rust
/// use planit_core::generate::parse_response;
///
/// let text = r#"Here is your plan:
/// {"domain": "Fitness", "tasks": [
///   {"id": 1, "description": "Buy shoes", "duration_days": 1, "dependencies": []}
/// ]}"#;
/// let generated = parse_response(text).unwrap();
/// assert_eq!(generated.domain.as_deref(), Some("Fitness"));
/// assert_eq!(generated.tasks[0].category, "General");
/// ```
pub fn parse_response(text: &str) -> Result<GeneratedTasks, GenerationError> {
    let (Some(open), Some(close)) = (text.find('{'), text.rfind('}')) else {
        return Err(GenerationError::MissingJson);
    };
    if close < open {
        return Err(GenerationError::MissingJson);
    }

    let raw: RawResponse = serde_json::from_str(&text[open..=close])?;
    if raw.tasks.is_empty() {
        return Err(GenerationError::NoTasks);
    }

    Ok(GeneratedTasks {
        domain: raw.domain.filter(|d| !d.trim().is_empty()),
        tasks: raw.tasks.into_iter().map(Task::from).collect(),
    })
}
