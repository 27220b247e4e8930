//! Display implementations for domain models.
//!
//! Plans render as markdown: a heading with the goal, a metadata list, then
//! one section per task in schedule order.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{Plan, PlanRecord, Priority, Task};

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let check = if self.completed { "[x]" } else { "[ ]" };
        writeln!(
            f,
            "### {check} {}. {} ({})",
            self.id,
            self.description,
            self.priority.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Category: {}", self.category)?;

        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => writeln!(
                f,
                "- Schedule: {start} to {end} ({} day(s))",
                self.duration_days
            )?,
            _ => writeln!(f, "- Duration: {} day(s), unscheduled", self.duration_days)?,
        }

        if !self.dependencies.is_empty() {
            writeln!(f, "- Depends on: {}", join_ids(&self.dependencies))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.goal)?;
        writeln!(f)?;

        writeln!(f, "- Domain: {}", self.domain)?;
        writeln!(
            f,
            "- Window: {} to {} ({} days)",
            self.start_date, self.end_date, self.total_days
        )?;
        writeln!(
            f,
            "- Progress: {}/{} tasks completed",
            self.completed_count(),
            self.total_tasks
        )?;
        writeln!(
            f,
            "- Source: {}",
            if self.ai_generated {
                "generated"
            } else {
                "fallback template"
            }
        )?;
        writeln!(f, "- Generated: {}", LocalDateTime(&self.generated_at))?;

        let overrunning: Vec<u64> = self.overrunning_tasks().map(|t| t.id).collect();
        if !overrunning.is_empty() {
            writeln!(f)?;
            writeln!(
                f,
                "> **Warning**: task(s) {} end after {}",
                join_ids(&overrunning),
                self.end_date
            )?;
        }

        if self.tasks.is_empty() {
            writeln!(f, "\nNo tasks in this plan.")?;
        } else {
            writeln!(f, "\n## Tasks")?;
            writeln!(f)?;
            for task in &self.tasks {
                write!(f, "{task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PlanRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Plan ID: {} (stored {})",
            self.id,
            LocalDateTime(&self.created_at)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.plan)
    }
}
