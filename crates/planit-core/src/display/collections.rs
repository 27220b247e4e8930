//! Collection wrapper types for displaying groups of stored plans.

use std::{fmt, ops::Index};

use super::datetime::LocalDateTime;
use crate::models::PlanRecord;

/// Newtype wrapper for displaying a list of stored plans as summaries.
///
/// # Examples
///
/// ```rust
/// use planit_core::display::PlanRecords;
///
/// let records = PlanRecords(vec![]);
/// assert!(records.is_empty());
/// assert_eq!(records.to_string(), "No plans found.\n");
/// ```
pub struct PlanRecords(pub Vec<PlanRecord>);

impl PlanRecords {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of records in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the records.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanRecord> {
        self.0.iter()
    }
}

impl Index<usize> for PlanRecords {
    type Output = PlanRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for PlanRecords {
    type Item = PlanRecord;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PlanRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plans found.");
        }

        for record in &self.0 {
            let plan = &record.plan;
            let marker = if record.completed { " ✓" } else { "" };
            writeln!(
                f,
                "## {} (ID: {}) ({}/{}){marker}",
                record.goal,
                record.id,
                plan.completed_count(),
                record.total_tasks()
            )?;
            writeln!(f)?;
            writeln!(f, "- **Domain**: {}", plan.domain)?;
            writeln!(
                f,
                "- **Window**: {} to {}",
                plan.start_date, plan.end_date
            )?;
            writeln!(f, "- **Created**: {}", LocalDateTime(&record.created_at))?;
            writeln!(f)?;
        }

        Ok(())
    }
}
