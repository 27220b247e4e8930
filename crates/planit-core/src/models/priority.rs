//! Task priority enumeration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task priorities.
///
/// Priority is carried through scheduling unchanged; it does not affect the
/// order in which tasks are finalized.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Get priority with a marker for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use planit_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.with_icon(), "▲ high");
    /// assert_eq!(Priority::Low.with_icon(), "▽ low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ high",
            Priority::Medium => "◆ medium",
            Priority::Low => "▽ low",
        }
    }
}
