//! One-line outcome messages.

use std::fmt;

/// Outcome of an operation that has no plan to show, such as a failed
/// command in the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success(String),
    Failure(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Success(message) | Self::Failure(message) => message,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.is_success() { "Success" } else { "Error" };
        writeln!(f, "{label}: {}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_line() {
        let status = OperationStatus::success("Progress saved");
        assert!(status.is_success());
        assert_eq!(status.to_string(), "Success: Progress saved\n");
    }

    #[test]
    fn test_failure_keeps_message() {
        let status = OperationStatus::failure(format!("Plan with ID {} not found", 4));
        assert!(!status.is_success());
        assert_eq!(status.message(), "Plan with ID 4 not found");
        assert_eq!(status.to_string(), "Error: Plan with ID 4 not found\n");
    }
}
