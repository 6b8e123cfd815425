/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::label::Label;
use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
///
/// Every variant is raised before or after the tick loop; the loop itself
/// has no failure path.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimError {
    #[error("Duplicate process id {0}")]
    #[diagnostic(
        code(workload::duplicate_pid),
        help("Every process line must use a distinct id.")
    )]
    DuplicatePid(Pid),

    #[error("Invalid process specification for pid {pid}: {reason}")]
    #[diagnostic(
        code(workload::invalid_process),
        help("Names must be non-empty, ids and CPU bursts must be positive.")
    )]
    InvalidProcess { pid: Pid, reason: Label },

    #[error("Parse error on line {line}: {message}")]
    #[diagnostic(
        code(workload::parse_error),
        help("Expected `<name> <pid> <burst> <io_start|-> <io_duration|->` or `KILL <pid> <tick>`.")
    )]
    Parse { line: usize, message: Label },

    #[error("Invalid JSON workload: {0}")]
    #[diagnostic(
        code(workload::invalid_json),
        help("The document must be an object with `processes` and optional `kills` arrays.")
    )]
    Json(Label),

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(sim::io_error),
        help("Check that the input path exists and is readable.")
    )]
    Io(Label),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(sim::configuration_error),
        help("FCFS_OUTPUT accepts `table` or `json`.")
    )]
    Configuration(Label),
}

impl SimError {
    pub fn parse(line: usize, message: impl Into<Label>) -> Self {
        SimError::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_process(pid: Pid, reason: impl Into<Label>) -> Self {
        SimError::InvalidProcess {
            pid,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for SimError {
    fn from(err: std::io::Error) -> Self {
        SimError::Io(err.to_string().into())
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        SimError::Json(err.to_string().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = SimError::DuplicatePid(7);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"error_type\":\"duplicate_pid\""));
        let deserialized: SimError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, deserialized);
    }

    #[test]
    fn test_parse_error_display() {
        let error = SimError::parse(4, "expected 5 fields, found 3");
        assert_eq!(
            error.to_string(),
            "Parse error on line 4: expected 5 fields, found 3"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        let error = SimError::invalid_process(3, "CPU burst must be positive");
        let code = error.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("workload::invalid_process"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.txt");
        let error: SimError = io.into();
        assert!(matches!(error, SimError::Io(_)));
    }
}
