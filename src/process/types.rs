/*!
 * Process Types
 * Specifications consumed by the engine and the lifecycle state of a process
 */

use crate::core::label::Label;
use crate::core::serde::is_none;
use crate::core::types::{Pid, Tick};
use serde::{Deserialize, Serialize};

/// Process state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Process is ready to run
    Ready,
    /// Process holds the CPU
    Running,
    /// Process is performing its I/O interval
    Waiting,
    /// Process completed or was killed
    Terminated,
}

impl ProcessState {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ProcessState::Terminated)
    }
}

/// Description of one process to simulate
///
/// `io_start` of `None` and an `io_duration` of 0 both mean the process never
/// leaves the CPU for I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessSpec {
    pub pid: Pid,
    pub name: Label,
    pub cpu_burst: Tick,
    #[serde(default, skip_serializing_if = "is_none")]
    pub io_start: Option<Tick>,
    #[serde(default)]
    pub io_duration: Tick,
}

impl ProcessSpec {
    /// CPU-only process
    pub fn new(pid: Pid, name: impl Into<Label>, cpu_burst: Tick) -> Self {
        Self {
            pid,
            name: name.into(),
            cpu_burst,
            io_start: None,
            io_duration: 0,
        }
    }

    /// Add a single I/O interval starting after `start` CPU ticks
    pub fn with_io(mut self, start: Tick, duration: Tick) -> Self {
        self.io_start = Some(start);
        self.io_duration = duration;
        self
    }

    /// Whether this process will ever enter the Waiting state
    #[inline]
    pub fn has_io(&self) -> bool {
        self.io_start.is_some() && self.io_duration > 0
    }
}

/// Forced termination of `pid` at the start of `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct KillSpec {
    pub pid: Pid,
    pub tick: Tick,
}

impl KillSpec {
    pub const fn new(pid: Pid, tick: Tick) -> Self {
        Self { pid, tick }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_disabled_by_zero_duration() {
        let spec = ProcessSpec::new(1, "a", 4).with_io(2, 0);
        assert!(!spec.has_io());
        assert!(ProcessSpec::new(1, "a", 4).with_io(2, 3).has_io());
        assert!(!ProcessSpec::new(1, "a", 4).has_io());
    }

    #[test]
    fn test_spec_json_defaults() {
        let spec: ProcessSpec =
            serde_json::from_str(r#"{"pid": 3, "name": "shell", "cpu_burst": 5}"#).unwrap();
        assert_eq!(spec, ProcessSpec::new(3, "shell", 5));
    }

    #[test]
    fn test_state_serialization() {
        let json = serde_json::to_string(&ProcessState::Terminated).unwrap();
        assert_eq!(json, "\"terminated\"");
        assert!(ProcessState::Terminated.is_terminal());
        assert!(!ProcessState::Waiting.is_terminal());
    }
}
