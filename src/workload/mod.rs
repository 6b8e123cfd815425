/*!
 * Workload Module
 * Loading and validating the processes and kill events of one run
 */

mod parser;
mod validation;

use crate::core::errors::SimError;
use crate::core::types::SimResult;
use crate::process::types::{KillSpec, ProcessSpec};
use crate::scheduler::SchedulerEngine;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Input to one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Workload {
    pub processes: Vec<ProcessSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub kills: Vec<KillSpec>,
}

impl Workload {
    pub fn new(processes: Vec<ProcessSpec>, kills: Vec<KillSpec>) -> Self {
        Self { processes, kills }
    }

    /// Parse the line-oriented text format and validate it
    pub fn from_text(input: &str) -> SimResult<Self> {
        let sections = parser::parse(input)?;
        let workload = Self::new(sections.processes, sections.kills);
        workload.validate()?;
        Ok(workload)
    }

    /// Parse a JSON document and validate it
    pub fn from_json(input: &str) -> SimResult<Self> {
        let workload: Self = serde_json::from_str(input)?;
        workload.validate()?;
        Ok(workload)
    }

    /// Load from a file, using JSON for a `.json` extension and text otherwise
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SimError::Io(format!("{}: {}", path.display(), e).into()))?;

        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        debug!(path = %path.display(), json = is_json, "Loading workload");

        let workload = if is_json {
            Self::from_json(&contents)?
        } else {
            Self::from_text(&contents)?
        };

        info!(
            path = %path.display(),
            processes = workload.processes.len(),
            kills = workload.kills.len(),
            "Workload loaded"
        );
        Ok(workload)
    }

    /// Reject anything the engine must never see
    ///
    /// Kill events are not checked against registered pids: an unknown
    /// target is a valid event that simply has no effect.
    pub fn validate(&self) -> SimResult<()> {
        validation::validate_processes(&self.processes)
    }

    /// Build an engine from an already validated workload
    pub fn into_engine(self) -> SchedulerEngine {
        SchedulerEngine::new(self.processes, self.kills)
    }
}
