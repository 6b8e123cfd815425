/*!
 * Simulation Outcome
 * Per-process results handed to the reporting layer
 */

use super::stats::SimulationStats;
use crate::core::label::Label;
use crate::core::serde::{is_false, is_none};
use crate::core::types::{Pid, Tick};
use crate::process::record::ProcessRecord;
use serde::{Deserialize, Serialize};

/// Final state of one process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessResult {
    pub pid: Pid,
    pub name: Label,
    pub cpu_burst: Tick,
    pub io_duration: Tick,
    pub completion_tick: Tick,
    #[serde(default, skip_serializing_if = "is_false")]
    pub terminated_by_kill: bool,
    #[serde(default, skip_serializing_if = "is_none")]
    pub killed_at_tick: Option<Tick>,
}

impl ProcessResult {
    /// Build from a terminal record; `None` if the record is still active
    pub fn from_record(record: &ProcessRecord) -> Option<Self> {
        Some(Self {
            pid: record.pid(),
            name: record.name().clone(),
            cpu_burst: record.total_cpu_burst(),
            io_duration: record.io_duration(),
            completion_tick: record.completion_tick()?,
            terminated_by_kill: record.terminated_by_kill(),
            killed_at_tick: record.killed_at_tick(),
        })
    }

    /// Completion tick minus arrival; every process arrives at tick 0
    #[inline]
    pub fn turnaround(&self) -> Tick {
        self.completion_tick
    }

    /// Turnaround minus CPU burst, floored at zero; not defined for killed processes
    pub fn waiting(&self) -> Option<Tick> {
        if self.terminated_by_kill {
            return None;
        }
        Some(self.turnaround().saturating_sub(self.cpu_burst))
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationOutcome {
    /// Ordered by ascending pid
    pub results: Vec<ProcessResult>,
    /// Pids in the order they reached the finished queue
    pub completion_order: Vec<Pid>,
    pub stats: SimulationStats,
    /// Pid holding the CPU during each tick, `None` when idle
    #[serde(skip)]
    pub timeline: Vec<Option<Pid>>,
    pub final_tick: Tick,
}

impl SimulationOutcome {
    pub fn result(&self, pid: Pid) -> Option<&ProcessResult> {
        self.results
            .binary_search_by_key(&pid, |r| r.pid)
            .ok()
            .map(|idx| &self.results[idx])
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
