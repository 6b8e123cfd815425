/*!
 * Report Module
 * Presentation of simulation outcomes as a table or JSON
 */

mod table;

use crate::core::label::Label;
use crate::core::serde::is_none;
use crate::core::types::{Pid, SimResult, Tick};
use crate::scheduler::{ProcessResult, SimulationOutcome, SimulationStats};
use serde::Serialize;

/// One output line per process
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ReportRow {
    pub pid: Pid,
    pub name: Label,
    pub cpu_burst: Tick,
    pub io_duration: Tick,
    pub turnaround: Tick,
    #[serde(skip_serializing_if = "is_none")]
    pub waiting: Option<Tick>,
    #[serde(skip_serializing_if = "is_none")]
    pub killed_at_tick: Option<Tick>,
}

impl From<&ProcessResult> for ReportRow {
    fn from(result: &ProcessResult) -> Self {
        Self {
            pid: result.pid,
            name: result.name.clone(),
            cpu_burst: result.cpu_burst,
            io_duration: result.io_duration,
            turnaround: result.turnaround(),
            waiting: result.waiting(),
            killed_at_tick: result.killed_at_tick,
        }
    }
}

/// Aggregates over the whole run
///
/// Averages cover completed processes only. Utilization is busy CPU ticks
/// over the makespan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Summary {
    pub completed: usize,
    pub killed: usize,
    #[serde(skip_serializing_if = "is_none")]
    pub average_turnaround: Option<f64>,
    #[serde(skip_serializing_if = "is_none")]
    pub average_waiting: Option<f64>,
    pub makespan: Tick,
    pub cpu_utilization: f64,
}

/// Rows ordered by pid plus run-wide figures
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
    pub stats: SimulationStats,
    #[serde(skip)]
    timeline: Vec<Option<Pid>>,
}

impl Report {
    pub fn from_outcome(outcome: &SimulationOutcome) -> Self {
        let mut rows: Vec<ReportRow> = outcome.results.iter().map(ReportRow::from).collect();
        rows.sort_by_key(|row| row.pid);

        let completed: Vec<&ReportRow> = rows.iter().filter(|r| r.killed_at_tick.is_none()).collect();
        let average = |values: Vec<Tick>| -> Option<f64> {
            if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<Tick>() as f64 / values.len() as f64)
            }
        };

        // Last terminal tick; the clock may run one idle tick past it after a kill
        let makespan = rows.iter().map(|r| r.turnaround).max().unwrap_or(0);

        let summary = Summary {
            completed: completed.len(),
            killed: rows.len() - completed.len(),
            average_turnaround: average(completed.iter().map(|r| r.turnaround).collect()),
            average_waiting: average(completed.iter().filter_map(|r| r.waiting).collect()),
            makespan,
            cpu_utilization: if makespan == 0 {
                0.0
            } else {
                outcome.stats.busy_ticks as f64 / makespan as f64
            },
        };

        Self {
            rows,
            summary,
            stats: outcome.stats.clone(),
            timeline: outcome.timeline.clone(),
        }
    }

    /// Fixed-width table followed by the summary block
    pub fn render_table(&self) -> String {
        table::render(self, false)
    }

    /// Table with a per-tick CPU timeline appended
    pub fn render_table_with_timeline(&self) -> String {
        table::render(self, true)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
