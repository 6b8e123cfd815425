/*!
 * FCFS Scheduling Simulator
 * Discrete-time, single-CPU, first-come-first-served process simulation
 * with one I/O interval per process and scheduled kill events
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;
pub mod workload;

// Re-exports
pub use crate::core::{Label, Pid, SimError, SimResult, Tick};
pub use config::{OutputFormat, SimConfig};
pub use monitoring::init_tracing;
pub use process::{KillSpec, ProcessRecord, ProcessSpec, ProcessState, ProcessTable};
pub use report::{Report, ReportRow, Summary};
pub use scheduler::{
    KillSchedule, ProcessQueue, ProcessResult, SchedulerEngine, SimulationOutcome,
    SimulationStats,
};
pub use workload::Workload;

/// Validate a workload, run it to completion and return the outcome
pub fn simulate(workload: Workload) -> SimResult<SimulationOutcome> {
    workload.validate()?;
    Ok(workload.into_engine().run())
}
