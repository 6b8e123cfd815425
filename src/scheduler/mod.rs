/*!
 * FCFS Scheduler Engine
 * Single-CPU, non-preemptive tick loop with I/O intervals and kill events
 */

use crate::core::types::{Pid, Tick};
use crate::process::record::ProcessRecord;
use crate::process::table::ProcessTable;
use crate::process::types::{KillSpec, ProcessSpec};
use tracing::{info, warn};

pub mod kill;
mod operations;
pub mod outcome;
pub mod queue;
pub mod stats;

pub use kill::KillSchedule;
pub use outcome::{ProcessResult, SimulationOutcome};
pub use queue::ProcessQueue;
pub use stats::SimulationStats;

/// Owns all state of one simulation run
///
/// Records live in the table; the running slot and the three queues hold
/// pids. A pid is in exactly one of running, ready, waiting or finished.
#[derive(Debug)]
pub struct SchedulerEngine {
    table: ProcessTable,
    ready: ProcessQueue,
    waiting: ProcessQueue,
    finished: ProcessQueue,
    kills: KillSchedule,
    running: Option<Pid>,
    tick: Tick,
    stats: SimulationStats,
    timeline: Vec<Option<Pid>>,
}

impl SchedulerEngine {
    /// Register processes in order and schedule kill events
    ///
    /// Registration order is the initial ready order. A spec whose pid is
    /// already registered is skipped; validation normally rejects it first.
    pub fn new<P, K>(processes: P, kills: K) -> Self
    where
        P: IntoIterator<Item = ProcessSpec>,
        K: IntoIterator<Item = KillSpec>,
    {
        let processes = processes.into_iter();
        let (lower, _) = processes.size_hint();

        let mut table = ProcessTable::with_capacity(lower);
        let mut ready = ProcessQueue::with_capacity(lower);

        for spec in processes {
            let pid = spec.pid;
            if table.insert(ProcessRecord::from_spec(&spec)) {
                ready.enqueue(pid);
            } else {
                warn!(pid, "Duplicate process id skipped at registration");
            }
        }

        let kills: KillSchedule = kills.into_iter().collect();

        info!(
            processes = table.len(),
            kill_events = kills.len(),
            "Scheduler engine initialized"
        );

        Self {
            finished: ProcessQueue::with_capacity(table.len()),
            waiting: ProcessQueue::new(),
            table,
            ready,
            kills,
            running: None,
            tick: 0,
            stats: SimulationStats::default(),
            timeline: Vec::new(),
        }
    }

    /// Current simulated time
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn running(&self) -> Option<Pid> {
        self.running
    }

    pub fn ready(&self) -> &ProcessQueue {
        &self.ready
    }

    pub fn waiting(&self) -> &ProcessQueue {
        &self.waiting
    }

    pub fn finished(&self) -> &ProcessQueue {
        &self.finished
    }

    pub fn pending_kills(&self) -> &KillSchedule {
        &self.kills
    }

    pub fn record(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.table.get(pid)
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// Number of registered processes
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
