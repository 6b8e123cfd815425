/*!
 * Process Record
 * Mutable per-process simulation state and its state transitions
 */

use super::types::{ProcessSpec, ProcessState};
use crate::core::label::Label;
use crate::core::serde::{is_false, is_none};
use crate::core::types::{Pid, Tick};
use serde::Serialize;

/// What happened to the running process after one tick of CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuOutcome {
    /// Still needs the CPU next tick
    Continue,
    /// Left the CPU for its I/O interval
    Blocked,
    /// Burst exhausted
    Completed,
}

/// State of one simulated process
///
/// While the record is not terminal,
/// `remaining_cpu_burst + executed_cpu_time == total_cpu_burst`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub(crate) pid: Pid,
    pub(crate) name: Label,
    pub(crate) total_cpu_burst: Tick,
    pub(crate) remaining_cpu_burst: Tick,
    pub(crate) executed_cpu_time: Tick,
    #[serde(skip_serializing_if = "is_none")]
    pub(crate) io_start: Option<Tick>,
    pub(crate) io_duration: Tick,
    pub(crate) remaining_io: Tick,
    #[serde(skip_serializing_if = "is_none")]
    pub(crate) completion_tick: Option<Tick>,
    #[serde(skip_serializing_if = "is_false")]
    pub(crate) terminated_by_kill: bool,
    #[serde(skip_serializing_if = "is_none")]
    pub(crate) killed_at_tick: Option<Tick>,
    pub(crate) state: ProcessState,
}

impl ProcessRecord {
    pub fn from_spec(spec: &ProcessSpec) -> Self {
        Self {
            pid: spec.pid,
            name: spec.name.clone(),
            total_cpu_burst: spec.cpu_burst,
            remaining_cpu_burst: spec.cpu_burst,
            executed_cpu_time: 0,
            io_start: spec.io_start,
            io_duration: spec.io_duration,
            remaining_io: 0,
            completion_tick: None,
            terminated_by_kill: false,
            killed_at_tick: None,
            state: ProcessState::Ready,
        }
    }

    #[inline(always)]
    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn name(&self) -> &Label {
        &self.name
    }

    #[inline(always)]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn total_cpu_burst(&self) -> Tick {
        self.total_cpu_burst
    }

    pub fn remaining_cpu_burst(&self) -> Tick {
        self.remaining_cpu_burst
    }

    pub fn executed_cpu_time(&self) -> Tick {
        self.executed_cpu_time
    }

    pub fn io_duration(&self) -> Tick {
        self.io_duration
    }

    pub fn remaining_io(&self) -> Tick {
        self.remaining_io
    }

    pub fn completion_tick(&self) -> Option<Tick> {
        self.completion_tick
    }

    pub fn terminated_by_kill(&self) -> bool {
        self.terminated_by_kill
    }

    pub fn killed_at_tick(&self) -> Option<Tick> {
        self.killed_at_tick
    }

    /// Ready -> Running
    pub(crate) fn dispatch(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Ready);
        self.state = ProcessState::Running;
    }

    /// Consume one tick of CPU during `tick`
    ///
    /// The I/O check runs before the completion check, but only while burst
    /// remains, so a process whose I/O point coincides with its last CPU tick
    /// completes instead of blocking.
    pub(crate) fn run_for_tick(&mut self, tick: Tick) -> CpuOutcome {
        debug_assert_eq!(self.state, ProcessState::Running);

        self.executed_cpu_time += 1;
        self.remaining_cpu_burst = self.remaining_cpu_burst.saturating_sub(1);

        if self.remaining_cpu_burst > 0
            && self.io_duration > 0
            && self.io_start == Some(self.executed_cpu_time)
        {
            self.remaining_io = self.io_duration;
            self.state = ProcessState::Waiting;
            CpuOutcome::Blocked
        } else if self.remaining_cpu_burst == 0 {
            self.completion_tick = Some(tick + 1);
            self.state = ProcessState::Terminated;
            CpuOutcome::Completed
        } else {
            CpuOutcome::Continue
        }
    }

    /// Advance the I/O interval by one tick, returning true once it has drained
    pub(crate) fn advance_io(&mut self) -> bool {
        debug_assert_eq!(self.state, ProcessState::Waiting);
        self.remaining_io = self.remaining_io.saturating_sub(1);
        self.remaining_io == 0
    }

    /// Waiting -> Ready
    pub(crate) fn wake(&mut self) {
        debug_assert_eq!(self.state, ProcessState::Waiting);
        self.state = ProcessState::Ready;
    }

    /// Forced termination at `tick`
    pub(crate) fn kill(&mut self, tick: Tick) {
        debug_assert!(!self.is_terminal());
        self.terminated_by_kill = true;
        self.killed_at_tick = Some(tick);
        self.completion_tick = Some(tick);
        self.state = ProcessState::Terminated;
    }
}
