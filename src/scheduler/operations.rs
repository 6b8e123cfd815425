/*!
 * Tick Loop
 * Per-tick kill, dispatch, CPU and I/O steps
 */

use super::outcome::{ProcessResult, SimulationOutcome};
use super::SchedulerEngine;
use crate::core::types::Pid;
use crate::process::record::CpuOutcome;
use tracing::{debug, info, instrument};

impl SchedulerEngine {
    /// True once nothing is running, ready or waiting
    pub fn is_finished(&self) -> bool {
        self.running.is_none() && self.ready.is_empty() && self.waiting.is_empty()
    }

    /// Run one tick; returns false without doing anything once finished
    ///
    /// Step order is fixed: kills, dispatch, CPU, I/O countdown, I/O wake-ups,
    /// then the clock advances.
    #[instrument(level = "trace", skip_all, fields(tick = self.tick))]
    pub fn step(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }

        self.apply_kills();
        self.dispatch();

        // Only processes already waiting before the CPU step count down this tick
        let io_cohort = self.waiting.snapshot();

        self.advance_cpu();
        self.advance_io(&io_cohort);
        self.requeue_from_io();

        self.tick += 1;
        self.stats.ticks = self.tick;
        true
    }

    /// Run until every process is terminal and collect the results
    pub fn run(mut self) -> SimulationOutcome {
        while self.step() {}
        self.into_outcome()
    }

    /// Consume the engine into its outcome; active processes are omitted
    pub fn into_outcome(mut self) -> SimulationOutcome {
        self.stats.kills_unfired = self.kills.len() as u64;

        let completion_order = self.finished.snapshot();
        let mut results: Vec<ProcessResult> = completion_order
            .iter()
            .filter_map(|&pid| self.table.get(pid))
            .filter_map(ProcessResult::from_record)
            .collect();
        results.sort_by_key(|r| r.pid);

        info!(
            ticks = self.tick,
            finished = results.len(),
            registered = self.table.len(),
            kills_applied = self.stats.kills_applied,
            "Simulation complete"
        );

        SimulationOutcome {
            results,
            completion_order,
            stats: self.stats,
            timeline: self.timeline,
            final_tick: self.tick,
        }
    }

    fn apply_kills(&mut self) {
        for pid in self.kills.fire_and_consume(self.tick) {
            let alive = self
                .table
                .get(pid)
                .map(|record| !record.is_terminal())
                .unwrap_or(false);

            if !alive {
                self.stats.kills_ignored += 1;
                debug!(pid, tick = self.tick, "Kill ignored: no live process");
                continue;
            }

            if self.running == Some(pid) {
                self.running = None;
            } else {
                let removed = self
                    .ready
                    .remove_by_id(pid)
                    .or_else(|| self.waiting.remove_by_id(pid));
                debug_assert!(removed.is_some(), "live process {} in no queue", pid);
            }

            if let Some(record) = self.table.get_mut(pid) {
                record.kill(self.tick);
            }
            self.finished.enqueue(pid);
            self.stats.kills_applied += 1;
            debug!(pid, tick = self.tick, "Process killed");
        }
    }

    fn dispatch(&mut self) {
        if self.running.is_some() {
            return;
        }
        let Some(pid) = self.ready.dequeue_front() else {
            return;
        };
        if let Some(record) = self.table.get_mut(pid) {
            record.dispatch();
        }
        self.running = Some(pid);
        self.stats.dispatches += 1;
        debug!(pid, tick = self.tick, "Process dispatched");
    }

    fn advance_cpu(&mut self) {
        let Some(pid) = self.running else {
            self.timeline.push(None);
            self.stats.idle_ticks += 1;
            return;
        };

        self.timeline.push(Some(pid));
        self.stats.busy_ticks += 1;

        let outcome = match self.table.get_mut(pid) {
            Some(record) => record.run_for_tick(self.tick),
            None => return,
        };

        match outcome {
            CpuOutcome::Continue => {}
            CpuOutcome::Blocked => {
                self.running = None;
                self.waiting.enqueue(pid);
                self.stats.io_transitions += 1;
                debug!(pid, tick = self.tick, "Process blocked on I/O");
            }
            CpuOutcome::Completed => {
                self.running = None;
                self.finished.enqueue(pid);
                self.stats.completions += 1;
                debug!(pid, completion_tick = self.tick + 1, "Process completed");
            }
        }
    }

    fn advance_io(&mut self, cohort: &[Pid]) {
        for &pid in cohort {
            if let Some(record) = self.table.get_mut(pid) {
                record.advance_io();
            }
        }
    }

    fn requeue_from_io(&mut self) {
        let drained: Vec<Pid> = self
            .waiting
            .iter()
            .filter(|&pid| {
                self.table
                    .get(pid)
                    .map(|record| record.remaining_io() == 0)
                    .unwrap_or(false)
            })
            .collect();

        for pid in drained {
            self.waiting.remove_by_id(pid);
            if let Some(record) = self.table.get_mut(pid) {
                record.wake();
            }
            self.ready.enqueue(pid);
            debug!(pid, tick = self.tick, "I/O complete, process ready");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::process::types::{KillSpec, ProcessSpec, ProcessState};
    use crate::scheduler::SchedulerEngine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_newly_blocked_not_decremented_same_tick() {
        let mut engine =
            SchedulerEngine::new(vec![ProcessSpec::new(1, "a", 3).with_io(1, 2)], vec![]);

        assert!(engine.step());
        let record = engine.record(1).unwrap();
        assert_eq!(record.state(), ProcessState::Waiting);
        assert_eq!(record.remaining_io(), 2);

        assert!(engine.step());
        assert_eq!(engine.record(1).map(|r| r.remaining_io()), Some(1));

        assert!(engine.step());
        assert_eq!(engine.record(1).map(|r| r.state()), Some(ProcessState::Ready));
        assert_eq!(engine.ready().snapshot(), vec![1]);
    }

    #[test]
    fn test_woken_process_queues_behind_earlier_ready() {
        let mut engine = SchedulerEngine::new(
            vec![
                ProcessSpec::new(1, "io", 2).with_io(1, 1),
                ProcessSpec::new(2, "cpu", 3),
            ],
            vec![],
        );

        // tick 0: 1 runs and blocks; tick 1: 2 runs while 1 drains its I/O
        engine.step();
        engine.step();
        assert_eq!(engine.running(), Some(2));
        assert_eq!(engine.ready().snapshot(), vec![1]);

        let outcome = engine.run();
        assert_eq!(outcome.completion_order, vec![2, 1]);
        assert_eq!(outcome.result(2).map(|r| r.completion_tick), Some(4));
        assert_eq!(outcome.result(1).map(|r| r.completion_tick), Some(5));
    }

    #[test]
    fn test_kill_waiting_process() {
        let outcome = SchedulerEngine::new(
            vec![
                ProcessSpec::new(1, "io", 4).with_io(1, 5),
                ProcessSpec::new(2, "cpu", 2),
            ],
            vec![KillSpec::new(1, 2)],
        )
        .run();

        let killed = outcome.result(1).unwrap();
        assert!(killed.terminated_by_kill);
        assert_eq!(killed.completion_tick, 2);
        assert_eq!(outcome.result(2).map(|r| r.completion_tick), Some(3));
        assert_eq!(outcome.completion_order, vec![1, 2]);
        assert_eq!(outcome.final_tick, 3);
    }

    #[test]
    fn test_kill_ready_process_before_dispatch() {
        let outcome = SchedulerEngine::new(
            vec![ProcessSpec::new(1, "a", 2), ProcessSpec::new(2, "b", 2)],
            vec![KillSpec::new(2, 0)],
        )
        .run();

        assert_eq!(outcome.completion_order, vec![2, 1]);
        assert_eq!(outcome.result(1).map(|r| r.completion_tick), Some(2));
        assert_eq!(outcome.result(2).and_then(|r| r.killed_at_tick), Some(0));
    }

    #[test]
    fn test_killed_slot_dispatches_next_same_tick() {
        let outcome = SchedulerEngine::new(
            vec![ProcessSpec::new(1, "a", 5), ProcessSpec::new(2, "b", 2)],
            vec![KillSpec::new(1, 1)],
        )
        .run();

        assert_eq!(outcome.timeline, vec![Some(1), Some(2), Some(2)]);
        assert_eq!(outcome.result(2).map(|r| r.completion_tick), Some(3));
    }

    #[test]
    fn test_kill_after_completion_ignored() {
        let outcome = SchedulerEngine::new(
            vec![ProcessSpec::new(1, "a", 1), ProcessSpec::new(2, "b", 3)],
            vec![KillSpec::new(1, 2)],
        )
        .run();

        assert!(!outcome.result(1).unwrap().terminated_by_kill);
        assert_eq!(outcome.stats.kills_ignored, 1);
    }

    #[test]
    fn test_kill_past_end_never_fires() {
        let outcome =
            SchedulerEngine::new(vec![ProcessSpec::new(1, "a", 1)], vec![KillSpec::new(1, 50)])
                .run();
        assert_eq!(outcome.stats.kills_unfired, 1);
        assert_eq!(outcome.stats.kills_applied, 0);
    }

    #[test]
    fn test_step_after_finish_is_noop() {
        let mut engine = SchedulerEngine::new(vec![ProcessSpec::new(1, "a", 1)], vec![]);
        assert!(engine.step());
        assert!(engine.is_finished());
        assert!(!engine.step());
        assert_eq!(engine.tick(), 1);
    }
}
