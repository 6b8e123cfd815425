/*!
 * Scheduler Invariant Tests
 * Property tests over randomly generated workloads
 */

use fcfs_sim::{KillSpec, Pid, ProcessSpec, ProcessState, SchedulerEngine, Tick};
use proptest::prelude::*;
use std::collections::HashMap;

const MAX_STEPS: usize = 10_000;

/// (burst, optional io (start, duration)) per process, pids assigned 1..=n
fn process_specs() -> impl Strategy<Value = Vec<ProcessSpec>> {
    prop::collection::vec(
        (1u64..8, prop::option::of((0u64..8, 0u64..6))),
        0..8,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, (burst, io))| {
                let spec = ProcessSpec::new(idx as Pid + 1, format!("p{}", idx + 1), burst);
                match io {
                    Some((start, duration)) => spec.with_io(start, duration),
                    None => spec,
                }
            })
            .collect()
    })
}

fn kill_specs() -> impl Strategy<Value = Vec<KillSpec>> {
    prop::collection::vec((1u32..11, 0u64..40), 0..6)
        .prop_map(|kills| kills.into_iter().map(|(pid, tick)| KillSpec::new(pid, tick)).collect())
}

proptest! {
    #[test]
    fn prop_every_process_finishes_once(processes in process_specs(), kills in kill_specs()) {
        let count = processes.len();
        let outcome = SchedulerEngine::new(processes, kills).run();

        prop_assert_eq!(outcome.results.len(), count);
        let mut order = outcome.completion_order.clone();
        order.sort_unstable();
        let expected: Vec<Pid> = (1..=count as Pid).collect();
        prop_assert_eq!(order, expected);
    }

    #[test]
    fn prop_tick_boundary_invariants(processes in process_specs(), kills in kill_specs()) {
        let pids: Vec<Pid> = processes.iter().map(|p| p.pid).collect();
        let mut engine = SchedulerEngine::new(processes, kills);
        let mut last_remaining: HashMap<Pid, Tick> = HashMap::new();
        let mut steps = 0;

        while engine.step() {
            steps += 1;
            prop_assert!(steps < MAX_STEPS, "simulation did not terminate");

            let mut running = 0;
            for &pid in &pids {
                let record = engine.record(pid).unwrap();
                if record.state() == ProcessState::Running {
                    running += 1;
                    prop_assert_eq!(engine.running(), Some(pid));
                }
                if !record.is_terminal() {
                    prop_assert_eq!(
                        record.remaining_cpu_burst() + record.executed_cpu_time(),
                        record.total_cpu_burst()
                    );
                }
                if let Some(&previous) = last_remaining.get(&pid) {
                    prop_assert!(record.remaining_cpu_burst() <= previous);
                }
                last_remaining.insert(pid, record.remaining_cpu_burst());
            }
            prop_assert!(running <= 1);
        }

        for &pid in &pids {
            let record = engine.record(pid).unwrap();
            prop_assert!(record.is_terminal());
            if record.terminated_by_kill() {
                prop_assert!(record.remaining_cpu_burst() > 0);
                prop_assert_eq!(record.completion_tick(), record.killed_at_tick());
            } else {
                prop_assert_eq!(record.remaining_cpu_burst(), 0);
            }
        }
    }

    #[test]
    fn prop_completed_waiting_non_negative(processes in process_specs(), kills in kill_specs()) {
        let outcome = SchedulerEngine::new(processes, kills).run();
        for result in outcome.results.iter().filter(|r| !r.terminated_by_kill) {
            prop_assert!(result.completion_tick >= result.cpu_burst);
            prop_assert_eq!(result.waiting(), Some(result.completion_tick - result.cpu_burst));
        }
    }

    #[test]
    fn prop_cpu_only_is_registration_order(bursts in prop::collection::vec(1u64..10, 1..10)) {
        let processes: Vec<ProcessSpec> = bursts
            .iter()
            .enumerate()
            .map(|(idx, &burst)| ProcessSpec::new(idx as Pid + 1, "job", burst))
            .collect();
        let outcome = SchedulerEngine::new(processes, vec![]).run();

        let expected: Vec<Pid> = (1..=bursts.len() as Pid).collect();
        prop_assert_eq!(&outcome.completion_order, &expected);

        let mut elapsed = 0;
        for (result, burst) in outcome.results.iter().zip(&bursts) {
            elapsed += burst;
            prop_assert_eq!(result.completion_tick, elapsed);
        }
        prop_assert_eq!(outcome.stats.idle_ticks, 0);
    }

    #[test]
    fn prop_duplicate_kills_are_idempotent(processes in process_specs(), kills in kill_specs()) {
        let doubled: Vec<KillSpec> = kills.iter().flat_map(|&k| [k, k]).collect();

        let once = SchedulerEngine::new(processes.clone(), kills).run();
        let twice = SchedulerEngine::new(processes, doubled).run();

        prop_assert_eq!(once.results, twice.results);
        prop_assert_eq!(once.completion_order, twice.completion_order);
        prop_assert_eq!(once.timeline, twice.timeline);
    }
}
