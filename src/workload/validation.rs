/*!
 * Workload Validation
 * Checks run before any specification reaches the engine
 */

use crate::core::errors::SimError;
use crate::core::types::{Pid, SimResult};
use crate::process::types::ProcessSpec;
use ahash::RandomState;
use std::collections::HashSet;

/// Validate a single process specification
pub(super) fn validate_process(spec: &ProcessSpec) -> SimResult<()> {
    if spec.pid == 0 {
        return Err(SimError::invalid_process(spec.pid, "process id must be positive"));
    }

    if spec.name.is_blank() {
        return Err(SimError::invalid_process(spec.pid, "name cannot be empty"));
    }

    if spec.cpu_burst == 0 {
        return Err(SimError::invalid_process(spec.pid, "CPU burst must be positive"));
    }

    Ok(())
}

/// Validate every process and reject the first repeated pid
pub(super) fn validate_processes(processes: &[ProcessSpec]) -> SimResult<()> {
    let mut seen: HashSet<Pid, RandomState> =
        HashSet::with_capacity_and_hasher(processes.len(), RandomState::new());

    for spec in processes {
        validate_process(spec)?;
        if !seen.insert(spec.pid) {
            return Err(SimError::DuplicatePid(spec.pid));
        }
    }

    Ok(())
}
