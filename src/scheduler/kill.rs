/*!
 * Kill Schedule
 * Pending forced-termination events keyed by trigger tick
 */

use crate::core::types::{Pid, Tick};
use crate::process::types::KillSpec;

/// Events not yet fired
///
/// Every event fires at most once: it is dropped from the schedule on its
/// trigger tick whether or not its target still exists.
#[derive(Debug, Clone, Default)]
pub struct KillSchedule {
    pending: Vec<KillSpec>,
}

impl KillSchedule {
    /// Remove every event due at `tick` and return their targets in schedule order
    pub fn fire_and_consume(&mut self, tick: Tick) -> Vec<Pid> {
        let mut fired = Vec::new();
        self.pending.retain(|event| {
            if event.tick == tick {
                fired.push(event.pid);
                false
            } else {
                true
            }
        });
        fired
    }

    /// Events that have not fired yet
    pub fn pending(&self) -> &[KillSpec] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<KillSpec> for KillSchedule {
    fn from_iter<I: IntoIterator<Item = KillSpec>>(iter: I) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}
