/*!
 * Process Queues
 * FIFO containers of pids for the ready, waiting and finished lines
 */

use crate::core::types::Pid;
use std::collections::VecDeque;

/// Insertion-ordered queue of pids
///
/// Arrival order is the only ordering key: the head is the process that
/// joined earliest.
#[derive(Debug, Clone, Default)]
pub struct ProcessQueue {
    entries: VecDeque<Pid>,
}

impl ProcessQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Append at the tail
    #[inline]
    pub fn enqueue(&mut self, pid: Pid) {
        self.entries.push_back(pid);
    }

    /// Remove and return the head
    #[inline]
    pub fn dequeue_front(&mut self) -> Option<Pid> {
        self.entries.pop_front()
    }

    /// Remove the first entry for `pid` wherever it sits, keeping the rest in order
    pub fn remove_by_id(&mut self, pid: Pid) -> Option<Pid> {
        let pos = self.entries.iter().position(|&p| p == pid)?;
        self.entries.remove(pos)
    }

    #[inline]
    pub fn front(&self) -> Option<Pid> {
        self.entries.front().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate head to tail
    pub fn iter(&self) -> impl Iterator<Item = Pid> + '_ {
        self.entries.iter().copied()
    }

    /// Copy of the current members, head to tail
    pub fn snapshot(&self) -> Vec<Pid> {
        self.entries.iter().copied().collect()
    }
}
