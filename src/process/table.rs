/*!
 * Process Table
 * Pid-indexed ownership of every process record
 */

use super::record::ProcessRecord;
use crate::core::types::Pid;
use ahash::RandomState;
use std::collections::HashMap;

/// Owns all records for one simulation run
///
/// Queues refer to records by pid; the table is the only place a record lives.
/// Records are never removed.
#[derive(Debug, Default)]
pub struct ProcessTable {
    records: HashMap<Pid, ProcessRecord, RandomState>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Insert a record; returns false and leaves the table unchanged if the pid exists
    pub fn insert(&mut self, record: ProcessRecord) -> bool {
        if self.records.contains_key(&record.pid()) {
            return false;
        }
        self.records.insert(record.pid(), record);
        true
    }

    #[inline]
    pub fn get(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.records.get(&pid)
    }

    #[inline]
    pub fn get_mut(&mut self, pid: Pid) -> Option<&mut ProcessRecord> {
        self.records.get_mut(&pid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
