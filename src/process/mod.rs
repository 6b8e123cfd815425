/*!
 * Process Module
 * Process specifications, per-process state, and the pid table
 */

pub mod record;
pub mod table;
pub mod types;

// Re-export for convenience
pub use record::{CpuOutcome, ProcessRecord};
pub use table::ProcessTable;
pub use types::{KillSpec, ProcessSpec, ProcessState};
