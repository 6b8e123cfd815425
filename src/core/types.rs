/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// One discrete unit of simulated time
pub type Tick = u64;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, super::errors::SimError>;
