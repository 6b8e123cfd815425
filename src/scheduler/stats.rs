/*!
 * Simulation Statistics
 * Counters maintained by the tick loop
 */

use crate::core::serde::is_zero_u64;
use crate::core::types::Tick;
use serde::{Deserialize, Serialize};

/// Counters for one simulation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationStats {
    pub ticks: Tick,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub dispatches: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub io_transitions: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub completions: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub kills_applied: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub kills_ignored: u64,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub kills_unfired: u64,
    pub busy_ticks: Tick,
    pub idle_ticks: Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_counters_skipped() {
        let json = serde_json::to_string(&SimulationStats::default()).unwrap();
        assert!(!json.contains("kills_applied"));
        assert!(json.contains("\"ticks\":0"));
    }
}
