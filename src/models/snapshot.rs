// Snapshot served by GET /stats

use serde::{Deserialize, Serialize};

/// One reading of host utilization, built fresh for every request and never mutated.
/// Field names are the wire keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// 1-minute load average times 10. Not a percentage.
    pub cpu_usage: f64,
    /// cgroup `memory.current` as a percentage of `memory.max`. Unclamped, may exceed 100.
    pub ram_usage: f64,
    /// Used blocks of the configured mount as a percentage of all blocks.
    pub disk_usage: f64,
}
