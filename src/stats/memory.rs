// Memory usage relative to the cgroup v2 limit

use crate::error::ProbeError;
use crate::host_repo::HostRepo;
use crate::models::MemoryCounters;

/// Returns `memory.current / memory.max * 100`, unclamped.
///
/// Only read failures are errors. A counter that does not parse (including
/// the literal `max` of an unlimited cgroup) counts as zero, and a zero limit
/// yields `0.0`.
pub fn read_ram_usage(host: &dyn HostRepo) -> Result<f64, ProbeError> {
    let counters = host.read_memory_counters()?;
    Ok(usage_percent(&counters))
}

pub(crate) fn usage_percent(counters: &MemoryCounters) -> f64 {
    let limit = parse_counter(&counters.max);
    let usage = parse_counter(&counters.current);
    if limit == 0.0 {
        return 0.0;
    }
    (usage / limit) * 100.0
}

fn parse_counter(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}
