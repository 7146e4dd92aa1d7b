// CPU load indicator from the 1-minute load average

use crate::error::ProbeError;
use crate::host_repo::HostRepo;

/// Factor applied to the raw 1-minute load average. The result is a scaled
/// load figure, not a utilization percentage; clients depend on this exact scale.
pub const LOAD_SCALE: f64 = 10.0;

/// Returns `loadavg_1m * 10`.
pub fn read_cpu_usage(host: &dyn HostRepo) -> Result<f64, ProbeError> {
    let text = host.read_load_average()?;
    let load = parse_load_average(&text)?;
    Ok(load * LOAD_SCALE)
}

/// First whitespace-separated field of the load-average text.
pub(crate) fn parse_load_average(text: &str) -> Result<f64, ProbeError> {
    let first = text
        .split_whitespace()
        .next()
        .ok_or_else(|| ProbeError::MalformedData {
            source_name: "load average",
            detail: "no fields".into(),
        })?;
    first.parse::<f64>().map_err(|e| ProbeError::MalformedData {
        source_name: "load average",
        detail: format!("'{}': {}", first, e),
    })
}
