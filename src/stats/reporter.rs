// Failure reporting for metric reads

use super::Metric;
use crate::error::ProbeError;

/// Receives every reader failure before the collector substitutes `0.0`.
pub trait Reporter: Send + Sync {
    fn report(&self, metric: Metric, error: &ProbeError);
}

/// Logs reader failures at WARN.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, metric: Metric, error: &ProbeError) {
        tracing::warn!(metric = %metric, error = %error, "metric read failed, reporting 0.0");
    }
}
