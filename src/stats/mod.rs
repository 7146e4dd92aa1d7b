// Per-request stats collection: three independent readers, one fallback policy

mod cpu;
mod disk;
mod memory;
mod reporter;

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DEFAULT_DISK_MOUNT;
use crate::error::ProbeError;
use crate::host_repo::HostRepo;
use crate::models::Snapshot;

pub use cpu::{LOAD_SCALE, read_cpu_usage};
pub use disk::read_disk_usage;
pub use memory::read_ram_usage;
pub use reporter::{Reporter, TracingReporter};

/// Which reader a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Cpu,
    Memory,
    Disk,
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu",
            Metric::Memory => "memory",
            Metric::Disk => "disk",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a [`Snapshot`] from fresh host reads. Cheap to clone; holds no
/// per-request state.
#[derive(Clone)]
pub struct StatsCollector {
    host: Arc<dyn HostRepo>,
    reporter: Arc<dyn Reporter>,
    disk_mount: PathBuf,
}

impl StatsCollector {
    pub fn new(host: Arc<dyn HostRepo>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            host,
            reporter,
            disk_mount: PathBuf::from(DEFAULT_DISK_MOUNT),
        }
    }

    /// Mount point measured by the disk reader (default `/`).
    pub fn with_disk_mount(mut self, mount: impl Into<PathBuf>) -> Self {
        self.disk_mount = mount.into();
        self
    }

    /// Reads all three metrics. Never fails: a failed metric is reported and
    /// comes back as `0.0` without affecting the other two.
    pub fn collect(&self) -> Snapshot {
        let host = self.host.as_ref();
        Snapshot {
            cpu_usage: self.or_zero(Metric::Cpu, read_cpu_usage(host)),
            ram_usage: self.or_zero(Metric::Memory, read_ram_usage(host)),
            disk_usage: self.or_zero(Metric::Disk, read_disk_usage(host, &self.disk_mount)),
        }
    }

    /// [`collect`](Self::collect) on the blocking pool; host reads are blocking syscalls.
    pub async fn collect_blocking(&self) -> Snapshot {
        let collector = self.clone();
        match tokio::task::spawn_blocking(move || collector.collect()).await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::error!(error = %e, "stats task join failed, serving zeros");
                Snapshot::default()
            }
        }
    }

    fn or_zero(&self, metric: Metric, result: Result<f64, ProbeError>) -> f64 {
        result.unwrap_or_else(|e| {
            self.reporter.report(metric, &e);
            0.0
        })
    }
}
