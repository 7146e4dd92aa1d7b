// Shared test helpers: fixture host sources and a recording reporter
#![allow(dead_code)]

use statprobe::error::ProbeError;
use statprobe::host_repo::HostRepo;
use statprobe::models::{FsStats, MemoryCounters};
use statprobe::stats::{Metric, Reporter, StatsCollector};
use std::path::Path;
use std::sync::{Arc, Mutex};

pub const LOADAVG: &str = "0.52 0.41 0.39 2/733 2285\n";
pub const MEMORY_CURRENT: &str = "104857600\n";
pub const MEMORY_MAX: &str = "1073741824\n";

/// In-memory host; `None` makes that source unreadable.
#[derive(Debug, Clone, Default)]
pub struct FakeHost {
    pub load_average: Option<String>,
    pub memory: Option<MemoryCounters>,
    pub fs_stats: Option<FsStats>,
}

impl FakeHost {
    /// cpu 5.2, ram 9.765625, disk 75.0
    pub fn healthy() -> Self {
        Self {
            load_average: Some(LOADAVG.into()),
            memory: Some(MemoryCounters {
                current: MEMORY_CURRENT.into(),
                max: MEMORY_MAX.into(),
            }),
            fs_stats: Some(FsStats {
                blocks: 1000,
                block_size: 4096,
                free_blocks: 250,
            }),
        }
    }
}

fn missing(path: &str) -> ProbeError {
    ProbeError::SourceUnavailable {
        path: path.into(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
    }
}

impl HostRepo for FakeHost {
    fn read_load_average(&self) -> Result<String, ProbeError> {
        self.load_average
            .clone()
            .ok_or_else(|| missing("/proc/loadavg"))
    }

    fn read_memory_counters(&self) -> Result<MemoryCounters, ProbeError> {
        self.memory
            .clone()
            .ok_or_else(|| missing("/sys/fs/cgroup/memory.max"))
    }

    fn read_fs_stats(&self, path: &Path) -> Result<FsStats, ProbeError> {
        self.fs_stats
            .ok_or_else(|| missing(&path.display().to_string()))
    }
}

/// Keeps every report so tests can assert on what was (not) reported.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    reports: Mutex<Vec<(Metric, String)>>,
}

impl RecordingReporter {
    pub fn reports(&self) -> Vec<(Metric, String)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn metrics(&self) -> Vec<Metric> {
        self.reports().into_iter().map(|(m, _)| m).collect()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, metric: Metric, error: &ProbeError) {
        self.reports
            .lock()
            .unwrap()
            .push((metric, error.to_string()));
    }
}

pub fn collector(host: FakeHost) -> (StatsCollector, Arc<RecordingReporter>) {
    let reporter = Arc::new(RecordingReporter::default());
    let collector = StatsCollector::new(Arc::new(host), reporter.clone());
    (collector, reporter)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
