// Host data sources: load average, cgroup v2 memory counters, statfs

mod linux;

use std::path::{Path, PathBuf};
use tracing::instrument;

use crate::config::SourcesConfig;
use crate::error::ProbeError;
use crate::models::{FsStats, MemoryCounters};

const MEMORY_CURRENT: &str = "memory.current";
const MEMORY_MAX: &str = "memory.max";

/// Read-only access to the host sources behind the metric readers.
///
/// Every call opens, reads and closes its source; implementations hold no
/// per-request state, so one instance is shared by all requests.
pub trait HostRepo: Send + Sync {
    /// Raw load-average text, e.g. `"0.52 0.41 0.39 2/733 2285"`.
    fn read_load_average(&self) -> Result<String, ProbeError>;

    /// Raw text of the memory usage and limit counters.
    fn read_memory_counters(&self) -> Result<MemoryCounters, ProbeError>;

    /// Block statistics of the filesystem mounted at `path`.
    fn read_fs_stats(&self, path: &Path) -> Result<FsStats, ProbeError>;
}

/// Reads `/proc/loadavg`, the cgroup v2 memory files and statfs(2).
#[derive(Debug, Clone)]
pub struct LinuxHostRepo {
    loadavg_path: PathBuf,
    cgroup_dir: PathBuf,
}

impl Default for LinuxHostRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl LinuxHostRepo {
    pub fn new() -> Self {
        Self::from_config(&SourcesConfig::default())
    }

    pub fn from_config(sources: &SourcesConfig) -> Self {
        Self {
            loadavg_path: sources.loadavg_path.clone(),
            cgroup_dir: sources.cgroup_dir.clone(),
        }
    }
}

impl HostRepo for LinuxHostRepo {
    #[instrument(skip(self), fields(repo = "host", operation = "read_load_average"))]
    fn read_load_average(&self) -> Result<String, ProbeError> {
        linux::read_text(&self.loadavg_path)
    }

    #[instrument(skip(self), fields(repo = "host", operation = "read_memory_counters"))]
    fn read_memory_counters(&self) -> Result<MemoryCounters, ProbeError> {
        // Limit first: an unreadable limit is reported as such even when usage is missing too.
        let max = linux::read_text(&self.cgroup_dir.join(MEMORY_MAX))?;
        let current = linux::read_text(&self.cgroup_dir.join(MEMORY_CURRENT))?;
        Ok(MemoryCounters { current, max })
    }

    #[instrument(skip(self), fields(repo = "host", operation = "read_fs_stats"))]
    fn read_fs_stats(&self, path: &Path) -> Result<FsStats, ProbeError> {
        linux::statfs_blocks(path)
    }
}
