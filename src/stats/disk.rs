// Disk usage of a mounted filesystem from statfs block counts

use std::path::Path;

use crate::error::ProbeError;
use crate::host_repo::HostRepo;
use crate::models::FsStats;

/// Returns used blocks of the filesystem at `mount` as a percentage of all blocks.
pub fn read_disk_usage(host: &dyn HostRepo, mount: &Path) -> Result<f64, ProbeError> {
    let stats = host.read_fs_stats(mount)?;
    Ok(used_percent(&stats))
}

pub(crate) fn used_percent(stats: &FsStats) -> f64 {
    let block_size = stats.block_size as f64;
    let total = stats.blocks as f64 * block_size;
    if total == 0.0 {
        return 0.0;
    }
    let used = stats.blocks.saturating_sub(stats.free_blocks) as f64 * block_size;
    (used / total) * 100.0
}
