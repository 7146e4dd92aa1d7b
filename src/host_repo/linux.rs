// Linux-specific helpers: plain-text /proc and cgroup files, statfs(2).

use std::path::Path;

use crate::error::ProbeError;
use crate::models::FsStats;

/// Read a whole /proc or /sys file as text, untrimmed.
pub(super) fn read_text(path: &Path) -> Result<String, ProbeError> {
    std::fs::read_to_string(path).map_err(|e| ProbeError::SourceUnavailable {
        path: path.display().to_string(),
        source: e,
    })
}

/// Total, size and free count of the blocks of the filesystem holding `path`.
pub(super) fn statfs_blocks(path: &Path) -> Result<FsStats, ProbeError> {
    let stat = nix::sys::statfs::statfs(path).map_err(|errno| ProbeError::SourceUnavailable {
        path: path.display().to_string(),
        source: errno.into(),
    })?;
    // f_bsize is a signed word on glibc.
    let block_size = u64::try_from(stat.block_size()).map_err(|_| ProbeError::MalformedData {
        source_name: "statfs",
        detail: format!("negative block size {} for {}", stat.block_size(), path.display()),
    })?;
    Ok(FsStats {
        blocks: stat.blocks().into(),
        block_size,
        free_blocks: stat.blocks_free().into(),
    })
}
