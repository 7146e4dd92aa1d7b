// Raw values as read from host sources, before any arithmetic

/// Untrimmed text of the cgroup v2 memory counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCounters {
    pub current: String,
    pub max: String,
}

/// Block statistics of one mounted filesystem (statfs).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FsStats {
    pub blocks: u64,
    pub block_size: u64,
    pub free_blocks: u64,
}
