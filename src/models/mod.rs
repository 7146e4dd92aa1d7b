// Wire snapshot and raw host-source models

mod host;
mod snapshot;

pub use host::{FsStats, MemoryCounters};
pub use snapshot::Snapshot;
