// Errors raised by host sources and metric readers

/// Why a metric could not be read. Never crosses the HTTP boundary: the stats
/// collector reports it and substitutes `0.0` for the affected metric.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The source could not be read (missing file, permissions, statfs errno).
    #[error("failed to read {path}: {source}")]
    SourceUnavailable {
        path: String,
        source: std::io::Error,
    },

    /// The source was read but its content is not what the reader expects.
    #[error("malformed {source_name}: {detail}")]
    MalformedData {
        source_name: &'static str,
        detail: String,
    },
}
