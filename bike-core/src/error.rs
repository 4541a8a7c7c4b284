use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain or parse a dataset. Terminal for a render pass; no
/// partial dashboard is shown.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset at {location} is unreachable: {reason}")]
    Unreachable { location: String, reason: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {reason}")]
    Malformed { row: usize, reason: String },
}
