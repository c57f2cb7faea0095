//! Network data error types.

use std::path::PathBuf;

/// Errors loading a network dataset from disk.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// A dataset file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dataset file is not valid JSON in the expected shape
    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A CSV table could not be read or a row is malformed
    #[error("failed to parse {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
