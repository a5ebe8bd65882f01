//! Dataset loading errors.

use std::path::PathBuf;

use crate::domain::InvalidRoute;

/// Errors that abort loading a whole dataset file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array
    #[error("{path} is not a JSON array of records: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a single dataset entry was dropped.
///
/// These are logged at load time and never surface to callers.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// Entry is not an object of the expected shape
    #[error("malformed entry: {0}")]
    Shape(#[from] serde_json::Error),

    /// Entry has no `route` field
    #[error("missing route")]
    MissingRoute,

    /// Route does not split into two endpoints
    #[error(transparent)]
    Route(#[from] InvalidRoute),
}
