//! Festival data loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading festival definition data.
///
/// Rule evaluation itself never fails; only the I/O and top-level JSON shape
/// of a data file can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FestivalError {
    #[error("cannot read festival data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("festival data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed but is not an array of festival objects.
    #[error("festival data must be a JSON array, found {0}")]
    NotAnArray(&'static str),
}
