//! Error type for the facade.

use std::path::PathBuf;

use panchang_config::ConfigError;
use panchang_day::DayError;
use panchang_festival::FestivalError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PanchangError {
    #[error(transparent)]
    Day(#[from] DayError),
    #[error(transparent)]
    Festival(#[from] FestivalError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("cannot read day inputs {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid day inputs: {0}")]
    Json(#[from] serde_json::Error),
}
