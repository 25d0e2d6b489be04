use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::DomainError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("catalog lock poisoned")]
    Poisoned,

    #[error("failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixtures: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid fixture: {0}")]
    Fixture(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
