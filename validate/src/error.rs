use std::path::PathBuf;

use thiserror::Error;
use threatline_core::ConfigError;
use threatline_types::Edition;

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not a valid fight file: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} is not a valid settings file: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("rule tables failed to build: {0}")]
    Config(#[from] ConfigError),

    #[error("{count} fight(s) had no supported configuration")]
    Unsupported { count: usize },

    #[error("edition {0:?} is not registered")]
    UnknownEdition(Edition),

    #[error("{case} metadata matches {editions:?}")]
    Ambiguous {
        case: &'static str,
        editions: Vec<Edition>,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
