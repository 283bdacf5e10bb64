use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdiomasError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to persist preference to {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid locale tag: {0}")]
    Locale(String),
}

pub type Result<T> = std::result::Result<T, IdiomasError>;
