// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeoError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid TOML in {path}: {source}")]
    TomlParse {
        source: toml::de::Error,
        path: PathBuf,
    },

    #[error("Failed to serialize post store: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Missing title")]
    MissingTitle,

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Post {id} belongs to another shop")]
    ShopMismatch { id: String },
}

pub type Result<T> = std::result::Result<T, SeoError>;

impl SeoError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        SeoError::Io {
            source,
            path: path.into(),
        }
    }
}

