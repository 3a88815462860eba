//! Error types for devtools-catalog

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalog format for {path} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Duplicate tool id: {id}")]
    DuplicateTool { id: String },

    #[error("Duplicate category id: {id}")]
    DuplicateCategory { id: String },

    #[error("Tool at position {index} has an empty id")]
    EmptyToolId { index: usize },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },
}

impl Error {
    /// Wrap an I/O error with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
