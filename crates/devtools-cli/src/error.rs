//! Error types for devtools-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from devtools-catalog
    #[error(transparent)]
    Catalog(#[from] devtools_catalog::Error),

    /// Error from devtools-highlight
    #[error(transparent)]
    Highlight(#[from] devtools_highlight::Error),

    /// Error from devtools-kit
    #[error(transparent)]
    Kit(#[from] devtools_kit::KitError),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
