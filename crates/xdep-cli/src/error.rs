//! Error types for xdep-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from xdep-extensions
    #[error(transparent)]
    Extensions(#[from] xdep_extensions::Error),

    /// Error from xdep-fs
    #[error(transparent)]
    Fs(#[from] xdep_fs::Error),

    /// Invalid coordinates given on the command line
    #[error(transparent)]
    Coords(#[from] xdep_coords::Error),

    /// JSON rendering error
    #[error("failed to render JSON: {0}")]
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
