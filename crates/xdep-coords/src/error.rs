//! Error types for xdep-coords

/// Result type for coordinate parsing
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing coordinate and key strings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid artifact coordinates '{input}': {reason}")]
    InvalidCoords { input: String, reason: String },

    #[error("invalid artifact key '{input}': {reason}")]
    InvalidKey { input: String, reason: String },
}

impl Error {
    pub(crate) fn coords(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidCoords {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn key(input: &str, reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
