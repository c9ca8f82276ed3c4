//! Error types for the operations layer.

use std::path::PathBuf;

use mashup_engine::GenerationFailed;
use thiserror::Error;
use uuid::Uuid;

/// Result type for operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur during operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// Idea generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationFailed),

    /// Generation did not finish within the configured timeout.
    #[error("Idea generation timed out after {secs}s")]
    GenerationTimeout { secs: u64 },

    /// The idea doesn't exist or belongs to another user.
    #[error("Idea {id} not found")]
    IdeaNotFound { id: Uuid },

    /// The request is malformed.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No credentials were supplied.
    #[error("Authentication required")]
    AuthRequired,

    /// The supplied token is unknown.
    #[error("Invalid authentication token")]
    InvalidToken,

    /// A store file couldn't be parsed.
    #[error("Corrupt store file {path}: {message}")]
    CorruptStore { path: PathBuf, message: String },

    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl OpsError {
    /// Create an invalid request error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Whether the error comes from idea generation (including timeouts).
    pub fn is_generation(&self) -> bool {
        matches!(
            self,
            OpsError::Generation(_) | OpsError::GenerationTimeout { .. }
        )
    }
}
