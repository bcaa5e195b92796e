//! Store error types.

use recetario_types::ErrorCode;
use thiserror::Error;

/// Errors that can occur during remote store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with a non-success HTTP status.
    #[error("store returned status {status} for '{path}'")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Slash-joined path of the failed operation.
        path: String,
    },

    /// Payload could not be serialized or deserialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A path was rejected by the backend.
    #[error("invalid path: {0}")]
    InvalidPath(String),
}

impl StoreError {
    /// Creates a Status error.
    pub fn status(status: u16, path: impl Into<String>) -> Self {
        Self::Status {
            status,
            path: path.into(),
        }
    }

    /// Creates an InvalidPath error.
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath(path.into())
    }
}

impl ErrorCode for StoreError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "STORE_TRANSPORT",
            Self::Status { .. } => "STORE_STATUS",
            Self::Serialization(_) => "STORE_SERIALIZATION",
            Self::InvalidPath(_) => "STORE_INVALID_PATH",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            // Network faults and server-side statuses may clear on retry.
            Self::Transport(_) | Self::Status { .. } => true,
            Self::Serialization(_) | Self::InvalidPath(_) => false,
        }
    }
}
