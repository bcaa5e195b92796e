//! Service error types.

use recetario_store::StoreError;
use recetario_types::ErrorCode;
use thiserror::Error;

/// Errors surfaced by write-style recipe operations.
///
/// Store faults never escape as raw panics or opaque boxes: they are
/// captured here with their message intact so callers can show an
/// actionable error. Read-style operations do not return this type at
/// all (see the module docs on the lossy empty-read behavior).
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The store rejected or could not complete the operation.
    #[error("store operation failed: {0}")]
    Store(#[from] StoreError),

    /// A record could not be serialized for writing.
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ErrorCode for ServiceError {
    fn code(&self) -> &'static str {
        match self {
            Self::Store(_) => "RECIPES_STORE",
            Self::Serialization(_) => "RECIPES_SERIALIZATION",
        }
    }

    fn is_recoverable(&self) -> bool {
        match self {
            Self::Store(e) => e.is_recoverable(),
            Self::Serialization(_) => false,
        }
    }
}
