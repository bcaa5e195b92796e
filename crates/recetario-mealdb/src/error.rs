//! MealDB client errors.

use recetario_types::ErrorCode;
use thiserror::Error;

/// Errors from the TheMealDB client.
#[derive(Debug, Error)]
pub enum MealDbError {
    /// Transport-level failure reaching the API.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success HTTP status.
    #[error("meal API returned status {0}")]
    Status(u16),
}

impl ErrorCode for MealDbError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "MEALDB_TRANSPORT",
            Self::Status(_) => "MEALDB_STATUS",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Both are transient conditions of a public, best-effort API.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recetario_types::assert_error_code;

    #[test]
    fn codes_are_valid() {
        assert_error_code(&MealDbError::Status(500), "MEALDB_");
        assert!(MealDbError::Status(500).is_recoverable());
    }
}
