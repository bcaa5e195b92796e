//! Unified error interface.
//!
//! Every error enum in the workspace implements [`ErrorCode`]: a stable,
//! machine-readable code plus a recoverability hint. Codes are
//! UPPER_SNAKE_CASE with a crate prefix (`STORE_`, `RECIPES_`,
//! `MEALDB_`, `CONFIG_`) and do not change once defined.
//!
//! # Example
//!
//! ```
//! use recetario_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum FetchError {
//!     Timeout,
//!     BadPayload,
//! }
//!
//! impl ErrorCode for FetchError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::Timeout => "FETCH_TIMEOUT",
//!             Self::BadPayload => "FETCH_BAD_PAYLOAD",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::Timeout)
//!     }
//! }
//!
//! assert_eq!(FetchError::Timeout.code(), "FETCH_TIMEOUT");
//! assert!(FetchError::Timeout.is_recoverable());
//! ```

/// Machine-readable error classification.
///
/// An error is *recoverable* when retrying may succeed or the user can
/// take corrective action (transient transport faults, timeouts).
/// Invalid input and logic errors are not.
pub trait ErrorCode {
    /// Returns the stable UPPER_SNAKE_CASE code for this error.
    fn code(&self) -> &'static str;

    /// Returns whether retrying or user action may resolve this error.
    fn is_recoverable(&self) -> bool;
}

/// Asserts that an error's code is well-formed and carries the expected
/// prefix. Intended for use in tests.
///
/// # Panics
///
/// Panics with a descriptive message when the code is empty, not
/// UPPER_SNAKE_CASE, or lacks `expected_prefix`.
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "error code must not be empty");
    assert!(
        code.starts_with(expected_prefix),
        "error code '{code}' must start with prefix '{expected_prefix}'"
    );
    assert!(
        is_upper_snake_case(code),
        "error code '{code}' must be UPPER_SNAKE_CASE"
    );
}

/// Asserts [`assert_error_code`] over every variant in `errors`.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

fn is_upper_snake_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('_')
        && !s.ends_with('_')
        && !s.contains("__")
        && s.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}
