//! CLI-specific error types and mappings.
//!
//! This module provides error types for the CLI adapter and mappings
//! from `CoreError` to exit codes and user-facing messages.

use mealmate_core::{CoreError, DishValidationError, RepositoryError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The requested dish doesn't exist.
    #[error("No dish with ID {0}. Use 'mealmate list' to see available dishes.")]
    NotFound(i64),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::NotFound(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(RepositoryError::NotFound(msg)) => Self::Core(msg),
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Validation(invalid) => Self::Arguments(invalid.to_string()),
            CoreError::Path(path_err) => Self::Config(path_err.to_string()),
            CoreError::Internal(msg) => Self::Core(msg),
        }
    }
}

impl From<DishValidationError> for CliError {
    fn from(err: DishValidationError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Exit code for an error bubbled up to `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CliError>().map_or(1, CliError::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_exit_codes() {
        let invalid: CliError = CoreError::from(DishValidationError::MissingName).into();
        assert_eq!(invalid.exit_code(), 2);

        let storage: CliError =
            CoreError::from(RepositoryError::Storage("locked".to_string())).into();
        assert_eq!(storage.exit_code(), 73);
        assert!(storage.to_string().contains("locked"));
    }

    #[test]
    fn test_exit_code_for_foreign_errors_is_general() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_code_for(&err), 1);

        let err: anyhow::Error = CliError::NotFound(3).into();
        assert_eq!(exit_code_for(&err), 66);
    }
}
