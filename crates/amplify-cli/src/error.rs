//! CLI-specific error types and mappings.
//!
//! Maps model and settings errors to exit codes and user-facing messages.

use amplify_model::{ModelError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Anything without a more specific category.
    #[error("{0}")]
    General(String),

    /// Unknown shape or operation, malformed JSON, missing path parameter.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The document decoded but violates its shape's constraints.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// - 0: Success
    /// - 1: General error
    /// - 2: Invalid input or configuration
    /// - 3: Validation failed
    /// - 4: IO error
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::General(_) => 1,
            Self::InvalidInput(_) | Self::Config(_) => 2,
            Self::Validation(_) => 3,
            Self::Io(_) => 4,
        }
    }
}

impl From<ModelError> for CliError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::ConstraintViolations { .. } => Self::Validation(err.to_string()),
            ModelError::UnknownShape { .. }
            | ModelError::UnknownOperation { .. }
            | ModelError::MissingPathParameter { .. }
            | ModelError::UnknownEnumValue { .. }
            | ModelError::Json(_) => Self::InvalidInput(err.to_string()),
            ModelError::DuplicateEntryKey { .. } => Self::General(err.to_string()),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::General("x".into()).exit_code(), 1);
        assert_eq!(CliError::InvalidInput("x".into()).exit_code(), 2);
        assert_eq!(CliError::Config("x".into()).exit_code(), 2);
        assert_eq!(CliError::Validation("x".into()).exit_code(), 3);
        assert_eq!(CliError::Io("x".into()).exit_code(), 4);
    }

    #[test]
    fn test_model_error_mapping() {
        let err = CliError::from(ModelError::UnknownShape {
            name: "Nope".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("Nope"));

        let err = CliError::from(ModelError::ConstraintViolations {
            shape: "App",
            violations: Vec::new(),
        });
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_io_error_mapping() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.json");
        assert_eq!(CliError::from(io).exit_code(), 4);
    }
}
