//! Error types for the model layer.
//!
//! Model values never fail when a field is stored or read. These errors come
//! from the edges: map entry insertion, enum parsing, route resolution, the
//! JSON codec and strict-mode constraint enforcement.

use thiserror::Error;

use crate::constraints::ConstraintViolation;

/// Errors raised by the model layer.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A map entry was added under a key that is already present.
    #[error("Duplicated keys ({key}) are provided for {field}")]
    DuplicateEntryKey {
        /// Wire name of the map field
        field: &'static str,
        /// The key that already existed
        key: String,
    },

    /// A string did not match any value of a service enumeration.
    #[error("Unknown {kind} value: {value}")]
    UnknownEnumValue {
        /// Enumeration type name
        kind: &'static str,
        /// The rejected value
        value: String,
    },

    /// Strict validation found constraint violations.
    #[error("{shape} violates {} constraint(s); first: {}", .violations.len(), first_message(.violations))]
    ConstraintViolations {
        /// Shape that was checked
        shape: &'static str,
        /// Every violation found, in field order
        violations: Vec<ConstraintViolation>,
    },

    /// A route template referenced a field that is absent on the request.
    #[error("Operation {operation} requires path parameter {parameter}")]
    MissingPathParameter {
        /// Operation name
        operation: &'static str,
        /// Placeholder name from the path template
        parameter: String,
    },

    /// No shape is registered under this name.
    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    /// No operation is registered under this name.
    #[error("Unknown operation: {name}")]
    UnknownOperation { name: String },

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn first_message(violations: &[ConstraintViolation]) -> &str {
    violations.first().map_or("none", |v| v.message.as_str())
}

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::ConstraintRule;

    #[test]
    fn test_duplicate_key_display() {
        let err = ModelError::DuplicateEntryKey {
            field: "tags",
            key: "env".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicated keys (env) are provided for tags");
    }

    #[test]
    fn test_constraint_violations_display() {
        let err = ModelError::ConstraintViolations {
            shape: "CustomRule",
            violations: vec![ConstraintViolation {
                shape: "CustomRule",
                path: "status".to_string(),
                rule: ConstraintRule::MinLength,
                message: "status must be at least 3 characters, got 1".to_string(),
            }],
        };
        let text = err.to_string();
        assert!(text.contains("CustomRule violates 1 constraint(s)"));
        assert!(text.contains("at least 3 characters"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ModelError = json_err.into();
        assert!(matches!(err, ModelError::Json(_)));
    }
}
