//! Service error taxonomy.

use serde_json::Value;
use thiserror::Error;

/// Errors the Amplify service reports.
///
/// Transports map the service's error code onto these variants with
/// [`AmplifyServiceError::from_error_code`], or
/// [`AmplifyServiceError::from_error_body`] when the JSON error body is at hand.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AmplifyServiceError {
    /// A request contains unexpected data.
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// An operation failed due to a lack of access.
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// An entity was not found during an operation.
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// The service failed to perform an operation due to an internal issue.
    #[error("Internal failure: {message}")]
    InternalFailure { message: String },

    /// A resource could not be created because service quotas were exceeded.
    #[error("Limit exceeded: {message}")]
    LimitExceeded { message: String },

    /// An operation failed because a dependent service threw an exception.
    #[error("Dependent service failure: {message}")]
    DependentServiceFailure { message: String },

    /// An operation failed due to a non-existent resource.
    #[error("Resource not found: {message}")]
    ResourceNotFound {
        /// Service-specific code from the error body, if it carried one
        code: Option<String>,
        message: String,
    },

    /// Anything the service taxonomy does not cover.
    #[error("Transport error ({code}): {message}")]
    Transport { code: String, message: String },
}

impl AmplifyServiceError {
    /// Map a service error code (e.g. `NotFoundException`) to a variant.
    pub fn from_error_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            "BadRequestException" => Self::BadRequest { message },
            "UnauthorizedException" => Self::Unauthorized { message },
            "NotFoundException" => Self::NotFound { message },
            "InternalFailureException" => Self::InternalFailure { message },
            "LimitExceededException" => Self::LimitExceeded { message },
            "DependentServiceFailureException" => Self::DependentServiceFailure { message },
            "ResourceNotFoundException" => Self::ResourceNotFound {
                code: None,
                message,
            },
            other => Self::Transport {
                code: other.to_string(),
                message,
            },
        }
    }

    /// Map an error code plus the service's JSON error body.
    ///
    /// The body's `message` (or `Message`) becomes the message; for
    /// `ResourceNotFoundException` its `code` member is kept as well.
    pub fn from_error_body(error_code: &str, body: &Value) -> Self {
        let message = body_text(body, "message")
            .or_else(|| body_text(body, "Message"))
            .unwrap_or_default();
        match Self::from_error_code(error_code, message) {
            Self::ResourceNotFound { message, .. } => Self::ResourceNotFound {
                code: body_text(body, "code").map(str::to_string),
                message,
            },
            other => other,
        }
    }

    pub fn error_code(&self) -> &str {
        match self {
            Self::BadRequest { .. } => "BadRequestException",
            Self::Unauthorized { .. } => "UnauthorizedException",
            Self::NotFound { .. } => "NotFoundException",
            Self::InternalFailure { .. } => "InternalFailureException",
            Self::LimitExceeded { .. } => "LimitExceededException",
            Self::DependentServiceFailure { .. } => "DependentServiceFailureException",
            Self::ResourceNotFound { .. } => "ResourceNotFoundException",
            Self::Transport { code, .. } => code,
        }
    }

    /// Whether retrying the same request may succeed.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::InternalFailure { .. } | Self::LimitExceeded { .. } | Self::DependentServiceFailure { .. }
        )
    }
}

fn body_text<'a>(body: &'a Value, key: &str) -> Option<&'a str> {
    body.get(key).and_then(Value::as_str)
}

/// Result type alias for service operations.
pub type AmplifyResult<T> = Result<T, AmplifyServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_round_trip() {
        for code in [
            "BadRequestException",
            "UnauthorizedException",
            "NotFoundException",
            "InternalFailureException",
            "LimitExceededException",
            "DependentServiceFailureException",
            "ResourceNotFoundException",
        ] {
            let err = AmplifyServiceError::from_error_code(code, "boom");
            assert_eq!(err.error_code(), code);
            assert!(!matches!(err, AmplifyServiceError::Transport { .. }));
        }
    }

    #[test]
    fn test_unknown_code_is_transport() {
        let err = AmplifyServiceError::from_error_code("ThrottlingException", "slow down");
        assert_eq!(err.error_code(), "ThrottlingException");
        assert_eq!(err.to_string(), "Transport error (ThrottlingException): slow down");
    }

    #[test]
    fn test_resource_not_found_keeps_body_code() {
        let body = serde_json::json!({ "code": "BranchNotFound", "message": "no branch dev" });
        let err = AmplifyServiceError::from_error_body("ResourceNotFoundException", &body);
        assert_eq!(
            err,
            AmplifyServiceError::ResourceNotFound {
                code: Some("BranchNotFound".to_string()),
                message: "no branch dev".to_string(),
            }
        );
        assert_eq!(err.error_code(), "ResourceNotFoundException");
        assert_eq!(err.to_string(), "Resource not found: no branch dev");
    }

    #[test]
    fn test_error_body_without_code() {
        let body = serde_json::json!({ "Message": "gone" });
        let err = AmplifyServiceError::from_error_body("ResourceNotFoundException", &body);
        assert_eq!(
            err,
            AmplifyServiceError::ResourceNotFound {
                code: None,
                message: "gone".to_string(),
            }
        );

        let err = AmplifyServiceError::from_error_body("NotFoundException", &body);
        assert_eq!(err.to_string(), "Not found: gone");
    }

    #[test]
    fn test_retryable() {
        assert!(AmplifyServiceError::from_error_code("LimitExceededException", "").is_retryable());
        assert!(!AmplifyServiceError::from_error_code("NotFoundException", "").is_retryable());
    }
}
