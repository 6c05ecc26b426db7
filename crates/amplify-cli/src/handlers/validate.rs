//! Validate command handler.
//!
//! Decodes in advisory mode whatever the configured mode is, so every
//! violation gets reported rather than only the first failure.

use std::path::Path;

use amplify_model::{JsonCodec, Settings, ValidationMode, registry};

use crate::error::{CliError, CliResult};
use crate::handlers::{ensure_shape, read_document};

/// Check the document at `path` against the constraints of `name`.
///
/// Returns a confirmation line when the document is clean and
/// [`CliError::Validation`] listing every violation otherwise.
pub fn execute(settings: &Settings, name: &str, path: &Path) -> CliResult<String> {
    ensure_shape(name)?;
    let json = read_document(path)?;
    let codec = JsonCodec::new(Settings {
        validation_mode: Some(ValidationMode::Advisory),
        ..settings.clone()
    });
    let shape = registry::decode_shape(&codec, name, &json)?;

    let violations = shape.constraint_violations();
    if violations.is_empty() {
        return Ok(format!("{name}: no constraint violations"));
    }

    let mut report = format!("{} violation(s) in {name}", violations.len());
    for violation in &violations {
        report.push_str("\n  ");
        report.push_str(&violation.to_string());
    }
    Err(CliError::Validation(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::document;

    #[test]
    fn test_clean_document() {
        let file = document(r#"{"name": "site"}"#);
        let output = execute(&Settings::default(), "CreateAppRequest", file.path()).unwrap();
        assert_eq!(output, "CreateAppRequest: no constraint violations");
    }

    #[test]
    fn test_nested_violations_are_listed() {
        let file = document(
            r#"{
                "appId": "d1",
                "customRules": [
                    {"source": "/a", "target": "/b", "status": "200"},
                    {"source": "/c", "target": "/d", "status": "x"}
                ]
            }"#,
        );
        let err = execute(&Settings::default(), "App", file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        let message = err.to_string();
        assert!(message.contains("1 violation(s) in App"));
        assert!(message.contains("customRules[1].status (min_length)"));
    }

    #[test]
    fn test_strict_setting_still_reports_all() {
        let file = document("{}");
        let settings = Settings {
            validation_mode: Some(ValidationMode::Strict),
            ..Settings::default()
        };
        let err = execute(&settings, "TagResourceRequest", file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("2 violation(s)"));
        assert!(message.contains("resourceArn (required)"));
        assert!(message.contains("tags (required)"));
    }

    #[test]
    fn test_unknown_shape_checked_before_reading() {
        let err = execute(&Settings::default(), "Rocket", Path::new("/nonexistent.json"))
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
