//! Inspect command handler.

use std::path::Path;

use amplify_model::{JsonCodec, Settings, registry};

use crate::error::CliResult;
use crate::handlers::{ensure_shape, read_document};

/// Decode the document at `path` as `name` and show its rendering and hash.
pub fn execute(settings: &Settings, name: &str, path: &Path) -> CliResult<String> {
    ensure_shape(name)?;
    let json = read_document(path)?;
    let codec = JsonCodec::new(settings.clone());
    let shape = registry::decode_shape(&codec, name, &json)?;
    tracing::debug!(shape = name, path = %path.display(), "Inspected document");
    Ok(format!("{}\nhash: {}", shape.render(), shape.model_hash()))
}

#[cfg(test)]
mod tests {
    use amplify_model::ValidationMode;

    use super::*;
    use crate::handlers::test_support::document;

    #[test]
    fn test_inspect_list_result() {
        let file = document(r#"{"apps": []}"#);
        let output = execute(&Settings::default(), "ListAppsResult", file.path()).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("{apps: []}"));
        // 31 * (31 * 1 + 1) + 0 for an empty list and an absent token
        assert_eq!(lines.next(), Some("hash: 992"));
    }

    #[test]
    fn test_inspect_keeps_field_order() {
        let file = document(r#"{"enableAutoBuild": false, "branchName": "main"}"#);
        let output = execute(&Settings::default(), "Branch", file.path()).unwrap();
        assert!(output.starts_with("{branchName: main,enableAutoBuild: false}"));
    }

    #[test]
    fn test_inspect_strict_rejects_violations() {
        let file = document(r#"{"status": "x"}"#);
        let settings = Settings {
            validation_mode: Some(ValidationMode::Strict),
            ..Settings::default()
        };
        let err = execute(&settings, "CustomRule", file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 3);

        let output = execute(&Settings::default(), "CustomRule", file.path()).unwrap();
        assert!(output.starts_with("{status: x}"));
    }

    #[test]
    fn test_inspect_malformed_json() {
        let file = document("{not json");
        let err = execute(&Settings::default(), "App", file.path()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
