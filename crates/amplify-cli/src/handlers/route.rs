//! Route command handler.

use std::path::Path;

use amplify_model::registry::{find_operation, resolve_route};
use amplify_model::{JsonCodec, ModelError, Settings};

use crate::error::{CliError, CliResult};
use crate::handlers::read_document;

/// Resolve the route of `operation`.
///
/// Without a document the method and path template are returned. With one,
/// placeholders are filled from the decoded request and query parameters
/// appended. `json` switches the output to the serialized [`amplify_model::Route`].
pub fn execute(
    settings: &Settings,
    operation: &str,
    file: Option<&Path>,
    json: bool,
) -> CliResult<String> {
    let info = find_operation(operation).ok_or_else(|| ModelError::UnknownOperation {
        name: operation.to_string(),
    })?;

    let Some(path) = file else {
        return Ok(format!("{} {}", info.method, info.path));
    };

    let document = read_document(path)?;
    let codec = JsonCodec::new(settings.clone());
    let route = resolve_route(&codec, info.name, &document)?;
    tracing::debug!(operation = info.name, route = %route, "Resolved route");

    if !json {
        return Ok(route.to_string());
    }
    let rendered = if settings.effective_pretty_json() {
        serde_json::to_string_pretty(&route)
    } else {
        serde_json::to_string(&route)
    };
    rendered.map_err(|err| CliError::General(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::document;

    #[test]
    fn test_template_without_document() {
        let output = execute(&Settings::default(), "getjob", None, false).unwrap();
        assert_eq!(output, "GET /apps/{appId}/branches/{branchName}/jobs/{jobId}");
    }

    #[test]
    fn test_resolved_route() {
        let file = document(r#"{"appId": "d1", "branchName": "dev", "maxResults": 20}"#);
        let output = execute(&Settings::default(), "ListJobs", Some(file.path()), false).unwrap();
        assert_eq!(output, "GET /apps/d1/branches/dev/jobs?maxResults=20");
    }

    #[test]
    fn test_route_as_json() {
        let file = document(r#"{"appId": "d1"}"#);
        let output = execute(&Settings::default(), "DeleteApp", Some(file.path()), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "method": "DELETE", "path": "/apps/d1", "query": [] })
        );
    }

    #[test]
    fn test_missing_path_parameter() {
        let file = document(r#"{"appId": "d1"}"#);
        let err = execute(&Settings::default(), "GetBranch", Some(file.path()), false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("branchName"));
    }

    #[test]
    fn test_unknown_operation() {
        let err = execute(&Settings::default(), "LaunchRocket", None, false).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
