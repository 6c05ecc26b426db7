//! Describe command handler.
//!
//! Prints a shape's fields in declaration order with their advisory constraints.

use amplify_model::{ModelError, OPERATIONS, registry};

use crate::error::CliResult;
use crate::presentation::{format_row, separator};

/// Render the field table for `name`.
pub fn execute(name: &str) -> CliResult<String> {
    let shape = registry::empty_shape(name).ok_or_else(|| ModelError::UnknownShape {
        name: name.to_string(),
    })?;

    let mut lines = Vec::new();
    let operation = OPERATIONS
        .iter()
        .find(|info| info.request == name || info.result == name);
    match operation {
        Some(info) => lines.push(format!(
            "{name} ({}: {} {})",
            info.name, info.method, info.path
        )),
        None => lines.push(name.to_string()),
    }

    let descriptors = shape.descriptors();
    if descriptors.is_empty() {
        lines.push("(no fields)".to_string());
        return Ok(lines.join("\n"));
    }

    lines.push(format_row("FIELD", "CONSTRAINTS"));
    lines.push(separator(60));
    for descriptor in descriptors {
        let detail = descriptor.describe();
        let detail = if detail.is_empty() { "-".to_string() } else { detail };
        lines.push(format_row(descriptor.name, &detail));
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_shows_route_and_constraints() {
        let output = execute("GetBranchRequest").unwrap();
        let mut lines = output.lines();
        assert_eq!(
            lines.next(),
            Some("GetBranchRequest (GetBranch: GET /apps/{appId}/branches/{branchName})")
        );
        assert!(output.contains(&format_row("appId", "required, length 1-20, path")));
        assert!(output.contains(&format_row("branchName", "required, length 1-255, path")));
    }

    #[test]
    fn test_describe_value_shape() {
        let output = execute("Webhook").unwrap();
        assert_eq!(output.lines().next(), Some("Webhook"));
        assert!(output.contains("webhookUrl"));
    }

    #[test]
    fn test_describe_empty_result() {
        let output = execute("TagResourceResult").unwrap();
        assert!(output.ends_with("(no fields)"));
    }

    #[test]
    fn test_describe_unknown_shape() {
        assert_eq!(execute("Rocket").unwrap_err().exit_code(), 2);
    }
}
