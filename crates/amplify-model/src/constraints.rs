//! Advisory constraint checking.
//!
//! Field descriptors carry the service's documented limits. Nothing in the
//! model enforces them on assignment; [`check_shape`] reports what a request
//! marshaller would reject, and the codec decides whether to fail or log.

use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, Mutex, PoisonError};

use regex::Regex;
use serde::Serialize;

use crate::model::{Field, Shape};

/// Compiled field patterns keyed by their source. `None` marks a pattern that
/// failed to compile.
static PATTERNS: LazyLock<Mutex<HashMap<&'static str, Option<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn compiled_pattern(pattern: &'static str) -> Option<Regex> {
    PATTERNS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(pattern)
        .or_insert_with(|| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(pattern, error = %e, "Skipping invalid field pattern");
                None
            }
        })
        .clone()
}

/// Which documented limit a value broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintRule {
    Required,
    MinLength,
    MaxLength,
    Range,
    AllowedValues,
    Pattern,
}

impl fmt::Display for ConstraintRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::MinLength => "min_length",
            Self::MaxLength => "max_length",
            Self::Range => "range",
            Self::AllowedValues => "allowed_values",
            Self::Pattern => "pattern",
        };
        f.write_str(name)
    }
}

/// One broken constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolation {
    /// Shape that owns the offending field.
    pub shape: &'static str,
    /// Wire path from the checked root, e.g. `customRules[1].status`.
    pub path: String,
    pub rule: ConstraintRule,
    pub message: String,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.path, self.rule, self.message)
    }
}

/// Check `shape` and every shape nested in it.
pub fn check_shape<S: Shape + ?Sized>(shape: &S) -> Vec<ConstraintViolation> {
    let mut violations = Vec::new();
    check_into(shape, "", &mut violations);
    tracing::debug!(
        shape = shape.shape_name(),
        violations = violations.len(),
        "Checked shape constraints"
    );
    violations
}

fn check_into<S: Shape + ?Sized>(shape: &S, prefix: &str, out: &mut Vec<ConstraintViolation>) {
    for field in shape.fields() {
        let path = if prefix.is_empty() {
            field.name().to_string()
        } else {
            format!("{prefix}.{}", field.name())
        };
        check_field(shape.shape_name(), &field, &path, out);

        if let Some(value) = field.value {
            let sequence = value.is_sequence();
            for (i, nested) in value.nested().into_iter().enumerate() {
                let nested_path = if sequence {
                    format!("{path}[{i}]")
                } else {
                    path.clone()
                };
                check_into(nested, &nested_path, out);
            }
        }
    }
}

fn check_field(shape: &'static str, field: &Field<'_>, path: &str, out: &mut Vec<ConstraintViolation>) {
    let d = field.descriptor;
    let mut push = |rule, message: String| {
        out.push(ConstraintViolation {
            shape,
            path: path.to_string(),
            rule,
            message,
        });
    };

    let Some(value) = field.value else {
        if d.required {
            push(ConstraintRule::Required, format!("{} is required", d.name));
        }
        return;
    };

    if let Some(text) = value.as_text() {
        let chars = text.chars().count();
        if let Some(min) = d.min_length {
            if chars < min {
                push(
                    ConstraintRule::MinLength,
                    format!("{} must be at least {min} characters, got {chars}", d.name),
                );
            }
        }
        if let Some(max) = d.max_length {
            if chars > max {
                push(
                    ConstraintRule::MaxLength,
                    format!("{} must be at most {max} characters, got {chars}", d.name),
                );
            }
        }
        if let Some(allowed) = d.allowed_values {
            if !allowed.contains(&text) {
                push(
                    ConstraintRule::AllowedValues,
                    format!("{} must be one of {}, got '{text}'", d.name, allowed.join(", ")),
                );
            }
        }
        if let Some(pattern) = d.pattern {
            if compiled_pattern(pattern).is_some_and(|re| !re.is_match(text)) {
                push(
                    ConstraintRule::Pattern,
                    format!("{} must match {pattern}", d.name),
                );
            }
        }
    }

    if let (Some(number), Some((min, max))) = (value.as_integer(), d.range) {
        if !(min..=max).contains(&number) {
            push(
                ConstraintRule::Range,
                format!("{} must be between {min} and {max}, got {number}", d.name),
            );
        }
    }
}

/// Log each violation at `warn`. Used when validation is advisory.
pub fn log_violations(violations: &[ConstraintViolation]) {
    for v in violations {
        tracing::warn!(shape = v.shape, path = %v.path, rule = %v.rule, "{}", v.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::{CreateAppRequest, ListAppsRequest};
    use crate::shapes::{App, CustomRule, DomainAssociation, SubDomain, SubDomainSetting};

    #[test]
    fn test_clean_shape_has_no_violations() {
        let rule = CustomRule::default().with_source("/a").with_target("/b").with_status("301");
        assert!(check_shape(&rule).is_empty());
    }

    #[test]
    fn test_nested_sequence_paths_are_indexed() {
        let app = App::default().with_custom_rules([
            CustomRule::default().with_status("301"),
            CustomRule::default().with_status("1"),
        ]);
        let violations = check_shape(&app);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "customRules[1].status");
        assert_eq!(violations[0].shape, "CustomRule");
        assert_eq!(violations[0].rule, ConstraintRule::MinLength);
    }

    #[test]
    fn test_nested_single_shape_path() {
        let domain = DomainAssociation::default().with_sub_domains([SubDomain::default()
            .with_sub_domain_setting(SubDomainSetting::default().with_branch_name(""))]);
        let violations = check_shape(&domain);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "subDomains[0].subDomainSetting.branchName");
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 20 characters, 40 bytes
        let name = "é".repeat(20);
        let app = App::default().with_app_id(name);
        assert!(check_shape(&app).is_empty());
    }

    #[test]
    fn test_range_and_required() {
        let request = ListAppsRequest::default().with_max_results(500);
        let violations = check_shape(&request);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, ConstraintRule::Range);

        let violations = check_shape(&CreateAppRequest::default());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].rule, ConstraintRule::Required);
        assert_eq!(violations[0].path, "name");
    }

    #[test]
    fn test_allowed_values_and_pattern() {
        let domain = DomainAssociation::default()
            .with_domain_status("DONE")
            .with_auto_sub_domain_iam_role("not-an-arn");
        let rules: Vec<_> = check_shape(&domain).into_iter().map(|v| v.rule).collect();
        assert_eq!(rules, vec![ConstraintRule::Pattern, ConstraintRule::AllowedValues]);

        let domain = DomainAssociation::default()
            .with_auto_sub_domain_iam_role("arn:aws:iam::123456789012:role/amplify");
        assert!(check_shape(&domain).is_empty());
    }

    #[test]
    fn test_patterns_compile_once() {
        let pattern = r"^arn:aws:amplify:.*";
        let first = compiled_pattern(pattern).unwrap();
        let second = compiled_pattern(pattern).unwrap();
        assert_eq!(first.as_str(), second.as_str());
        assert!(PATTERNS.lock().unwrap().contains_key(pattern));
    }

    #[test]
    fn test_invalid_pattern_is_skipped() {
        assert!(compiled_pattern("(unclosed").is_none());
        assert!(matches!(PATTERNS.lock().unwrap().get("(unclosed"), Some(None)));
    }

    #[test]
    fn test_violation_display() {
        let violation = ConstraintViolation {
            shape: "App",
            path: "name".to_string(),
            rule: ConstraintRule::MaxLength,
            message: "too long".to_string(),
        };
        assert_eq!(violation.to_string(), "name (max_length): too long");
    }
}
