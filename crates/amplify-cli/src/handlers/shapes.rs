//! Shapes command handler.

use amplify_model::SHAPE_NAMES;

/// Which part of the catalogue to list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShapeFilter {
    #[default]
    All,
    Requests,
    Results,
}

impl ShapeFilter {
    pub const fn from_flags(requests: bool, results: bool) -> Self {
        match (requests, results) {
            (true, _) => Self::Requests,
            (false, true) => Self::Results,
            (false, false) => Self::All,
        }
    }

    fn matches(self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Requests => name.ends_with("Request"),
            Self::Results => name.ends_with("Result"),
        }
    }
}

/// One shape name per line, in catalogue order.
pub fn execute(filter: ShapeFilter) -> String {
    SHAPE_NAMES
        .iter()
        .copied()
        .filter(|name| filter.matches(name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shapes_listed() {
        let output = execute(ShapeFilter::All);
        assert_eq!(output.lines().count(), SHAPE_NAMES.len());
        assert_eq!(output.lines().next(), Some("App"));
    }

    #[test]
    fn test_requests_only() {
        let output = execute(ShapeFilter::from_flags(true, false));
        assert!(output.lines().all(|name| name.ends_with("Request")));
        assert!(output.lines().any(|name| name == "ListAppsRequest"));
    }

    #[test]
    fn test_results_only() {
        let output = execute(ShapeFilter::from_flags(false, true));
        assert!(output.lines().all(|name| name.ends_with("Result")));
        assert!(!output.contains("Webhook\n"));
    }
}
