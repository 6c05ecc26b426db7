//! Metadata shared by every request.
//!
//! Requests embed a [`RequestMetadata`] value rather than inheriting from a
//! common base. It holds transport-level extras that are not part of the
//! service shape, so it is excluded from rendering, equality, hashing and the
//! JSON body.

use std::collections::BTreeMap;

use crate::model::Shape;

/// Custom headers and query parameters a caller wants sent with a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    custom_headers: BTreeMap<String, String>,
    custom_query_parameters: BTreeMap<String, Vec<String>>,
}

impl RequestMetadata {
    pub const fn custom_headers(&self) -> &BTreeMap<String, String> {
        &self.custom_headers
    }

    pub const fn custom_query_parameters(&self) -> &BTreeMap<String, Vec<String>> {
        &self.custom_query_parameters
    }

    /// Set a header, returning the previous value for that name.
    pub fn put_custom_header(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.custom_headers.insert(name.into(), value.into())
    }

    /// Add a query parameter value. Repeated names accumulate.
    pub fn put_custom_query_parameter(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.custom_query_parameters
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.custom_headers.is_empty() && self.custom_query_parameters.is_empty()
    }
}

/// Implemented by every request shape.
pub trait AmplifyRequest: Shape {
    fn metadata(&self) -> &RequestMetadata;

    fn metadata_mut(&mut self) -> &mut RequestMetadata;

    #[must_use]
    fn with_custom_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.metadata_mut().put_custom_header(name, value);
        self
    }

    #[must_use]
    fn with_custom_query_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.metadata_mut().put_custom_query_parameter(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_replace_and_query_accumulates() {
        let mut metadata = RequestMetadata::default();
        assert!(metadata.is_empty());

        assert_eq!(metadata.put_custom_header("x-trace", "a"), None);
        assert_eq!(metadata.put_custom_header("x-trace", "b"), Some("a".to_string()));

        metadata.put_custom_query_parameter("filter", "one");
        metadata.put_custom_query_parameter("filter", "two");
        assert_eq!(
            metadata.custom_query_parameters().get("filter"),
            Some(&vec!["one".to_string(), "two".to_string()])
        );
        assert_eq!(metadata.custom_headers().len(), 1);
        assert!(!metadata.is_empty());
    }
}
