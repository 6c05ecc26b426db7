//! Operation routing metadata.
//!
//! Every request type names the operation it belongs to, its HTTP method and
//! its URI template. Path placeholders are filled from the request's own
//! fields; other fields of GET and DELETE operations travel in the query
//! string.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ModelError, ModelResult};
use crate::model::{FieldLocation, Shape};
use crate::request::AmplifyRequest;

/// Endpoint prefix used when building service hostnames.
pub const ENDPOINT_PREFIX: &str = "amplify";

/// Endpoint for the default region.
pub const DEFAULT_ENDPOINT: &str = "amplify.us-east-1.amazonaws.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved request line: method, path and query parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)?;
        for (i, (name, value)) in self.query.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(
                f,
                "{sep}{}={}",
                urlencoding::encode(name),
                urlencoding::encode(value)
            )?;
        }
        Ok(())
    }
}

/// Binds a request shape to its operation.
pub trait Operation: AmplifyRequest + Serialize + DeserializeOwned {
    /// The result shape returned by the service.
    type Output: Shape + Serialize + DeserializeOwned + Default;

    const NAME: &'static str;
    const METHOD: HttpMethod;
    /// URI template with `{field}` placeholders.
    const PATH: &'static str;

    fn resolve_path(&self) -> ModelResult<String> {
        expand_path(Self::NAME, Self::PATH, self)
    }

    fn query_parameters(&self) -> Vec<(String, String)> {
        query_parameters(self)
    }

    fn route(&self) -> ModelResult<Route> {
        Ok(Route {
            method: Self::METHOD,
            path: self.resolve_path()?,
            query: self.query_parameters(),
        })
    }
}

/// Fill `{name}` placeholders in `template` with percent-encoded field values.
pub fn expand_path<S: Shape + ?Sized>(
    operation: &'static str,
    template: &str,
    shape: &S,
) -> ModelResult<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };
        let name = &after[..end];
        let value = shape
            .field(name)
            .and_then(|field| field.value)
            .and_then(|value| value.as_text())
            .ok_or_else(|| ModelError::MissingPathParameter {
                operation,
                parameter: name.to_string(),
            })?;
        out.push_str(&urlencoding::encode(value));
        rest = &after[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Present query-located fields as `(name, value)` pairs in declaration order.
pub fn query_parameters<S: Shape + ?Sized>(shape: &S) -> Vec<(String, String)> {
    shape
        .fields()
        .into_iter()
        .filter(|field| field.descriptor.location == FieldLocation::Query)
        .filter_map(|field| field.value.map(|value| (field.name(), value.query_values())))
        .flat_map(|(name, values)| values.into_iter().map(move |v| (name.to_string(), v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_display_encodes_query() {
        let route = Route {
            method: HttpMethod::Get,
            path: "/apps".to_string(),
            query: vec![
                ("maxResults".to_string(), "10".to_string()),
                ("nextToken".to_string(), "a b/c".to_string()),
            ],
        };
        assert_eq!(route.to_string(), "GET /apps?maxResults=10&nextToken=a%20b%2Fc");
    }

    #[test]
    fn test_method_names() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(serde_json::to_string(&HttpMethod::Delete).unwrap(), "\"DELETE\"");
    }
}
