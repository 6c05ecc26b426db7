//! Reflection layer shared by every model shape.
//!
//! Each generated shape describes its fields once, as a static table of
//! [`FieldDescriptor`]s, and exposes them in declaration order through
//! [`Shape::fields`]. Rendering, the structural hash and constraint checking
//! are all driven from that single field walk, so every shape behaves the same
//! way without per-type code.
//!
//! # Absence
//!
//! Every field is an `Option`. `None` is absent: it is skipped when rendering,
//! contributes `0` to the hash and is omitted from the wire. `Some(vec![])` and
//! `Some(String::new())` are present values and are kept.

mod hash;
mod render;
mod value;

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use crate::constraints::{self, ConstraintViolation};
use crate::error::{ModelError, ModelResult};

pub use hash::{combine_hashes, string_hash};
pub use render::write_shape;
pub use value::millis_precision;

/// Where a request field travels when the request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldLocation {
    /// Substituted into the URI path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Carried in the JSON body.
    Body,
}

/// Static metadata for a single field of a shape.
///
/// Built with `const` chaining so shapes can declare their tables as
/// constants:
///
/// ```
/// use amplify_model::FieldDescriptor;
///
/// const APP_ID: FieldDescriptor = FieldDescriptor::new("appId").length(1, 20).in_path();
/// assert_eq!(APP_ID.max_length, Some(20));
/// assert!(APP_ID.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Wire name, which is also the render label.
    pub name: &'static str,
    /// Whether the service rejects requests that leave this field absent.
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    /// Inclusive numeric bounds.
    pub range: Option<(i64, i64)>,
    /// Closed value set for enum-like strings.
    pub allowed_values: Option<&'static [&'static str]>,
    pub pattern: Option<&'static str>,
    pub location: FieldLocation,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            required: false,
            min_length: None,
            max_length: None,
            range: None,
            allowed_values: None,
            pattern: None,
            location: FieldLocation::Body,
        }
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    #[must_use]
    pub const fn range(mut self, min: i64, max: i64) -> Self {
        self.range = Some((min, max));
        self
    }

    #[must_use]
    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.allowed_values = Some(values);
        self
    }

    #[must_use]
    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Marks the field as a URI path parameter. Path parameters are always required.
    #[must_use]
    pub const fn in_path(mut self) -> Self {
        self.location = FieldLocation::Path;
        self.required = true;
        self
    }

    #[must_use]
    pub const fn in_query(mut self) -> Self {
        self.location = FieldLocation::Query;
        self
    }

    /// Human-readable summary of the constraints, e.g. `required, length 1-20`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.required {
            parts.push("required".to_string());
        }
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) => parts.push(format!("length {min}-{max}")),
            (None, Some(max)) => parts.push(format!("length 0-{max}")),
            (Some(min), None) => parts.push(format!("length >= {min}")),
            (None, None) => {}
        }
        if let Some((min, max)) = self.range {
            parts.push(format!("range {min}-{max}"));
        }
        if let Some(values) = self.allowed_values {
            parts.push(format!("one of {}", values.join("|")));
        }
        if let Some(pattern) = self.pattern {
            parts.push(format!("pattern {pattern}"));
        }
        match self.location {
            FieldLocation::Path => parts.push("path".to_string()),
            FieldLocation::Query => parts.push("query".to_string()),
            FieldLocation::Body => {}
        }
        parts.join(", ")
    }
}

/// A field's descriptor paired with its current value, if present.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    pub descriptor: &'static FieldDescriptor,
    pub value: Option<&'a dyn FieldValue>,
}

impl<'a> Field<'a> {
    pub fn of<T: FieldValue>(descriptor: &'static FieldDescriptor, value: Option<&'a T>) -> Self {
        Self {
            descriptor,
            value: value.map(|v| v as &dyn FieldValue),
        }
    }

    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub const fn is_present(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        if let Some(value) = self.value {
            value.render_value(&mut rendered);
        }
        f.debug_struct("Field")
            .field("name", &self.descriptor.name)
            .field("value", &self.value.map(|_| rendered))
            .finish()
    }
}

/// A value that can sit in a model field.
///
/// Implemented for the scalar field types, sequences, string maps and every
/// model shape (so shapes nest).
pub trait FieldValue: Send + Sync {
    /// Append the display form of this value to `out`.
    fn render_value(&self, out: &mut String);

    /// Structural hash, compatible with the service SDK's `hashCode`.
    fn value_hash(&self) -> i32;

    fn as_text(&self) -> Option<&str> {
        None
    }

    fn as_integer(&self) -> Option<i64> {
        None
    }

    /// Nested shapes, one per element for sequences of shapes.
    fn nested(&self) -> Vec<&dyn Shape> {
        Vec::new()
    }

    fn is_sequence(&self) -> bool {
        false
    }

    /// Values as they appear in a query string. Sequences yield one entry per element.
    fn query_values(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Common behaviour of every request, result and value shape.
///
/// The trait is object-safe so heterogeneous shapes can be handled through
/// `&dyn Shape` (the registry and the CLI do this).
pub trait Shape: fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// The service's name for this shape, e.g. `ListAppsResult`.
    fn shape_name(&self) -> &'static str;

    /// Field metadata in declaration order.
    fn descriptors(&self) -> &'static [FieldDescriptor];

    /// Field values in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    fn as_any(&self) -> &dyn Any;

    /// Structural equality across shape types. Different concrete types are
    /// never equal, even when their fields match.
    fn model_eq(&self, other: &dyn Shape) -> bool;

    /// `{field1: value1,field2: value2}` over the present fields.
    fn render(&self) -> String {
        let mut out = String::new();
        write_shape(self, &mut out);
        out
    }

    /// `h = 31 * h + field_hash` over all fields, starting at 1, with absent
    /// fields contributing 0.
    fn model_hash(&self) -> i32 {
        combine_hashes(
            self.fields()
                .iter()
                .map(|field| field.value.map_or(0, |value| value.value_hash())),
        )
    }

    /// Advisory constraint check over this shape and everything nested in it.
    fn constraint_violations(&self) -> Vec<ConstraintViolation> {
        constraints::check_shape(self)
    }

    /// Look up a field by wire name.
    fn field(&self, name: &str) -> Option<Field<'_>> {
        self.fields().into_iter().find(|field| field.name() == name)
    }
}

/// `model_eq` for a concrete shape type: downcast, then compare with `PartialEq`.
pub fn same_model<T: Shape + PartialEq>(this: &T, other: &dyn Shape) -> bool {
    other
        .as_any()
        .downcast_ref::<T>()
        .is_some_and(|other| this == other)
}

/// Insert into an optional string map, creating it when absent.
///
/// Fails when the key is already present; the existing entry is kept.
pub(crate) fn insert_entry(
    map: &mut Option<BTreeMap<String, String>>,
    field: &'static str,
    key: String,
    value: String,
) -> ModelResult<()> {
    let map = map.get_or_insert_with(BTreeMap::new);
    if map.contains_key(&key) {
        return Err(ModelError::DuplicateEntryKey { field, key });
    }
    map.insert(key, value);
    Ok(())
}

/// Implements `Display` and [`FieldValue`] for shapes in terms of [`Shape`].
macro_rules! model_traits {
    ($($ty:ty),+ $(,)?) => {$(
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::model::Shape::render(self))
            }
        }

        impl $crate::model::FieldValue for $ty {
            fn render_value(&self, out: &mut String) {
                $crate::model::write_shape(self, out);
            }

            fn value_hash(&self) -> i32 {
                $crate::model::Shape::model_hash(self)
            }

            fn nested(&self) -> Vec<&dyn $crate::model::Shape> {
                vec![self as &dyn $crate::model::Shape]
            }
        }
    )+};
}

pub(crate) use model_traits;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_builders() {
        const STATUS: FieldDescriptor = FieldDescriptor::new("status").length(3, 7);
        assert_eq!(STATUS.min_length, Some(3));
        assert_eq!(STATUS.max_length, Some(7));
        assert!(!STATUS.required);
        assert_eq!(STATUS.location, FieldLocation::Body);

        const TOKEN: FieldDescriptor = FieldDescriptor::new("nextToken").max_length(2000).in_query();
        assert_eq!(TOKEN.min_length, None);
        assert_eq!(TOKEN.location, FieldLocation::Query);
    }

    #[test]
    fn test_describe_lists_constraints() {
        let d = FieldDescriptor::new("appId").length(1, 20).in_path();
        assert_eq!(d.describe(), "required, length 1-20, path");

        let d = FieldDescriptor::new("stage").one_of(&["BETA", "PRODUCTION"]);
        assert_eq!(d.describe(), "one of BETA|PRODUCTION");

        assert_eq!(FieldDescriptor::new("ttl").describe(), "");
    }

    #[test]
    fn test_insert_entry_rejects_duplicates() {
        let mut map = None;
        insert_entry(&mut map, "tags", "env".into(), "prod".into()).unwrap();
        let err = insert_entry(&mut map, "tags", "env".into(), "dev".into()).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntryKey { field: "tags", ref key } if key == "env"));
        assert_eq!(map.unwrap().get("env").map(String::as_str), Some("prod"));
    }
}
