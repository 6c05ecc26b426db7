//! Resource tagging.

use std::any::Any;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::model::{Field, FieldDescriptor, Shape, insert_entry, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::request::{AmplifyRequest, RequestMetadata};

/// The request structure for the ListTagsForResource operation.
///
/// Routed as `GET /tags/{resourceArn}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListTagsForResourceRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
}

impl ListTagsForResourceRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("resourceArn").pattern(r"^arn:aws:amplify:.*").in_path(),
    ];

    /// The Amazon Resource Name (ARN) of the resource.
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn set_resource_arn(&mut self, resource_arn: Option<String>) {
        self.resource_arn = resource_arn;
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }
}

impl PartialEq for ListTagsForResourceRequest {
    fn eq(&self, other: &Self) -> bool {
        self.resource_arn == other.resource_arn
    }
}

impl Eq for ListTagsForResourceRequest {}

impl Hash for ListTagsForResourceRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_arn.hash(state);
    }
}

impl Shape for ListTagsForResourceRequest {
    fn shape_name(&self) -> &'static str {
        "ListTagsForResourceRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.resource_arn.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for ListTagsForResourceRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListTagsForResourceRequest {
    type Output = ListTagsForResourceResult;

    const NAME: &'static str = "ListTagsForResource";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/tags/{resourceArn}";
}

/// The result structure for the ListTagsForResource operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListTagsForResourceResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl ListTagsForResourceResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("tags"),
    ];

    /// A list of tags for the specified Amazon Resource Name (ARN).
    pub const fn tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }

    pub fn set_tags(&mut self, tags: Option<BTreeMap<String, String>>) {
        self.tags = tags;
    }

    #[must_use]
    pub fn with_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_tags_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(&mut self.tags, "tags", key.into(), value.into())?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_tags_entries(&mut self) -> &mut Self {
        self.tags = None;
        self
    }
}

impl Shape for ListTagsForResourceResult {
    fn shape_name(&self) -> &'static str {
        "ListTagsForResourceResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.tags.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the TagResource operation.
///
/// Routed as `POST /tags/{resourceArn}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagResourceRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
}

impl TagResourceRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("resourceArn").pattern(r"^arn:aws:amplify:.*").in_path(),
        FieldDescriptor::new("tags").required(),
    ];

    /// The Amazon Resource Name (ARN) of the resource.
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn set_resource_arn(&mut self, resource_arn: Option<String>) {
        self.resource_arn = resource_arn;
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    /// The tags used to tag the resource.
    pub const fn tags(&self) -> Option<&BTreeMap<String, String>> {
        self.tags.as_ref()
    }

    pub fn set_tags(&mut self, tags: Option<BTreeMap<String, String>>) {
        self.tags = tags;
    }

    #[must_use]
    pub fn with_tags(mut self, tags: BTreeMap<String, String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_tags_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(&mut self.tags, "tags", key.into(), value.into())?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_tags_entries(&mut self) -> &mut Self {
        self.tags = None;
        self
    }
}

impl PartialEq for TagResourceRequest {
    fn eq(&self, other: &Self) -> bool {
        self.resource_arn == other.resource_arn
            && self.tags == other.tags
    }
}

impl Eq for TagResourceRequest {}

impl Hash for TagResourceRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_arn.hash(state);
        self.tags.hash(state);
    }
}

impl Shape for TagResourceRequest {
    fn shape_name(&self) -> &'static str {
        "TagResourceRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.resource_arn.as_ref()),
            Field::of(&d[1], self.tags.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for TagResourceRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for TagResourceRequest {
    type Output = TagResourceResult;

    const NAME: &'static str = "TagResource";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/tags/{resourceArn}";
}

/// The result structure for the TagResource operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TagResourceResult {
}

impl TagResourceResult {
    const FIELDS: &'static [FieldDescriptor] = &[
    ];
}

impl Shape for TagResourceResult {
    fn shape_name(&self) -> &'static str {
        "TagResourceResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the UntagResource operation.
///
/// Routed as `DELETE /tags/{resourceArn}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UntagResourceRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag_keys: Option<Vec<String>>,
}

impl UntagResourceRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("resourceArn").pattern(r"^arn:aws:amplify:.*").in_path(),
        FieldDescriptor::new("tagKeys").in_query().required(),
    ];

    /// The Amazon Resource Name (ARN) of the resource.
    pub fn resource_arn(&self) -> Option<&str> {
        self.resource_arn.as_deref()
    }

    pub fn set_resource_arn(&mut self, resource_arn: Option<String>) {
        self.resource_arn = resource_arn;
    }

    #[must_use]
    pub fn with_resource_arn(mut self, resource_arn: impl Into<String>) -> Self {
        self.resource_arn = Some(resource_arn.into());
        self
    }

    /// The tag keys to use to untag a resource.
    pub fn tag_keys(&self) -> Option<&[String]> {
        self.tag_keys.as_deref()
    }

    pub fn set_tag_keys(&mut self, tag_keys: Option<Vec<String>>) {
        self.tag_keys = tag_keys;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_tag_keys<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tag_keys
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }
}

impl PartialEq for UntagResourceRequest {
    fn eq(&self, other: &Self) -> bool {
        self.resource_arn == other.resource_arn
            && self.tag_keys == other.tag_keys
    }
}

impl Eq for UntagResourceRequest {}

impl Hash for UntagResourceRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_arn.hash(state);
        self.tag_keys.hash(state);
    }
}

impl Shape for UntagResourceRequest {
    fn shape_name(&self) -> &'static str {
        "UntagResourceRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.resource_arn.as_ref()),
            Field::of(&d[1], self.tag_keys.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for UntagResourceRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for UntagResourceRequest {
    type Output = UntagResourceResult;

    const NAME: &'static str = "UntagResource";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/tags/{resourceArn}";
}

/// The result structure for the UntagResource operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UntagResourceResult {
}

impl UntagResourceResult {
    const FIELDS: &'static [FieldDescriptor] = &[
    ];
}

impl Shape for UntagResourceResult {
    fn shape_name(&self) -> &'static str {
        "UntagResourceResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        Vec::new()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    ListTagsForResourceRequest,
    ListTagsForResourceResult,
    TagResourceRequest,
    TagResourceResult,
    UntagResourceRequest,
    UntagResourceResult,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untag_keys_travel_as_repeated_query() {
        let request = UntagResourceRequest::default()
            .with_resource_arn("arn:aws:amplify:us-east-1:123456789012:apps/d1")
            .with_tag_keys(["env", "team"]);
        let route = request.route().unwrap();
        assert_eq!(route.method, HttpMethod::Delete);
        assert_eq!(route.path, "/tags/arn%3Aaws%3Aamplify%3Aus-east-1%3A123456789012%3Aapps%2Fd1");
        assert_eq!(
            route.query,
            vec![
                ("tagKeys".to_string(), "env".to_string()),
                ("tagKeys".to_string(), "team".to_string()),
            ]
        );
    }

    #[test]
    fn test_tag_resource_requires_tags() {
        let request = TagResourceRequest::default().with_resource_arn("arn:aws:amplify:x");
        let violations = request.constraint_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "tags");
    }

    #[test]
    fn test_empty_result_renders_braces() {
        assert_eq!(TagResourceResult::default().to_string(), "{}");
        assert_eq!(UntagResourceResult::default().model_hash(), 1);
    }
}
