//! Artifact lookup.

use std::any::Any;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::Artifact;

/// The request structure for the GetArtifactUrl operation.
///
/// Routed as `GET /artifacts/{artifactId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetArtifactUrlRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact_id: Option<String>,
}

impl GetArtifactUrlRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("artifactId").max_length(255).in_path(),
    ];

    /// The unique ID for an artifact.
    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn set_artifact_id(&mut self, artifact_id: Option<String>) {
        self.artifact_id = artifact_id;
    }

    #[must_use]
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }
}

impl PartialEq for GetArtifactUrlRequest {
    fn eq(&self, other: &Self) -> bool {
        self.artifact_id == other.artifact_id
    }
}

impl Eq for GetArtifactUrlRequest {}

impl Hash for GetArtifactUrlRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.artifact_id.hash(state);
    }
}

impl Shape for GetArtifactUrlRequest {
    fn shape_name(&self) -> &'static str {
        "GetArtifactUrlRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.artifact_id.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetArtifactUrlRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetArtifactUrlRequest {
    type Output = GetArtifactUrlResult;

    const NAME: &'static str = "GetArtifactUrl";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/artifacts/{artifactId}";
}

/// The result structure for the GetArtifactUrl operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetArtifactUrlResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifact_url: Option<String>,
}

impl GetArtifactUrlResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("artifactId").max_length(255),
        FieldDescriptor::new("artifactUrl").max_length(1000),
    ];

    /// The unique ID for an artifact.
    pub fn artifact_id(&self) -> Option<&str> {
        self.artifact_id.as_deref()
    }

    pub fn set_artifact_id(&mut self, artifact_id: Option<String>) {
        self.artifact_id = artifact_id;
    }

    #[must_use]
    pub fn with_artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = Some(artifact_id.into());
        self
    }

    /// The presigned URL for the artifact.
    pub fn artifact_url(&self) -> Option<&str> {
        self.artifact_url.as_deref()
    }

    pub fn set_artifact_url(&mut self, artifact_url: Option<String>) {
        self.artifact_url = artifact_url;
    }

    #[must_use]
    pub fn with_artifact_url(mut self, artifact_url: impl Into<String>) -> Self {
        self.artifact_url = Some(artifact_url.into());
        self
    }
}

impl Shape for GetArtifactUrlResult {
    fn shape_name(&self) -> &'static str {
        "GetArtifactUrlResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.artifact_id.as_ref()),
            Field::of(&d[1], self.artifact_url.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListArtifacts operation.
///
/// Routed as `GET /apps/{appId}/branches/{branchName}/jobs/{jobId}/artifacts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListArtifactsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListArtifactsRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255).in_path(),
        FieldDescriptor::new("nextToken").max_length(2000).in_query(),
        FieldDescriptor::new("maxResults").range(0, 100).in_query(),
    ];

    /// The unique ID for an Amplify app.
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    pub fn set_app_id(&mut self, app_id: Option<String>) {
        self.app_id = app_id;
    }

    #[must_use]
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// The name of a branch that is part of an Amplify app.
    pub fn branch_name(&self) -> Option<&str> {
        self.branch_name.as_deref()
    }

    pub fn set_branch_name(&mut self, branch_name: Option<String>) {
        self.branch_name = branch_name;
    }

    #[must_use]
    pub fn with_branch_name(mut self, branch_name: impl Into<String>) -> Self {
        self.branch_name = Some(branch_name.into());
        self
    }

    /// The unique ID for the job.
    pub fn job_id(&self) -> Option<&str> {
        self.job_id.as_deref()
    }

    pub fn set_job_id(&mut self, job_id: Option<String>) {
        self.job_id = job_id;
    }

    #[must_use]
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    /// A pagination token. Set to the token returned by a previous list call to fetch the next
    /// page.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }

    /// The maximum number of records to list in a single response.
    pub const fn max_results(&self) -> Option<i32> {
        self.max_results
    }

    pub const fn set_max_results(&mut self, max_results: Option<i32>) {
        self.max_results = max_results;
    }

    #[must_use]
    pub fn with_max_results(mut self, max_results: i32) -> Self {
        self.max_results = Some(max_results);
        self
    }
}

impl PartialEq for ListArtifactsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListArtifactsRequest {}

impl Hash for ListArtifactsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListArtifactsRequest {
    fn shape_name(&self) -> &'static str {
        "ListArtifactsRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.job_id.as_ref()),
            Field::of(&d[3], self.next_token.as_ref()),
            Field::of(&d[4], self.max_results.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for ListArtifactsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListArtifactsRequest {
    type Output = ListArtifactsResult;

    const NAME: &'static str = "ListArtifacts";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs/{jobId}/artifacts";
}

impl PageRequest for ListArtifactsRequest {
    fn page_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    fn set_page_token(&mut self, token: Option<String>) {
        self.next_token = token;
    }

    fn page_size(&self) -> Option<i32> {
        self.max_results
    }

    fn set_page_size(&mut self, size: Option<i32>) {
        self.max_results = size;
    }
}

/// The result structure for the ListArtifacts operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListArtifactsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    artifacts: Option<Vec<Artifact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListArtifactsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("artifacts"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// A list of artifacts.
    pub fn artifacts(&self) -> Option<&[Artifact]> {
        self.artifacts.as_deref()
    }

    pub fn set_artifacts(&mut self, artifacts: Option<Vec<Artifact>>) {
        self.artifacts = artifacts;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_artifacts(mut self, items: impl IntoIterator<Item = Artifact>) -> Self {
        self.artifacts.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// A pagination token. If non-null, pass it back on a subsequent request to fetch more entries.
    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    pub fn set_next_token(&mut self, next_token: Option<String>) {
        self.next_token = next_token;
    }

    #[must_use]
    pub fn with_next_token(mut self, next_token: impl Into<String>) -> Self {
        self.next_token = Some(next_token.into());
        self
    }
}

impl Shape for ListArtifactsResult {
    fn shape_name(&self) -> &'static str {
        "ListArtifactsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.artifacts.as_ref()),
            Field::of(&d[1], self.next_token.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl Paginated for ListArtifactsResult {
    type Item = Artifact;

    fn items(&self) -> Option<&[Artifact]> {
        self.artifacts.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

model_traits!(
    GetArtifactUrlRequest,
    GetArtifactUrlResult,
    ListArtifactsRequest,
    ListArtifactsResult,
);
