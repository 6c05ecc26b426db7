//! Backend environment operations.

use std::any::Any;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::BackendEnvironment;

/// The request structure for the CreateBackendEnvironment operation.
///
/// Routed as `POST /apps/{appId}/backendenvironments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBackendEnvironmentRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment_artifacts: Option<String>,
}

impl CreateBackendEnvironmentRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("environmentName").length(1, 255).required(),
        FieldDescriptor::new("stackName").length(1, 255),
        FieldDescriptor::new("deploymentArtifacts").length(1, 1000),
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

    /// The name for the backend environment.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    #[must_use]
    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }

    /// The AWS CloudFormation stack name of a backend environment.
    pub fn stack_name(&self) -> Option<&str> {
        self.stack_name.as_deref()
    }

    pub fn set_stack_name(&mut self, stack_name: Option<String>) {
        self.stack_name = stack_name;
    }

    #[must_use]
    pub fn with_stack_name(mut self, stack_name: impl Into<String>) -> Self {
        self.stack_name = Some(stack_name.into());
        self
    }

    /// The name of deployment artifacts.
    pub fn deployment_artifacts(&self) -> Option<&str> {
        self.deployment_artifacts.as_deref()
    }

    pub fn set_deployment_artifacts(&mut self, deployment_artifacts: Option<String>) {
        self.deployment_artifacts = deployment_artifacts;
    }

    #[must_use]
    pub fn with_deployment_artifacts(mut self, deployment_artifacts: impl Into<String>) -> Self {
        self.deployment_artifacts = Some(deployment_artifacts.into());
        self
    }
}

impl PartialEq for CreateBackendEnvironmentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.environment_name == other.environment_name
            && self.stack_name == other.stack_name
            && self.deployment_artifacts == other.deployment_artifacts
    }
}

impl Eq for CreateBackendEnvironmentRequest {}

impl Hash for CreateBackendEnvironmentRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.environment_name.hash(state);
        self.stack_name.hash(state);
        self.deployment_artifacts.hash(state);
    }
}

impl Shape for CreateBackendEnvironmentRequest {
    fn shape_name(&self) -> &'static str {
        "CreateBackendEnvironmentRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.environment_name.as_ref()),
            Field::of(&d[2], self.stack_name.as_ref()),
            Field::of(&d[3], self.deployment_artifacts.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateBackendEnvironmentRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateBackendEnvironmentRequest {
    type Output = CreateBackendEnvironmentResult;

    const NAME: &'static str = "CreateBackendEnvironment";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/backendenvironments";
}

/// The result structure for the CreateBackendEnvironment operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBackendEnvironmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment: Option<BackendEnvironment>,
}

impl CreateBackendEnvironmentResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("backendEnvironment"),
    ];

    /// Describes the backend environment for an Amplify app.
    pub const fn backend_environment(&self) -> Option<&BackendEnvironment> {
        self.backend_environment.as_ref()
    }

    pub fn set_backend_environment(&mut self, backend_environment: Option<BackendEnvironment>) {
        self.backend_environment = backend_environment;
    }

    #[must_use]
    pub fn with_backend_environment(mut self, backend_environment: BackendEnvironment) -> Self {
        self.backend_environment = Some(backend_environment);
        self
    }
}

impl Shape for CreateBackendEnvironmentResult {
    fn shape_name(&self) -> &'static str {
        "CreateBackendEnvironmentResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.backend_environment.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the DeleteBackendEnvironment operation.
///
/// Routed as `DELETE /apps/{appId}/backendenvironments/{environmentName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteBackendEnvironmentRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_name: Option<String>,
}

impl DeleteBackendEnvironmentRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("environmentName").length(1, 255).in_path(),
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

    /// The name for the backend environment.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    #[must_use]
    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }
}

impl PartialEq for DeleteBackendEnvironmentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.environment_name == other.environment_name
    }
}

impl Eq for DeleteBackendEnvironmentRequest {}

impl Hash for DeleteBackendEnvironmentRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.environment_name.hash(state);
    }
}

impl Shape for DeleteBackendEnvironmentRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteBackendEnvironmentRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.environment_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteBackendEnvironmentRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteBackendEnvironmentRequest {
    type Output = DeleteBackendEnvironmentResult;

    const NAME: &'static str = "DeleteBackendEnvironment";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}/backendenvironments/{environmentName}";
}

/// The result structure for the DeleteBackendEnvironment operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteBackendEnvironmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment: Option<BackendEnvironment>,
}

impl DeleteBackendEnvironmentResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("backendEnvironment"),
    ];

    /// Describes the backend environment for an Amplify app.
    pub const fn backend_environment(&self) -> Option<&BackendEnvironment> {
        self.backend_environment.as_ref()
    }

    pub fn set_backend_environment(&mut self, backend_environment: Option<BackendEnvironment>) {
        self.backend_environment = backend_environment;
    }

    #[must_use]
    pub fn with_backend_environment(mut self, backend_environment: BackendEnvironment) -> Self {
        self.backend_environment = Some(backend_environment);
        self
    }
}

impl Shape for DeleteBackendEnvironmentResult {
    fn shape_name(&self) -> &'static str {
        "DeleteBackendEnvironmentResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.backend_environment.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the GetBackendEnvironment operation.
///
/// Routed as `GET /apps/{appId}/backendenvironments/{environmentName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBackendEnvironmentRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_name: Option<String>,
}

impl GetBackendEnvironmentRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("environmentName").length(1, 255).in_path(),
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

    /// The name for the backend environment.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    #[must_use]
    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
        self
    }
}

impl PartialEq for GetBackendEnvironmentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.environment_name == other.environment_name
    }
}

impl Eq for GetBackendEnvironmentRequest {}

impl Hash for GetBackendEnvironmentRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.environment_name.hash(state);
    }
}

impl Shape for GetBackendEnvironmentRequest {
    fn shape_name(&self) -> &'static str {
        "GetBackendEnvironmentRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.environment_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetBackendEnvironmentRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetBackendEnvironmentRequest {
    type Output = GetBackendEnvironmentResult;

    const NAME: &'static str = "GetBackendEnvironment";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/backendenvironments/{environmentName}";
}

/// The result structure for the GetBackendEnvironment operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBackendEnvironmentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment: Option<BackendEnvironment>,
}

impl GetBackendEnvironmentResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("backendEnvironment"),
    ];

    /// Describes the backend environment for an Amplify app.
    pub const fn backend_environment(&self) -> Option<&BackendEnvironment> {
        self.backend_environment.as_ref()
    }

    pub fn set_backend_environment(&mut self, backend_environment: Option<BackendEnvironment>) {
        self.backend_environment = backend_environment;
    }

    #[must_use]
    pub fn with_backend_environment(mut self, backend_environment: BackendEnvironment) -> Self {
        self.backend_environment = Some(backend_environment);
        self
    }
}

impl Shape for GetBackendEnvironmentResult {
    fn shape_name(&self) -> &'static str {
        "GetBackendEnvironmentResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.backend_environment.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListBackendEnvironments operation.
///
/// Routed as `GET /apps/{appId}/backendenvironments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBackendEnvironmentsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListBackendEnvironmentsRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("environmentName").length(1, 255).in_query(),
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

    /// The name for the backend environment.
    pub fn environment_name(&self) -> Option<&str> {
        self.environment_name.as_deref()
    }

    pub fn set_environment_name(&mut self, environment_name: Option<String>) {
        self.environment_name = environment_name;
    }

    #[must_use]
    pub fn with_environment_name(mut self, environment_name: impl Into<String>) -> Self {
        self.environment_name = Some(environment_name.into());
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

impl PartialEq for ListBackendEnvironmentsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.environment_name == other.environment_name
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListBackendEnvironmentsRequest {}

impl Hash for ListBackendEnvironmentsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.environment_name.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListBackendEnvironmentsRequest {
    fn shape_name(&self) -> &'static str {
        "ListBackendEnvironmentsRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.environment_name.as_ref()),
            Field::of(&d[2], self.next_token.as_ref()),
            Field::of(&d[3], self.max_results.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for ListBackendEnvironmentsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListBackendEnvironmentsRequest {
    type Output = ListBackendEnvironmentsResult;

    const NAME: &'static str = "ListBackendEnvironments";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/backendenvironments";
}

impl PageRequest for ListBackendEnvironmentsRequest {
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

/// The result structure for the ListBackendEnvironments operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBackendEnvironmentsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environments: Option<Vec<BackendEnvironment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListBackendEnvironmentsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("backendEnvironments"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// The list of backend environments for an Amplify app.
    pub fn backend_environments(&self) -> Option<&[BackendEnvironment]> {
        self.backend_environments.as_deref()
    }

    pub fn set_backend_environments(
        &mut self,
        backend_environments: Option<Vec<BackendEnvironment>>,
    ) {
        self.backend_environments = backend_environments;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_backend_environments(
        mut self,
        items: impl IntoIterator<Item = BackendEnvironment>,
    ) -> Self {
        self.backend_environments.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListBackendEnvironmentsResult {
    fn shape_name(&self) -> &'static str {
        "ListBackendEnvironmentsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.backend_environments.as_ref()),
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

impl Paginated for ListBackendEnvironmentsResult {
    type Item = BackendEnvironment;

    fn items(&self) -> Option<&[BackendEnvironment]> {
        self.backend_environments.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

model_traits!(
    CreateBackendEnvironmentRequest,
    CreateBackendEnvironmentResult,
    DeleteBackendEnvironmentRequest,
    DeleteBackendEnvironmentResult,
    GetBackendEnvironmentRequest,
    GetBackendEnvironmentResult,
    ListBackendEnvironmentsRequest,
    ListBackendEnvironmentsResult,
);
