//! Branch operations.

use std::any::Any;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::enums::Stage;
use crate::error::ModelResult;
use crate::model::{Field, FieldDescriptor, Shape, insert_entry, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::Branch;

/// The request structure for the create branch request.
///
/// Routed as `POST /apps/{appId}/branches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBranchRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basic_auth_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_basic_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_pull_request_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request_environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment_arn: Option<String>,
}

impl CreateBranchRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).required(),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("stage").one_of(Stage::VALUES),
        FieldDescriptor::new("framework").max_length(255),
        FieldDescriptor::new("enableNotification"),
        FieldDescriptor::new("enableAutoBuild"),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("tags"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("ttl"),
        FieldDescriptor::new("displayName").max_length(255),
        FieldDescriptor::new("enablePullRequestPreview"),
        FieldDescriptor::new("pullRequestEnvironmentName").max_length(20),
        FieldDescriptor::new("backendEnvironmentArn").length(1, 1000),
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

    /// The name for the branch.
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

    /// The description for the branch.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Describes the current stage for the branch.
    ///
    /// One of [`Stage`]; stored as its wire string.
    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    pub fn set_stage(&mut self, stage: Option<String>) {
        self.stage = stage;
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// The framework for the branch.
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn set_framework(&mut self, framework: Option<String>) {
        self.framework = framework;
    }

    #[must_use]
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Enables notifications for the branch.
    pub const fn enable_notification(&self) -> Option<bool> {
        self.enable_notification
    }

    pub const fn set_enable_notification(&mut self, enable_notification: Option<bool>) {
        self.enable_notification = enable_notification;
    }

    #[must_use]
    pub fn with_enable_notification(mut self, enable_notification: bool) -> Self {
        self.enable_notification = Some(enable_notification);
        self
    }

    /// Enables auto building for the branch.
    pub const fn enable_auto_build(&self) -> Option<bool> {
        self.enable_auto_build
    }

    pub const fn set_enable_auto_build(&mut self, enable_auto_build: Option<bool>) {
        self.enable_auto_build = enable_auto_build;
    }

    #[must_use]
    pub fn with_enable_auto_build(mut self, enable_auto_build: bool) -> Self {
        self.enable_auto_build = Some(enable_auto_build);
        self
    }

    /// The environment variables for the branch.
    pub const fn environment_variables(&self) -> Option<&BTreeMap<String, String>> {
        self.environment_variables.as_ref()
    }

    pub fn set_environment_variables(
        &mut self,
        environment_variables: Option<BTreeMap<String, String>>,
    ) {
        self.environment_variables = environment_variables;
    }

    #[must_use]
    pub fn with_environment_variables(
        mut self,
        environment_variables: BTreeMap<String, String>,
    ) -> Self {
        self.environment_variables = Some(environment_variables);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_environment_variables_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(
            &mut self.environment_variables,
            "environmentVariables",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_environment_variables_entries(&mut self) -> &mut Self {
        self.environment_variables = None;
        self
    }

    /// The basic authorization credentials for the branch.
    pub fn basic_auth_credentials(&self) -> Option<&str> {
        self.basic_auth_credentials.as_deref()
    }

    pub fn set_basic_auth_credentials(&mut self, basic_auth_credentials: Option<String>) {
        self.basic_auth_credentials = basic_auth_credentials;
    }

    #[must_use]
    pub fn with_basic_auth_credentials(
        mut self,
        basic_auth_credentials: impl Into<String>,
    ) -> Self {
        self.basic_auth_credentials = Some(basic_auth_credentials.into());
        self
    }

    /// Enables basic authorization for the branch.
    pub const fn enable_basic_auth(&self) -> Option<bool> {
        self.enable_basic_auth
    }

    pub const fn set_enable_basic_auth(&mut self, enable_basic_auth: Option<bool>) {
        self.enable_basic_auth = enable_basic_auth;
    }

    #[must_use]
    pub fn with_enable_basic_auth(mut self, enable_basic_auth: bool) -> Self {
        self.enable_basic_auth = Some(enable_basic_auth);
        self
    }

    /// The tag for the branch.
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

    /// The build specification (build spec) for the branch.
    pub fn build_spec(&self) -> Option<&str> {
        self.build_spec.as_deref()
    }

    pub fn set_build_spec(&mut self, build_spec: Option<String>) {
        self.build_spec = build_spec;
    }

    #[must_use]
    pub fn with_build_spec(mut self, build_spec: impl Into<String>) -> Self {
        self.build_spec = Some(build_spec.into());
        self
    }

    /// The content Time To Live (TTL) for the website in seconds.
    pub fn ttl(&self) -> Option<&str> {
        self.ttl.as_deref()
    }

    pub fn set_ttl(&mut self, ttl: Option<String>) {
        self.ttl = ttl;
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    /// The display name for a branch. This is used as the default domain prefix.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Enables pull request preview for this branch.
    pub const fn enable_pull_request_preview(&self) -> Option<bool> {
        self.enable_pull_request_preview
    }

    pub const fn set_enable_pull_request_preview(
        &mut self,
        enable_pull_request_preview: Option<bool>,
    ) {
        self.enable_pull_request_preview = enable_pull_request_preview;
    }

    #[must_use]
    pub fn with_enable_pull_request_preview(mut self, enable_pull_request_preview: bool) -> Self {
        self.enable_pull_request_preview = Some(enable_pull_request_preview);
        self
    }

    /// The Amplify environment name for the pull request.
    pub fn pull_request_environment_name(&self) -> Option<&str> {
        self.pull_request_environment_name.as_deref()
    }

    pub fn set_pull_request_environment_name(
        &mut self,
        pull_request_environment_name: Option<String>,
    ) {
        self.pull_request_environment_name = pull_request_environment_name;
    }

    #[must_use]
    pub fn with_pull_request_environment_name(
        mut self,
        pull_request_environment_name: impl Into<String>,
    ) -> Self {
        self.pull_request_environment_name = Some(pull_request_environment_name.into());
        self
    }

    /// The ARN for a backend environment that is part of an Amplify app.
    pub fn backend_environment_arn(&self) -> Option<&str> {
        self.backend_environment_arn.as_deref()
    }

    pub fn set_backend_environment_arn(&mut self, backend_environment_arn: Option<String>) {
        self.backend_environment_arn = backend_environment_arn;
    }

    #[must_use]
    pub fn with_backend_environment_arn(
        mut self,
        backend_environment_arn: impl Into<String>,
    ) -> Self {
        self.backend_environment_arn = Some(backend_environment_arn.into());
        self
    }
}

impl PartialEq for CreateBranchRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.description == other.description
            && self.stage == other.stage
            && self.framework == other.framework
            && self.enable_notification == other.enable_notification
            && self.enable_auto_build == other.enable_auto_build
            && self.environment_variables == other.environment_variables
            && self.basic_auth_credentials == other.basic_auth_credentials
            && self.enable_basic_auth == other.enable_basic_auth
            && self.tags == other.tags
            && self.build_spec == other.build_spec
            && self.ttl == other.ttl
            && self.display_name == other.display_name
            && self.enable_pull_request_preview == other.enable_pull_request_preview
            && self.pull_request_environment_name == other.pull_request_environment_name
            && self.backend_environment_arn == other.backend_environment_arn
    }
}

impl Eq for CreateBranchRequest {}

impl Hash for CreateBranchRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.description.hash(state);
        self.stage.hash(state);
        self.framework.hash(state);
        self.enable_notification.hash(state);
        self.enable_auto_build.hash(state);
        self.environment_variables.hash(state);
        self.basic_auth_credentials.hash(state);
        self.enable_basic_auth.hash(state);
        self.tags.hash(state);
        self.build_spec.hash(state);
        self.ttl.hash(state);
        self.display_name.hash(state);
        self.enable_pull_request_preview.hash(state);
        self.pull_request_environment_name.hash(state);
        self.backend_environment_arn.hash(state);
    }
}

impl Shape for CreateBranchRequest {
    fn shape_name(&self) -> &'static str {
        "CreateBranchRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.description.as_ref()),
            Field::of(&d[3], self.stage.as_ref()),
            Field::of(&d[4], self.framework.as_ref()),
            Field::of(&d[5], self.enable_notification.as_ref()),
            Field::of(&d[6], self.enable_auto_build.as_ref()),
            Field::of(&d[7], self.environment_variables.as_ref()),
            Field::of(&d[8], self.basic_auth_credentials.as_ref()),
            Field::of(&d[9], self.enable_basic_auth.as_ref()),
            Field::of(&d[10], self.tags.as_ref()),
            Field::of(&d[11], self.build_spec.as_ref()),
            Field::of(&d[12], self.ttl.as_ref()),
            Field::of(&d[13], self.display_name.as_ref()),
            Field::of(&d[14], self.enable_pull_request_preview.as_ref()),
            Field::of(&d[15], self.pull_request_environment_name.as_ref()),
            Field::of(&d[16], self.backend_environment_arn.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateBranchRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateBranchRequest {
    type Output = CreateBranchResult;

    const NAME: &'static str = "CreateBranch";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/branches";
}

/// The result structure for the CreateBranch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<Branch>,
}

impl CreateBranchResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branch"),
    ];

    /// Describes the branch for an Amplify app, which maps to a third-party repository branch.
    pub const fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn set_branch(&mut self, branch: Option<Branch>) {
        self.branch = branch;
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branch = Some(branch);
        self
    }
}

impl Shape for CreateBranchResult {
    fn shape_name(&self) -> &'static str {
        "CreateBranchResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.branch.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the DeleteBranch operation.
///
/// Routed as `DELETE /apps/{appId}/branches/{branchName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteBranchRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
}

impl DeleteBranchRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
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

    /// The name for the branch.
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
}

impl PartialEq for DeleteBranchRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
    }
}

impl Eq for DeleteBranchRequest {}

impl Hash for DeleteBranchRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
    }
}

impl Shape for DeleteBranchRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteBranchRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteBranchRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteBranchRequest {
    type Output = DeleteBranchResult;

    const NAME: &'static str = "DeleteBranch";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}";
}

/// The result structure for the DeleteBranch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<Branch>,
}

impl DeleteBranchResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branch"),
    ];

    /// Describes the branch for an Amplify app, which maps to a third-party repository branch.
    pub const fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn set_branch(&mut self, branch: Option<Branch>) {
        self.branch = branch;
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branch = Some(branch);
        self
    }
}

impl Shape for DeleteBranchResult {
    fn shape_name(&self) -> &'static str {
        "DeleteBranchResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.branch.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the GetBranch operation.
///
/// Routed as `GET /apps/{appId}/branches/{branchName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBranchRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
}

impl GetBranchRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
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

    /// The name for the branch.
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
}

impl PartialEq for GetBranchRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
    }
}

impl Eq for GetBranchRequest {}

impl Hash for GetBranchRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
    }
}

impl Shape for GetBranchRequest {
    fn shape_name(&self) -> &'static str {
        "GetBranchRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetBranchRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetBranchRequest {
    type Output = GetBranchResult;

    const NAME: &'static str = "GetBranch";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}";
}

/// The result structure for the GetBranch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<Branch>,
}

impl GetBranchResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branch"),
    ];

    /// Describes the branch for an Amplify app, which maps to a third-party repository branch.
    pub const fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn set_branch(&mut self, branch: Option<Branch>) {
        self.branch = branch;
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branch = Some(branch);
        self
    }
}

impl Shape for GetBranchResult {
    fn shape_name(&self) -> &'static str {
        "GetBranchResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.branch.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListBranches operation.
///
/// Routed as `GET /apps/{appId}/branches`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBranchesRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListBranchesRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
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

impl PartialEq for ListBranchesRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListBranchesRequest {}

impl Hash for ListBranchesRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListBranchesRequest {
    fn shape_name(&self) -> &'static str {
        "ListBranchesRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.next_token.as_ref()),
            Field::of(&d[2], self.max_results.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for ListBranchesRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListBranchesRequest {
    type Output = ListBranchesResult;

    const NAME: &'static str = "ListBranches";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/branches";
}

impl PageRequest for ListBranchesRequest {
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

/// The result structure for the ListBranches operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListBranchesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    branches: Option<Vec<Branch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListBranchesResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branches"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// A list of branches for an Amplify app.
    pub fn branches(&self) -> Option<&[Branch]> {
        self.branches.as_deref()
    }

    pub fn set_branches(&mut self, branches: Option<Vec<Branch>>) {
        self.branches = branches;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_branches(mut self, items: impl IntoIterator<Item = Branch>) -> Self {
        self.branches.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListBranchesResult {
    fn shape_name(&self) -> &'static str {
        "ListBranchesResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.branches.as_ref()),
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

impl Paginated for ListBranchesResult {
    type Item = Branch;

    fn items(&self) -> Option<&[Branch]> {
        self.branches.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

/// The request structure for the update branch request.
///
/// Routed as `POST /apps/{appId}/branches/{branchName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBranchRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basic_auth_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_basic_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_pull_request_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request_environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment_arn: Option<String>,
}

impl UpdateBranchRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("framework").max_length(255),
        FieldDescriptor::new("stage").one_of(Stage::VALUES),
        FieldDescriptor::new("enableNotification"),
        FieldDescriptor::new("enableAutoBuild"),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("ttl"),
        FieldDescriptor::new("displayName").max_length(255),
        FieldDescriptor::new("enablePullRequestPreview"),
        FieldDescriptor::new("pullRequestEnvironmentName").max_length(20),
        FieldDescriptor::new("backendEnvironmentArn").length(1, 1000),
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

    /// The name for the branch.
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

    /// The description for the branch.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The framework for the branch.
    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn set_framework(&mut self, framework: Option<String>) {
        self.framework = framework;
    }

    #[must_use]
    pub fn with_framework(mut self, framework: impl Into<String>) -> Self {
        self.framework = Some(framework.into());
        self
    }

    /// Describes the current stage for the branch.
    ///
    /// One of [`Stage`]; stored as its wire string.
    pub fn stage(&self) -> Option<&str> {
        self.stage.as_deref()
    }

    pub fn set_stage(&mut self, stage: Option<String>) {
        self.stage = stage;
    }

    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Enables notifications for the branch.
    pub const fn enable_notification(&self) -> Option<bool> {
        self.enable_notification
    }

    pub const fn set_enable_notification(&mut self, enable_notification: Option<bool>) {
        self.enable_notification = enable_notification;
    }

    #[must_use]
    pub fn with_enable_notification(mut self, enable_notification: bool) -> Self {
        self.enable_notification = Some(enable_notification);
        self
    }

    /// Enables auto building for the branch.
    pub const fn enable_auto_build(&self) -> Option<bool> {
        self.enable_auto_build
    }

    pub const fn set_enable_auto_build(&mut self, enable_auto_build: Option<bool>) {
        self.enable_auto_build = enable_auto_build;
    }

    #[must_use]
    pub fn with_enable_auto_build(mut self, enable_auto_build: bool) -> Self {
        self.enable_auto_build = Some(enable_auto_build);
        self
    }

    /// The environment variables for the branch.
    pub const fn environment_variables(&self) -> Option<&BTreeMap<String, String>> {
        self.environment_variables.as_ref()
    }

    pub fn set_environment_variables(
        &mut self,
        environment_variables: Option<BTreeMap<String, String>>,
    ) {
        self.environment_variables = environment_variables;
    }

    #[must_use]
    pub fn with_environment_variables(
        mut self,
        environment_variables: BTreeMap<String, String>,
    ) -> Self {
        self.environment_variables = Some(environment_variables);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_environment_variables_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(
            &mut self.environment_variables,
            "environmentVariables",
            key.into(),
            value.into(),
        )?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_environment_variables_entries(&mut self) -> &mut Self {
        self.environment_variables = None;
        self
    }

    /// The basic authorization credentials for the branch.
    pub fn basic_auth_credentials(&self) -> Option<&str> {
        self.basic_auth_credentials.as_deref()
    }

    pub fn set_basic_auth_credentials(&mut self, basic_auth_credentials: Option<String>) {
        self.basic_auth_credentials = basic_auth_credentials;
    }

    #[must_use]
    pub fn with_basic_auth_credentials(
        mut self,
        basic_auth_credentials: impl Into<String>,
    ) -> Self {
        self.basic_auth_credentials = Some(basic_auth_credentials.into());
        self
    }

    /// Enables basic authorization for the branch.
    pub const fn enable_basic_auth(&self) -> Option<bool> {
        self.enable_basic_auth
    }

    pub const fn set_enable_basic_auth(&mut self, enable_basic_auth: Option<bool>) {
        self.enable_basic_auth = enable_basic_auth;
    }

    #[must_use]
    pub fn with_enable_basic_auth(mut self, enable_basic_auth: bool) -> Self {
        self.enable_basic_auth = Some(enable_basic_auth);
        self
    }

    /// The build specification (build spec) for the branch.
    pub fn build_spec(&self) -> Option<&str> {
        self.build_spec.as_deref()
    }

    pub fn set_build_spec(&mut self, build_spec: Option<String>) {
        self.build_spec = build_spec;
    }

    #[must_use]
    pub fn with_build_spec(mut self, build_spec: impl Into<String>) -> Self {
        self.build_spec = Some(build_spec.into());
        self
    }

    /// The content Time To Live (TTL) for the website in seconds.
    pub fn ttl(&self) -> Option<&str> {
        self.ttl.as_deref()
    }

    pub fn set_ttl(&mut self, ttl: Option<String>) {
        self.ttl = ttl;
    }

    #[must_use]
    pub fn with_ttl(mut self, ttl: impl Into<String>) -> Self {
        self.ttl = Some(ttl.into());
        self
    }

    /// The display name for a branch. This is used as the default domain prefix.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, display_name: Option<String>) {
        self.display_name = display_name;
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Enables pull request preview for this branch.
    pub const fn enable_pull_request_preview(&self) -> Option<bool> {
        self.enable_pull_request_preview
    }

    pub const fn set_enable_pull_request_preview(
        &mut self,
        enable_pull_request_preview: Option<bool>,
    ) {
        self.enable_pull_request_preview = enable_pull_request_preview;
    }

    #[must_use]
    pub fn with_enable_pull_request_preview(mut self, enable_pull_request_preview: bool) -> Self {
        self.enable_pull_request_preview = Some(enable_pull_request_preview);
        self
    }

    /// The Amplify environment name for the pull request.
    pub fn pull_request_environment_name(&self) -> Option<&str> {
        self.pull_request_environment_name.as_deref()
    }

    pub fn set_pull_request_environment_name(
        &mut self,
        pull_request_environment_name: Option<String>,
    ) {
        self.pull_request_environment_name = pull_request_environment_name;
    }

    #[must_use]
    pub fn with_pull_request_environment_name(
        mut self,
        pull_request_environment_name: impl Into<String>,
    ) -> Self {
        self.pull_request_environment_name = Some(pull_request_environment_name.into());
        self
    }

    /// The ARN for a backend environment that is part of an Amplify app.
    pub fn backend_environment_arn(&self) -> Option<&str> {
        self.backend_environment_arn.as_deref()
    }

    pub fn set_backend_environment_arn(&mut self, backend_environment_arn: Option<String>) {
        self.backend_environment_arn = backend_environment_arn;
    }

    #[must_use]
    pub fn with_backend_environment_arn(
        mut self,
        backend_environment_arn: impl Into<String>,
    ) -> Self {
        self.backend_environment_arn = Some(backend_environment_arn.into());
        self
    }
}

impl PartialEq for UpdateBranchRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.description == other.description
            && self.framework == other.framework
            && self.stage == other.stage
            && self.enable_notification == other.enable_notification
            && self.enable_auto_build == other.enable_auto_build
            && self.environment_variables == other.environment_variables
            && self.basic_auth_credentials == other.basic_auth_credentials
            && self.enable_basic_auth == other.enable_basic_auth
            && self.build_spec == other.build_spec
            && self.ttl == other.ttl
            && self.display_name == other.display_name
            && self.enable_pull_request_preview == other.enable_pull_request_preview
            && self.pull_request_environment_name == other.pull_request_environment_name
            && self.backend_environment_arn == other.backend_environment_arn
    }
}

impl Eq for UpdateBranchRequest {}

impl Hash for UpdateBranchRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.description.hash(state);
        self.framework.hash(state);
        self.stage.hash(state);
        self.enable_notification.hash(state);
        self.enable_auto_build.hash(state);
        self.environment_variables.hash(state);
        self.basic_auth_credentials.hash(state);
        self.enable_basic_auth.hash(state);
        self.build_spec.hash(state);
        self.ttl.hash(state);
        self.display_name.hash(state);
        self.enable_pull_request_preview.hash(state);
        self.pull_request_environment_name.hash(state);
        self.backend_environment_arn.hash(state);
    }
}

impl Shape for UpdateBranchRequest {
    fn shape_name(&self) -> &'static str {
        "UpdateBranchRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.description.as_ref()),
            Field::of(&d[3], self.framework.as_ref()),
            Field::of(&d[4], self.stage.as_ref()),
            Field::of(&d[5], self.enable_notification.as_ref()),
            Field::of(&d[6], self.enable_auto_build.as_ref()),
            Field::of(&d[7], self.environment_variables.as_ref()),
            Field::of(&d[8], self.basic_auth_credentials.as_ref()),
            Field::of(&d[9], self.enable_basic_auth.as_ref()),
            Field::of(&d[10], self.build_spec.as_ref()),
            Field::of(&d[11], self.ttl.as_ref()),
            Field::of(&d[12], self.display_name.as_ref()),
            Field::of(&d[13], self.enable_pull_request_preview.as_ref()),
            Field::of(&d[14], self.pull_request_environment_name.as_ref()),
            Field::of(&d[15], self.backend_environment_arn.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for UpdateBranchRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for UpdateBranchRequest {
    type Output = UpdateBranchResult;

    const NAME: &'static str = "UpdateBranch";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}";
}

/// The result structure for the UpdateBranch operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateBranchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<Branch>,
}

impl UpdateBranchResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branch"),
    ];

    /// Describes the branch for an Amplify app, which maps to a third-party repository branch.
    pub const fn branch(&self) -> Option<&Branch> {
        self.branch.as_ref()
    }

    pub fn set_branch(&mut self, branch: Option<Branch>) {
        self.branch = branch;
    }

    #[must_use]
    pub fn with_branch(mut self, branch: Branch) -> Self {
        self.branch = Some(branch);
        self
    }
}

impl Shape for UpdateBranchResult {
    fn shape_name(&self) -> &'static str {
        "UpdateBranchResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.branch.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    CreateBranchRequest,
    CreateBranchResult,
    DeleteBranchRequest,
    DeleteBranchResult,
    GetBranchRequest,
    GetBranchResult,
    ListBranchesRequest,
    ListBranchesResult,
    UpdateBranchRequest,
    UpdateBranchResult,
);
