//! Create, read, update, delete and list apps.

use std::any::Any;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::enums::Platform;
use crate::error::ModelResult;
use crate::model::{Field, FieldDescriptor, Shape, insert_entry, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::{App, AutoBranchCreationConfig, CustomRule};

/// The request structure used to create apps in Amplify.
///
/// Routed as `POST /apps`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAppRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iam_service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oauth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_branch_auto_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_branch_auto_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_basic_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basic_auth_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_rules: Option<Vec<CustomRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_branch_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_config: Option<AutoBranchCreationConfig>,
}

impl CreateAppRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("name").length(1, 255).required(),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("repository").max_length(1000),
        FieldDescriptor::new("platform").one_of(Platform::VALUES),
        FieldDescriptor::new("iamServiceRoleArn").length(1, 1000),
        FieldDescriptor::new("oauthToken").max_length(100),
        FieldDescriptor::new("accessToken").length(1, 255),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("enableBranchAutoBuild"),
        FieldDescriptor::new("enableBranchAutoDeletion"),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("customRules"),
        FieldDescriptor::new("tags"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("enableAutoBranchCreation"),
        FieldDescriptor::new("autoBranchCreationPatterns"),
        FieldDescriptor::new("autoBranchCreationConfig"),
    ];

    /// The name for the Amplify app.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The description for the Amplify app.
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

    /// The repository for the Amplify app.
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn set_repository(&mut self, repository: Option<String>) {
        self.repository = repository;
    }

    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// The platform or framework for the Amplify app.
    ///
    /// One of [`Platform`]; stored as its wire string.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// The IAM service role ARN for the Amplify app.
    pub fn iam_service_role_arn(&self) -> Option<&str> {
        self.iam_service_role_arn.as_deref()
    }

    pub fn set_iam_service_role_arn(&mut self, iam_service_role_arn: Option<String>) {
        self.iam_service_role_arn = iam_service_role_arn;
    }

    #[must_use]
    pub fn with_iam_service_role_arn(mut self, iam_service_role_arn: impl Into<String>) -> Self {
        self.iam_service_role_arn = Some(iam_service_role_arn.into());
        self
    }

    /// The OAuth token for a third-party source control system, used to create a webhook and a
    /// read-only deploy key.
    pub fn oauth_token(&self) -> Option<&str> {
        self.oauth_token.as_deref()
    }

    pub fn set_oauth_token(&mut self, oauth_token: Option<String>) {
        self.oauth_token = oauth_token;
    }

    #[must_use]
    pub fn with_oauth_token(mut self, oauth_token: impl Into<String>) -> Self {
        self.oauth_token = Some(oauth_token.into());
        self
    }

    /// The personal access token for a third-party source control system.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn set_access_token(&mut self, access_token: Option<String>) {
        self.access_token = access_token;
    }

    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    /// The environment variables map for the Amplify app.
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

    /// Enables the auto building of branches for the Amplify app.
    pub const fn enable_branch_auto_build(&self) -> Option<bool> {
        self.enable_branch_auto_build
    }

    pub const fn set_enable_branch_auto_build(&mut self, enable_branch_auto_build: Option<bool>) {
        self.enable_branch_auto_build = enable_branch_auto_build;
    }

    #[must_use]
    pub fn with_enable_branch_auto_build(mut self, enable_branch_auto_build: bool) -> Self {
        self.enable_branch_auto_build = Some(enable_branch_auto_build);
        self
    }

    /// Automatically disconnects a branch when it is deleted from the Git repository.
    pub const fn enable_branch_auto_deletion(&self) -> Option<bool> {
        self.enable_branch_auto_deletion
    }

    pub const fn set_enable_branch_auto_deletion(
        &mut self,
        enable_branch_auto_deletion: Option<bool>,
    ) {
        self.enable_branch_auto_deletion = enable_branch_auto_deletion;
    }

    #[must_use]
    pub fn with_enable_branch_auto_deletion(mut self, enable_branch_auto_deletion: bool) -> Self {
        self.enable_branch_auto_deletion = Some(enable_branch_auto_deletion);
        self
    }

    /// Enables basic authorization for the Amplify app.
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

    /// The credentials for basic authorization for the Amplify app.
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

    /// The custom rewrite and redirect rules for the Amplify app.
    pub fn custom_rules(&self) -> Option<&[CustomRule]> {
        self.custom_rules.as_deref()
    }

    pub fn set_custom_rules(&mut self, custom_rules: Option<Vec<CustomRule>>) {
        self.custom_rules = custom_rules;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_custom_rules(mut self, items: impl IntoIterator<Item = CustomRule>) -> Self {
        self.custom_rules.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// The tag for the Amplify app.
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

    /// The build specification (build spec) for the Amplify app.
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

    /// Enables automated branch creation for the Amplify app.
    pub const fn enable_auto_branch_creation(&self) -> Option<bool> {
        self.enable_auto_branch_creation
    }

    pub const fn set_enable_auto_branch_creation(
        &mut self,
        enable_auto_branch_creation: Option<bool>,
    ) {
        self.enable_auto_branch_creation = enable_auto_branch_creation;
    }

    #[must_use]
    pub fn with_enable_auto_branch_creation(mut self, enable_auto_branch_creation: bool) -> Self {
        self.enable_auto_branch_creation = Some(enable_auto_branch_creation);
        self
    }

    /// The automated branch creation glob patterns for the Amplify app.
    pub fn auto_branch_creation_patterns(&self) -> Option<&[String]> {
        self.auto_branch_creation_patterns.as_deref()
    }

    pub fn set_auto_branch_creation_patterns(
        &mut self,
        auto_branch_creation_patterns: Option<Vec<String>>,
    ) {
        self.auto_branch_creation_patterns = auto_branch_creation_patterns;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_auto_branch_creation_patterns<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auto_branch_creation_patterns
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// The automated branch creation configuration for the Amplify app.
    pub const fn auto_branch_creation_config(&self) -> Option<&AutoBranchCreationConfig> {
        self.auto_branch_creation_config.as_ref()
    }

    pub fn set_auto_branch_creation_config(
        &mut self,
        auto_branch_creation_config: Option<AutoBranchCreationConfig>,
    ) {
        self.auto_branch_creation_config = auto_branch_creation_config;
    }

    #[must_use]
    pub fn with_auto_branch_creation_config(
        mut self,
        auto_branch_creation_config: AutoBranchCreationConfig,
    ) -> Self {
        self.auto_branch_creation_config = Some(auto_branch_creation_config);
        self
    }
}

impl PartialEq for CreateAppRequest {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.repository == other.repository
            && self.platform == other.platform
            && self.iam_service_role_arn == other.iam_service_role_arn
            && self.oauth_token == other.oauth_token
            && self.access_token == other.access_token
            && self.environment_variables == other.environment_variables
            && self.enable_branch_auto_build == other.enable_branch_auto_build
            && self.enable_branch_auto_deletion == other.enable_branch_auto_deletion
            && self.enable_basic_auth == other.enable_basic_auth
            && self.basic_auth_credentials == other.basic_auth_credentials
            && self.custom_rules == other.custom_rules
            && self.tags == other.tags
            && self.build_spec == other.build_spec
            && self.enable_auto_branch_creation == other.enable_auto_branch_creation
            && self.auto_branch_creation_patterns == other.auto_branch_creation_patterns
            && self.auto_branch_creation_config == other.auto_branch_creation_config
    }
}

impl Eq for CreateAppRequest {}

impl Hash for CreateAppRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.description.hash(state);
        self.repository.hash(state);
        self.platform.hash(state);
        self.iam_service_role_arn.hash(state);
        self.oauth_token.hash(state);
        self.access_token.hash(state);
        self.environment_variables.hash(state);
        self.enable_branch_auto_build.hash(state);
        self.enable_branch_auto_deletion.hash(state);
        self.enable_basic_auth.hash(state);
        self.basic_auth_credentials.hash(state);
        self.custom_rules.hash(state);
        self.tags.hash(state);
        self.build_spec.hash(state);
        self.enable_auto_branch_creation.hash(state);
        self.auto_branch_creation_patterns.hash(state);
        self.auto_branch_creation_config.hash(state);
    }
}

impl Shape for CreateAppRequest {
    fn shape_name(&self) -> &'static str {
        "CreateAppRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.name.as_ref()),
            Field::of(&d[1], self.description.as_ref()),
            Field::of(&d[2], self.repository.as_ref()),
            Field::of(&d[3], self.platform.as_ref()),
            Field::of(&d[4], self.iam_service_role_arn.as_ref()),
            Field::of(&d[5], self.oauth_token.as_ref()),
            Field::of(&d[6], self.access_token.as_ref()),
            Field::of(&d[7], self.environment_variables.as_ref()),
            Field::of(&d[8], self.enable_branch_auto_build.as_ref()),
            Field::of(&d[9], self.enable_branch_auto_deletion.as_ref()),
            Field::of(&d[10], self.enable_basic_auth.as_ref()),
            Field::of(&d[11], self.basic_auth_credentials.as_ref()),
            Field::of(&d[12], self.custom_rules.as_ref()),
            Field::of(&d[13], self.tags.as_ref()),
            Field::of(&d[14], self.build_spec.as_ref()),
            Field::of(&d[15], self.enable_auto_branch_creation.as_ref()),
            Field::of(&d[16], self.auto_branch_creation_patterns.as_ref()),
            Field::of(&d[17], self.auto_branch_creation_config.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateAppRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateAppRequest {
    type Output = CreateAppResult;

    const NAME: &'static str = "CreateApp";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps";
}

/// The result structure for the CreateApp operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAppResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<App>,
}

impl CreateAppResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("app"),
    ];

    /// Represents the different branches of a repository for building, deploying, and hosting an
    /// Amplify app.
    pub const fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    pub fn set_app(&mut self, app: Option<App>) {
        self.app = app;
    }

    #[must_use]
    pub fn with_app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }
}

impl Shape for CreateAppResult {
    fn shape_name(&self) -> &'static str {
        "CreateAppResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// Describes the request structure for the delete app request.
///
/// Routed as `DELETE /apps/{appId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteAppRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
}

impl DeleteAppRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
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
}

impl PartialEq for DeleteAppRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
    }
}

impl Eq for DeleteAppRequest {}

impl Hash for DeleteAppRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
    }
}

impl Shape for DeleteAppRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteAppRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app_id.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteAppRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteAppRequest {
    type Output = DeleteAppResult;

    const NAME: &'static str = "DeleteApp";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}";
}

/// The result structure for the DeleteApp operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteAppResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<App>,
}

impl DeleteAppResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("app"),
    ];

    /// Represents the different branches of a repository for building, deploying, and hosting an
    /// Amplify app.
    pub const fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    pub fn set_app(&mut self, app: Option<App>) {
        self.app = app;
    }

    #[must_use]
    pub fn with_app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }
}

impl Shape for DeleteAppResult {
    fn shape_name(&self) -> &'static str {
        "DeleteAppResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the GetApp operation.
///
/// Routed as `GET /apps/{appId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAppRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
}

impl GetAppRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
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
}

impl PartialEq for GetAppRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
    }
}

impl Eq for GetAppRequest {}

impl Hash for GetAppRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
    }
}

impl Shape for GetAppRequest {
    fn shape_name(&self) -> &'static str {
        "GetAppRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app_id.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetAppRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetAppRequest {
    type Output = GetAppResult;

    const NAME: &'static str = "GetApp";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}";
}

/// The result structure for the GetApp operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetAppResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<App>,
}

impl GetAppResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("app"),
    ];

    /// Represents the different branches of a repository for building, deploying, and hosting an
    /// Amplify app.
    pub const fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    pub fn set_app(&mut self, app: Option<App>) {
        self.app = app;
    }

    #[must_use]
    pub fn with_app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }
}

impl Shape for GetAppResult {
    fn shape_name(&self) -> &'static str {
        "GetAppResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the list apps request.
///
/// Routed as `GET /apps`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAppsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListAppsRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("nextToken").max_length(2000).in_query(),
        FieldDescriptor::new("maxResults").range(0, 100).in_query(),
    ];

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

impl PartialEq for ListAppsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListAppsRequest {}

impl Hash for ListAppsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListAppsRequest {
    fn shape_name(&self) -> &'static str {
        "ListAppsRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.next_token.as_ref()),
            Field::of(&d[1], self.max_results.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for ListAppsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListAppsRequest {
    type Output = ListAppsResult;

    const NAME: &'static str = "ListApps";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps";
}

impl PageRequest for ListAppsRequest {
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

/// The result structure for the ListApps operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListAppsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    apps: Option<Vec<App>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListAppsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("apps"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// A list of Amplify apps.
    pub fn apps(&self) -> Option<&[App]> {
        self.apps.as_deref()
    }

    pub fn set_apps(&mut self, apps: Option<Vec<App>>) {
        self.apps = apps;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_apps(mut self, items: impl IntoIterator<Item = App>) -> Self {
        self.apps.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListAppsResult {
    fn shape_name(&self) -> &'static str {
        "ListAppsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.apps.as_ref()),
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

impl Paginated for ListAppsResult {
    type Item = App;

    fn items(&self) -> Option<&[App]> {
        self.apps.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

/// The request structure for the update app request.
///
/// Routed as `POST /apps/{appId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateAppRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iam_service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_branch_auto_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_branch_auto_deletion: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_basic_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basic_auth_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_rules: Option<Vec<CustomRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_branch_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_config: Option<AutoBranchCreationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    oauth_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
}

impl UpdateAppRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("name").length(1, 255),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("platform").one_of(Platform::VALUES),
        FieldDescriptor::new("iamServiceRoleArn").length(1, 1000),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("enableBranchAutoBuild"),
        FieldDescriptor::new("enableBranchAutoDeletion"),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("customRules"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("enableAutoBranchCreation"),
        FieldDescriptor::new("autoBranchCreationPatterns"),
        FieldDescriptor::new("autoBranchCreationConfig"),
        FieldDescriptor::new("repository").max_length(1000),
        FieldDescriptor::new("oauthToken").max_length(100),
        FieldDescriptor::new("accessToken").length(1, 255),
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

    /// The name for the Amplify app.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The description for the Amplify app.
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

    /// The platform or framework for the Amplify app.
    ///
    /// One of [`Platform`]; stored as its wire string.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref()
    }

    pub fn set_platform(&mut self, platform: Option<String>) {
        self.platform = platform;
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    /// The IAM service role ARN for the Amplify app.
    pub fn iam_service_role_arn(&self) -> Option<&str> {
        self.iam_service_role_arn.as_deref()
    }

    pub fn set_iam_service_role_arn(&mut self, iam_service_role_arn: Option<String>) {
        self.iam_service_role_arn = iam_service_role_arn;
    }

    #[must_use]
    pub fn with_iam_service_role_arn(mut self, iam_service_role_arn: impl Into<String>) -> Self {
        self.iam_service_role_arn = Some(iam_service_role_arn.into());
        self
    }

    /// The environment variables map for the Amplify app.
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

    /// Enables the auto building of branches for the Amplify app.
    pub const fn enable_branch_auto_build(&self) -> Option<bool> {
        self.enable_branch_auto_build
    }

    pub const fn set_enable_branch_auto_build(&mut self, enable_branch_auto_build: Option<bool>) {
        self.enable_branch_auto_build = enable_branch_auto_build;
    }

    #[must_use]
    pub fn with_enable_branch_auto_build(mut self, enable_branch_auto_build: bool) -> Self {
        self.enable_branch_auto_build = Some(enable_branch_auto_build);
        self
    }

    /// Automatically disconnects a branch when it is deleted from the Git repository.
    pub const fn enable_branch_auto_deletion(&self) -> Option<bool> {
        self.enable_branch_auto_deletion
    }

    pub const fn set_enable_branch_auto_deletion(
        &mut self,
        enable_branch_auto_deletion: Option<bool>,
    ) {
        self.enable_branch_auto_deletion = enable_branch_auto_deletion;
    }

    #[must_use]
    pub fn with_enable_branch_auto_deletion(mut self, enable_branch_auto_deletion: bool) -> Self {
        self.enable_branch_auto_deletion = Some(enable_branch_auto_deletion);
        self
    }

    /// Enables basic authorization for the Amplify app.
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

    /// The credentials for basic authorization for the Amplify app.
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

    /// The custom rewrite and redirect rules for the Amplify app.
    pub fn custom_rules(&self) -> Option<&[CustomRule]> {
        self.custom_rules.as_deref()
    }

    pub fn set_custom_rules(&mut self, custom_rules: Option<Vec<CustomRule>>) {
        self.custom_rules = custom_rules;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_custom_rules(mut self, items: impl IntoIterator<Item = CustomRule>) -> Self {
        self.custom_rules.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// The build specification (build spec) for the Amplify app.
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

    /// Enables automated branch creation for the Amplify app.
    pub const fn enable_auto_branch_creation(&self) -> Option<bool> {
        self.enable_auto_branch_creation
    }

    pub const fn set_enable_auto_branch_creation(
        &mut self,
        enable_auto_branch_creation: Option<bool>,
    ) {
        self.enable_auto_branch_creation = enable_auto_branch_creation;
    }

    #[must_use]
    pub fn with_enable_auto_branch_creation(mut self, enable_auto_branch_creation: bool) -> Self {
        self.enable_auto_branch_creation = Some(enable_auto_branch_creation);
        self
    }

    /// The automated branch creation glob patterns for the Amplify app.
    pub fn auto_branch_creation_patterns(&self) -> Option<&[String]> {
        self.auto_branch_creation_patterns.as_deref()
    }

    pub fn set_auto_branch_creation_patterns(
        &mut self,
        auto_branch_creation_patterns: Option<Vec<String>>,
    ) {
        self.auto_branch_creation_patterns = auto_branch_creation_patterns;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_auto_branch_creation_patterns<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auto_branch_creation_patterns
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// The automated branch creation configuration for the Amplify app.
    pub const fn auto_branch_creation_config(&self) -> Option<&AutoBranchCreationConfig> {
        self.auto_branch_creation_config.as_ref()
    }

    pub fn set_auto_branch_creation_config(
        &mut self,
        auto_branch_creation_config: Option<AutoBranchCreationConfig>,
    ) {
        self.auto_branch_creation_config = auto_branch_creation_config;
    }

    #[must_use]
    pub fn with_auto_branch_creation_config(
        mut self,
        auto_branch_creation_config: AutoBranchCreationConfig,
    ) -> Self {
        self.auto_branch_creation_config = Some(auto_branch_creation_config);
        self
    }

    /// The name of the repository for the Amplify app.
    pub fn repository(&self) -> Option<&str> {
        self.repository.as_deref()
    }

    pub fn set_repository(&mut self, repository: Option<String>) {
        self.repository = repository;
    }

    #[must_use]
    pub fn with_repository(mut self, repository: impl Into<String>) -> Self {
        self.repository = Some(repository.into());
        self
    }

    /// The OAuth token for a third-party source control system.
    pub fn oauth_token(&self) -> Option<&str> {
        self.oauth_token.as_deref()
    }

    pub fn set_oauth_token(&mut self, oauth_token: Option<String>) {
        self.oauth_token = oauth_token;
    }

    #[must_use]
    pub fn with_oauth_token(mut self, oauth_token: impl Into<String>) -> Self {
        self.oauth_token = Some(oauth_token.into());
        self
    }

    /// The personal access token for a third-party source control system.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn set_access_token(&mut self, access_token: Option<String>) {
        self.access_token = access_token;
    }

    #[must_use]
    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }
}

impl PartialEq for UpdateAppRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.name == other.name
            && self.description == other.description
            && self.platform == other.platform
            && self.iam_service_role_arn == other.iam_service_role_arn
            && self.environment_variables == other.environment_variables
            && self.enable_branch_auto_build == other.enable_branch_auto_build
            && self.enable_branch_auto_deletion == other.enable_branch_auto_deletion
            && self.enable_basic_auth == other.enable_basic_auth
            && self.basic_auth_credentials == other.basic_auth_credentials
            && self.custom_rules == other.custom_rules
            && self.build_spec == other.build_spec
            && self.enable_auto_branch_creation == other.enable_auto_branch_creation
            && self.auto_branch_creation_patterns == other.auto_branch_creation_patterns
            && self.auto_branch_creation_config == other.auto_branch_creation_config
            && self.repository == other.repository
            && self.oauth_token == other.oauth_token
            && self.access_token == other.access_token
    }
}

impl Eq for UpdateAppRequest {}

impl Hash for UpdateAppRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.name.hash(state);
        self.description.hash(state);
        self.platform.hash(state);
        self.iam_service_role_arn.hash(state);
        self.environment_variables.hash(state);
        self.enable_branch_auto_build.hash(state);
        self.enable_branch_auto_deletion.hash(state);
        self.enable_basic_auth.hash(state);
        self.basic_auth_credentials.hash(state);
        self.custom_rules.hash(state);
        self.build_spec.hash(state);
        self.enable_auto_branch_creation.hash(state);
        self.auto_branch_creation_patterns.hash(state);
        self.auto_branch_creation_config.hash(state);
        self.repository.hash(state);
        self.oauth_token.hash(state);
        self.access_token.hash(state);
    }
}

impl Shape for UpdateAppRequest {
    fn shape_name(&self) -> &'static str {
        "UpdateAppRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.name.as_ref()),
            Field::of(&d[2], self.description.as_ref()),
            Field::of(&d[3], self.platform.as_ref()),
            Field::of(&d[4], self.iam_service_role_arn.as_ref()),
            Field::of(&d[5], self.environment_variables.as_ref()),
            Field::of(&d[6], self.enable_branch_auto_build.as_ref()),
            Field::of(&d[7], self.enable_branch_auto_deletion.as_ref()),
            Field::of(&d[8], self.enable_basic_auth.as_ref()),
            Field::of(&d[9], self.basic_auth_credentials.as_ref()),
            Field::of(&d[10], self.custom_rules.as_ref()),
            Field::of(&d[11], self.build_spec.as_ref()),
            Field::of(&d[12], self.enable_auto_branch_creation.as_ref()),
            Field::of(&d[13], self.auto_branch_creation_patterns.as_ref()),
            Field::of(&d[14], self.auto_branch_creation_config.as_ref()),
            Field::of(&d[15], self.repository.as_ref()),
            Field::of(&d[16], self.oauth_token.as_ref()),
            Field::of(&d[17], self.access_token.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for UpdateAppRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for UpdateAppRequest {
    type Output = UpdateAppResult;

    const NAME: &'static str = "UpdateApp";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}";
}

/// The result structure for the UpdateApp operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateAppResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    app: Option<App>,
}

impl UpdateAppResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("app"),
    ];

    /// Represents the different branches of a repository for building, deploying, and hosting an
    /// Amplify app.
    pub const fn app(&self) -> Option<&App> {
        self.app.as_ref()
    }

    pub fn set_app(&mut self, app: Option<App>) {
        self.app = app;
    }

    #[must_use]
    pub fn with_app(mut self, app: App) -> Self {
        self.app = Some(app);
        self
    }
}

impl Shape for UpdateAppResult {
    fn shape_name(&self) -> &'static str {
        "UpdateAppResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.app.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    CreateAppRequest,
    CreateAppResult,
    DeleteAppRequest,
    DeleteAppResult,
    GetAppRequest,
    GetAppResult,
    ListAppsRequest,
    ListAppsResult,
    UpdateAppRequest,
    UpdateAppResult,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_empty_list_result_renders_and_ends_listing() {
        let result = ListAppsResult::default().with_apps(Vec::new());
        assert_eq!(result.to_string(), "{apps: []}");
        assert!(!result.has_more_pages());
        assert_eq!(result.items().map(<[App]>::len), Some(0));
    }

    #[test]
    fn test_continue_from_copies_token() {
        let request = ListAppsRequest::default().with_max_results(10);
        let page = ListAppsResult::default()
            .with_apps([App::default().with_app_id("d1")])
            .with_next_token("tok-2");

        let next = request.continue_from(&page).unwrap();
        assert_eq!(next.page_token(), Some("tok-2"));
        assert_eq!(next.max_results(), Some(10));

        let last = ListAppsResult::default().with_next_token("");
        assert!(request.continue_from(&last).is_none());
    }

    #[test]
    fn test_default_page_size_only_fills_absent() {
        let settings = Settings::with_defaults();
        let request = ListAppsRequest::default().with_default_page_size(&settings);
        assert_eq!(request.max_results(), Some(50));

        let request = ListAppsRequest::default().with_max_results(5).with_default_page_size(&settings);
        assert_eq!(request.max_results(), Some(5));
    }

    #[test]
    fn test_request_metadata_ignored_by_equality() {
        let plain = GetAppRequest::default().with_app_id("d1");
        let tagged = GetAppRequest::default()
            .with_app_id("d1")
            .with_custom_header("x-trace-id", "abc");
        assert_eq!(plain, tagged);
        assert_eq!(plain.model_hash(), tagged.model_hash());
        assert_eq!(tagged.metadata().custom_headers().len(), 1);
    }

    #[test]
    fn test_distinct_result_types_are_never_equal() {
        let get = GetAppResult::default();
        let delete = DeleteAppResult::default();
        assert_eq!(get.render(), delete.render());
        assert_eq!(get.model_hash(), delete.model_hash());
        assert!(!get.model_eq(&delete));
        assert!(get.model_eq(&GetAppResult::default()));
    }
}
