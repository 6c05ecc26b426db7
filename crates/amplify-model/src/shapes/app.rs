//! App shapes: the app itself, its production branch, redirect rules and
//! automatic branch creation settings.

use std::any::Any;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Platform, Stage};
use crate::error::ModelResult;
use crate::model::{
    Field, FieldDescriptor, Shape, insert_entry, millis_precision, model_traits, same_model,
};

/// An Amplify app, which is a collection of branches connected to a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct App {
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repository: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    iam_service_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_domain: Option<String>,
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
    production_branch: Option<ProductionBranch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_branch_creation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_branch_creation_config: Option<AutoBranchCreationConfig>,
}

impl App {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20),
        FieldDescriptor::new("appArn").max_length(1000),
        FieldDescriptor::new("name").length(1, 255),
        FieldDescriptor::new("tags"),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("repository").max_length(1000),
        FieldDescriptor::new("platform").one_of(Platform::VALUES),
        FieldDescriptor::new("createTime"),
        FieldDescriptor::new("updateTime"),
        FieldDescriptor::new("iamServiceRoleArn").length(1, 1000),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("defaultDomain").length(1, 1000),
        FieldDescriptor::new("enableBranchAutoBuild"),
        FieldDescriptor::new("enableBranchAutoDeletion"),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("customRules"),
        FieldDescriptor::new("productionBranch"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("enableAutoBranchCreation"),
        FieldDescriptor::new("autoBranchCreationPatterns"),
        FieldDescriptor::new("autoBranchCreationConfig"),
    ];

    /// The unique ID of the Amplify app.
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

    /// The Amazon Resource Name (ARN) of the Amplify app.
    pub fn app_arn(&self) -> Option<&str> {
        self.app_arn.as_deref()
    }

    pub fn set_app_arn(&mut self, app_arn: Option<String>) {
        self.app_arn = app_arn;
    }

    #[must_use]
    pub fn with_app_arn(mut self, app_arn: impl Into<String>) -> Self {
        self.app_arn = Some(app_arn.into());
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

    /// The platform for the Amplify app.
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

    /// Creation date and time for the Amplify app.
    pub const fn create_time(&self) -> Option<DateTime<Utc>> {
        self.create_time
    }

    pub fn set_create_time(&mut self, create_time: Option<DateTime<Utc>>) {
        self.create_time = create_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_create_time(mut self, create_time: DateTime<Utc>) -> Self {
        self.create_time = Some(millis_precision(create_time));
        self
    }

    /// Updated date and time for the Amplify app.
    pub const fn update_time(&self) -> Option<DateTime<Utc>> {
        self.update_time
    }

    pub fn set_update_time(&mut self, update_time: Option<DateTime<Utc>>) {
        self.update_time = update_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_update_time(mut self, update_time: DateTime<Utc>) -> Self {
        self.update_time = Some(millis_precision(update_time));
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

    /// The environment variables for the Amplify app.
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

    /// The default domain for the Amplify app.
    pub fn default_domain(&self) -> Option<&str> {
        self.default_domain.as_deref()
    }

    pub fn set_default_domain(&mut self, default_domain: Option<String>) {
        self.default_domain = default_domain;
    }

    #[must_use]
    pub fn with_default_domain(mut self, default_domain: impl Into<String>) -> Self {
        self.default_domain = Some(default_domain.into());
        self
    }

    /// Enables the auto-building of branches for the Amplify app.
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

    /// Enables basic authorization for the Amplify app's branches.
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

    /// The basic authorization credentials for branches of the Amplify app.
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

    /// The custom redirect and rewrite rules for the Amplify app.
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

    /// The production branch of the Amplify app.
    pub const fn production_branch(&self) -> Option<&ProductionBranch> {
        self.production_branch.as_ref()
    }

    pub fn set_production_branch(&mut self, production_branch: Option<ProductionBranch>) {
        self.production_branch = production_branch;
    }

    #[must_use]
    pub fn with_production_branch(mut self, production_branch: ProductionBranch) -> Self {
        self.production_branch = Some(production_branch);
        self
    }

    /// The build specification (build spec) content for the Amplify app.
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

impl Shape for App {
    fn shape_name(&self) -> &'static str {
        "App"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.app_arn.as_ref()),
            Field::of(&d[2], self.name.as_ref()),
            Field::of(&d[3], self.tags.as_ref()),
            Field::of(&d[4], self.description.as_ref()),
            Field::of(&d[5], self.repository.as_ref()),
            Field::of(&d[6], self.platform.as_ref()),
            Field::of(&d[7], self.create_time.as_ref()),
            Field::of(&d[8], self.update_time.as_ref()),
            Field::of(&d[9], self.iam_service_role_arn.as_ref()),
            Field::of(&d[10], self.environment_variables.as_ref()),
            Field::of(&d[11], self.default_domain.as_ref()),
            Field::of(&d[12], self.enable_branch_auto_build.as_ref()),
            Field::of(&d[13], self.enable_branch_auto_deletion.as_ref()),
            Field::of(&d[14], self.enable_basic_auth.as_ref()),
            Field::of(&d[15], self.basic_auth_credentials.as_ref()),
            Field::of(&d[16], self.custom_rules.as_ref()),
            Field::of(&d[17], self.production_branch.as_ref()),
            Field::of(&d[18], self.build_spec.as_ref()),
            Field::of(&d[19], self.enable_auto_branch_creation.as_ref()),
            Field::of(&d[20], self.auto_branch_creation_patterns.as_ref()),
            Field::of(&d[21], self.auto_branch_creation_config.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// Settings applied to branches that are created automatically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoBranchCreationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
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
    enable_pull_request_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request_environment_name: Option<String>,
}

impl AutoBranchCreationConfig {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("stage").one_of(Stage::VALUES),
        FieldDescriptor::new("framework").max_length(255),
        FieldDescriptor::new("enableAutoBuild"),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("enablePullRequestPreview"),
        FieldDescriptor::new("pullRequestEnvironmentName").max_length(20),
    ];

    /// The stage for the auto created branch.
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

    /// The framework for the auto created branch.
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

    /// Enables auto building for the auto created branch.
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

    /// The environment variables for the auto created branch.
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

    /// The basic authorization credentials for the auto created branch.
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

    /// Enables basic authorization for the auto created branch.
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

    /// The build specification (build spec) for the auto created branch.
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

    /// Enables pull request preview for the auto created branch.
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
}

impl Shape for AutoBranchCreationConfig {
    fn shape_name(&self) -> &'static str {
        "AutoBranchCreationConfig"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.stage.as_ref()),
            Field::of(&d[1], self.framework.as_ref()),
            Field::of(&d[2], self.enable_auto_build.as_ref()),
            Field::of(&d[3], self.environment_variables.as_ref()),
            Field::of(&d[4], self.basic_auth_credentials.as_ref()),
            Field::of(&d[5], self.enable_basic_auth.as_ref()),
            Field::of(&d[6], self.build_spec.as_ref()),
            Field::of(&d[7], self.enable_pull_request_preview.as_ref()),
            Field::of(&d[8], self.pull_request_environment_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// A custom rewrite or redirect rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    condition: Option<String>,
}

impl CustomRule {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("source").length(1, 2048),
        FieldDescriptor::new("target").length(1, 2048),
        FieldDescriptor::new("status").length(3, 7),
        FieldDescriptor::new("condition").length(1, 2048),
    ];

    /// The source pattern for a URL rewrite or redirect rule.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: Option<String>) {
        self.source = source;
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The target pattern for a URL rewrite or redirect rule.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn set_target(&mut self, target: Option<String>) {
        self.target = target;
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// The status code for a URL rewrite or redirect rule.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The condition for a URL rewrite or redirect rule, such as a country code.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_deref()
    }

    pub fn set_condition(&mut self, condition: Option<String>) {
        self.condition = condition;
    }

    #[must_use]
    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }
}

impl Shape for CustomRule {
    fn shape_name(&self) -> &'static str {
        "CustomRule"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.source.as_ref()),
            Field::of(&d[1], self.target.as_ref()),
            Field::of(&d[2], self.status.as_ref()),
            Field::of(&d[3], self.condition.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The information about a production branch for an Amplify app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductionBranch {
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    last_deploy_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
}

impl ProductionBranch {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("lastDeployTime"),
        FieldDescriptor::new("status").length(3, 7),
        FieldDescriptor::new("thumbnailUrl").length(1, 2000),
        FieldDescriptor::new("branchName").length(1, 255),
    ];

    /// The last deploy time of the production branch.
    pub const fn last_deploy_time(&self) -> Option<DateTime<Utc>> {
        self.last_deploy_time
    }

    pub fn set_last_deploy_time(&mut self, last_deploy_time: Option<DateTime<Utc>>) {
        self.last_deploy_time = last_deploy_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_last_deploy_time(mut self, last_deploy_time: DateTime<Utc>) -> Self {
        self.last_deploy_time = Some(millis_precision(last_deploy_time));
        self
    }

    /// The status of the production branch.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: Option<String>) {
        self.status = status;
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// The thumbnail URL for the production branch.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    pub fn set_thumbnail_url(&mut self, thumbnail_url: Option<String>) {
        self.thumbnail_url = thumbnail_url;
    }

    #[must_use]
    pub fn with_thumbnail_url(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(thumbnail_url.into());
        self
    }

    /// The branch name for the production branch.
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

impl Shape for ProductionBranch {
    fn shape_name(&self) -> &'static str {
        "ProductionBranch"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.last_deploy_time.as_ref()),
            Field::of(&d[1], self.status.as_ref()),
            Field::of(&d[2], self.thumbnail_url.as_ref()),
            Field::of(&d[3], self.branch_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    App,
    AutoBranchCreationConfig,
    CustomRule,
    ProductionBranch,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldValue, combine_hashes, string_hash};

    #[test]
    fn test_nested_shapes_render_recursively() {
        let app = App::default()
            .with_name("site")
            .with_custom_rules([
                CustomRule::default().with_source("/<*>").with_target("/index.html").with_status("404-200"),
            ])
            .with_production_branch(ProductionBranch::default().with_branch_name("main"));
        assert_eq!(
            app.render(),
            "{name: site,customRules: [{source: /<*>,target: /index.html,status: 404-200}],productionBranch: {branchName: main}}"
        );
    }

    #[test]
    fn test_hash_matches_field_fold() {
        let rule = CustomRule::default().with_source("/a").with_condition("US");
        let expected = combine_hashes([string_hash("/a"), 0, 0, string_hash("US")]);
        assert_eq!(rule.model_hash(), expected);
        assert_eq!(rule.value_hash(), expected);
    }

    #[test]
    fn test_empty_sequence_is_not_absent() {
        let app = App::default().with_auto_branch_creation_patterns(Vec::<String>::new());
        assert_eq!(app.auto_branch_creation_patterns(), Some(&[][..]));
        assert_eq!(app.render(), "{autoBranchCreationPatterns: []}");
        assert_ne!(app, App::default());
    }
}
