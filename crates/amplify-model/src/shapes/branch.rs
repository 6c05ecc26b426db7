//! Branches, which map an app to a repository branch.
//!
//! A branch carries most of the per-deployment settings: stage, build spec,
//! environment variables, basic auth and pull request previews.

use std::any::Any;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::Stage;
use crate::error::ModelResult;
use crate::model::{
    Field, FieldDescriptor, Shape, insert_entry, millis_precision, model_traits, same_model,
};

/// The branch for an Amplify app, which maps to a third-party repository branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branch {
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_notification: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    update_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_variables: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    active_job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_number_of_jobs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_basic_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    basic_auth_credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_spec: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    associated_resources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_pull_request_preview: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pull_request_environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_branch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment_arn: Option<String>,
}

impl Branch {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("branchArn").max_length(1000),
        FieldDescriptor::new("branchName").length(1, 255),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("tags"),
        FieldDescriptor::new("stage").one_of(Stage::VALUES),
        FieldDescriptor::new("displayName").max_length(255),
        FieldDescriptor::new("enableNotification"),
        FieldDescriptor::new("createTime"),
        FieldDescriptor::new("updateTime"),
        FieldDescriptor::new("environmentVariables"),
        FieldDescriptor::new("enableAutoBuild"),
        FieldDescriptor::new("customDomains"),
        FieldDescriptor::new("framework").max_length(255),
        FieldDescriptor::new("activeJobId").max_length(1000),
        FieldDescriptor::new("totalNumberOfJobs").max_length(1000),
        FieldDescriptor::new("enableBasicAuth"),
        FieldDescriptor::new("thumbnailUrl").length(1, 2000),
        FieldDescriptor::new("basicAuthCredentials").max_length(2000),
        FieldDescriptor::new("buildSpec").length(1, 25000),
        FieldDescriptor::new("ttl"),
        FieldDescriptor::new("associatedResources"),
        FieldDescriptor::new("enablePullRequestPreview"),
        FieldDescriptor::new("pullRequestEnvironmentName").max_length(20),
        FieldDescriptor::new("destinationBranch").length(1, 255),
        FieldDescriptor::new("sourceBranch").length(1, 255),
        FieldDescriptor::new("backendEnvironmentArn").length(1, 1000),
    ];

    /// The Amazon Resource Name (ARN) for a branch that is part of an Amplify app.
    pub fn branch_arn(&self) -> Option<&str> {
        self.branch_arn.as_deref()
    }

    pub fn set_branch_arn(&mut self, branch_arn: Option<String>) {
        self.branch_arn = branch_arn;
    }

    #[must_use]
    pub fn with_branch_arn(mut self, branch_arn: impl Into<String>) -> Self {
        self.branch_arn = Some(branch_arn.into());
        self
    }

    /// The name for the branch that is part of an Amplify app.
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

    /// The description for the branch that is part of an Amplify app.
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

    /// The tag for the branch of an Amplify app.
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

    /// The current stage for the branch that is part of an Amplify app.
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

    /// The display name for the branch. This is used as the default domain prefix.
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

    /// Enables notifications for a branch that is part of an Amplify app.
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

    /// The creation date and time for a branch that is part of an Amplify app.
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

    /// The last updated date and time for a branch that is part of an Amplify app.
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

    /// The environment variables specific to a branch of an Amplify app.
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

    /// Enables auto-building on push for a branch of an Amplify app.
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

    /// The custom domains for a branch of an Amplify app.
    pub fn custom_domains(&self) -> Option<&[String]> {
        self.custom_domains.as_deref()
    }

    pub fn set_custom_domains(&mut self, custom_domains: Option<Vec<String>>) {
        self.custom_domains = custom_domains;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_custom_domains<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_domains
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// The framework for a branch of an Amplify app.
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

    /// The ID of the active job for a branch of an Amplify app.
    pub fn active_job_id(&self) -> Option<&str> {
        self.active_job_id.as_deref()
    }

    pub fn set_active_job_id(&mut self, active_job_id: Option<String>) {
        self.active_job_id = active_job_id;
    }

    #[must_use]
    pub fn with_active_job_id(mut self, active_job_id: impl Into<String>) -> Self {
        self.active_job_id = Some(active_job_id.into());
        self
    }

    /// The total number of jobs that are part of an Amplify app.
    pub fn total_number_of_jobs(&self) -> Option<&str> {
        self.total_number_of_jobs.as_deref()
    }

    pub fn set_total_number_of_jobs(&mut self, total_number_of_jobs: Option<String>) {
        self.total_number_of_jobs = total_number_of_jobs;
    }

    #[must_use]
    pub fn with_total_number_of_jobs(mut self, total_number_of_jobs: impl Into<String>) -> Self {
        self.total_number_of_jobs = Some(total_number_of_jobs.into());
        self
    }

    /// Enables basic authorization for a branch of an Amplify app.
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

    /// The thumbnail URL for the branch of an Amplify app.
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

    /// The basic authorization credentials for a branch of an Amplify app.
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

    /// The build specification (build spec) content for the branch of an Amplify app.
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

    /// The content Time to Live (TTL) for the website in seconds.
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

    /// A list of custom resources that are linked to this branch.
    pub fn associated_resources(&self) -> Option<&[String]> {
        self.associated_resources.as_deref()
    }

    pub fn set_associated_resources(&mut self, associated_resources: Option<Vec<String>>) {
        self.associated_resources = associated_resources;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_associated_resources<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.associated_resources
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// Enables pull request preview for the branch.
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

    /// The destination branch if the branch is a pull request branch.
    pub fn destination_branch(&self) -> Option<&str> {
        self.destination_branch.as_deref()
    }

    pub fn set_destination_branch(&mut self, destination_branch: Option<String>) {
        self.destination_branch = destination_branch;
    }

    #[must_use]
    pub fn with_destination_branch(mut self, destination_branch: impl Into<String>) -> Self {
        self.destination_branch = Some(destination_branch.into());
        self
    }

    /// The source branch if the branch is a pull request branch.
    pub fn source_branch(&self) -> Option<&str> {
        self.source_branch.as_deref()
    }

    pub fn set_source_branch(&mut self, source_branch: Option<String>) {
        self.source_branch = source_branch;
    }

    #[must_use]
    pub fn with_source_branch(mut self, source_branch: impl Into<String>) -> Self {
        self.source_branch = Some(source_branch.into());
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

impl Shape for Branch {
    fn shape_name(&self) -> &'static str {
        "Branch"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.branch_arn.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.description.as_ref()),
            Field::of(&d[3], self.tags.as_ref()),
            Field::of(&d[4], self.stage.as_ref()),
            Field::of(&d[5], self.display_name.as_ref()),
            Field::of(&d[6], self.enable_notification.as_ref()),
            Field::of(&d[7], self.create_time.as_ref()),
            Field::of(&d[8], self.update_time.as_ref()),
            Field::of(&d[9], self.environment_variables.as_ref()),
            Field::of(&d[10], self.enable_auto_build.as_ref()),
            Field::of(&d[11], self.custom_domains.as_ref()),
            Field::of(&d[12], self.framework.as_ref()),
            Field::of(&d[13], self.active_job_id.as_ref()),
            Field::of(&d[14], self.total_number_of_jobs.as_ref()),
            Field::of(&d[15], self.enable_basic_auth.as_ref()),
            Field::of(&d[16], self.thumbnail_url.as_ref()),
            Field::of(&d[17], self.basic_auth_credentials.as_ref()),
            Field::of(&d[18], self.build_spec.as_ref()),
            Field::of(&d[19], self.ttl.as_ref()),
            Field::of(&d[20], self.associated_resources.as_ref()),
            Field::of(&d[21], self.enable_pull_request_preview.as_ref()),
            Field::of(&d[22], self.pull_request_environment_name.as_ref()),
            Field::of(&d[23], self.destination_branch.as_ref()),
            Field::of(&d[24], self.source_branch.as_ref()),
            Field::of(&d[25], self.backend_environment_arn.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(Branch);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Stage;
    use crate::error::ModelError;

    #[test]
    fn test_enum_field_stores_wire_string() {
        let branch = Branch::default().with_stage(Stage::PullRequest);
        assert_eq!(branch.stage(), Some("PULL_REQUEST"));
        assert_eq!(branch.stage().map(str::parse::<Stage>).transpose().unwrap(), Some(Stage::PullRequest));
    }

    #[test]
    fn test_add_tags_entry_rejects_duplicate_key() {
        let mut branch = Branch::default().with_branch_name("main");
        branch
            .add_tags_entry("team", "web")
            .and_then(|b| b.add_tags_entry("env", "prod"))
            .unwrap();
        assert_eq!(branch.tags().map(BTreeMap::len), Some(2));
        let before = branch.clone();

        let err = branch.add_tags_entry("team", "mobile").unwrap_err();
        assert!(matches!(err, ModelError::DuplicateEntryKey { field: "tags", ref key } if key == "team"));

        // The failed call leaves the branch as it was
        assert_eq!(branch, before);
        assert_eq!(branch.branch_name(), Some("main"));
        assert_eq!(
            branch.tags().and_then(|tags| tags.get("team")).map(String::as_str),
            Some("web")
        );
    }

    #[test]
    fn test_clear_entries_leaves_field_absent() {
        let mut branch = Branch::default();
        branch
            .add_environment_variables_entry("NODE_ENV", "production")
            .unwrap()
            .clear_environment_variables_entries();
        assert_eq!(branch.environment_variables(), None);
        assert_eq!(branch.render(), "{}");
    }

    #[test]
    fn test_render_follows_declaration_order() {
        let branch = Branch::default()
            .with_ttl("5")
            .with_branch_name("main")
            .with_enable_auto_build(true)
            .with_custom_domains(["a.example.com", "b.example.com"]);
        assert_eq!(
            branch.to_string(),
            "{branchName: main,enableAutoBuild: true,customDomains: [a.example.com, b.example.com],ttl: 5}"
        );
    }
}
