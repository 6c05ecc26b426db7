//! Manual deployments for apps that are not connected to a repository.
//!
//! `CreateDeployment` hands back upload URLs and a job ID; `StartDeployment`
//! starts that job once the files are uploaded.

use std::any::Any;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ModelResult;
use crate::model::{Field, FieldDescriptor, Shape, insert_entry, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::JobSummary;

/// The request structure for the CreateDeployment operation.
///
/// Routed as `POST /apps/{appId}/branches/{branchName}/deployments`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDeploymentRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_map: Option<BTreeMap<String, String>>,
}

impl CreateDeploymentRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("fileMap"),
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

    /// The name for the branch, for the job.
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

    /// An optional file map that contains the file name as the key and the file content md5 hash as
    /// the value.
    pub const fn file_map(&self) -> Option<&BTreeMap<String, String>> {
        self.file_map.as_ref()
    }

    pub fn set_file_map(&mut self, file_map: Option<BTreeMap<String, String>>) {
        self.file_map = file_map;
    }

    #[must_use]
    pub fn with_file_map(mut self, file_map: BTreeMap<String, String>) -> Self {
        self.file_map = Some(file_map);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_file_map_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(&mut self.file_map, "fileMap", key.into(), value.into())?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_file_map_entries(&mut self) -> &mut Self {
        self.file_map = None;
        self
    }
}

impl PartialEq for CreateDeploymentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.file_map == other.file_map
    }
}

impl Eq for CreateDeploymentRequest {}

impl Hash for CreateDeploymentRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.file_map.hash(state);
    }
}

impl Shape for CreateDeploymentRequest {
    fn shape_name(&self) -> &'static str {
        "CreateDeploymentRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.file_map.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateDeploymentRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateDeploymentRequest {
    type Output = CreateDeploymentResult;

    const NAME: &'static str = "CreateDeployment";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/deployments";
}

/// The result structure for the CreateDeployment operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDeploymentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_upload_urls: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    zip_upload_url: Option<String>,
}

impl CreateDeploymentResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobId").max_length(255),
        FieldDescriptor::new("fileUploadUrls"),
        FieldDescriptor::new("zipUploadUrl").max_length(1000),
    ];

    /// The job ID for this deployment, to be supplied to the start deployment API.
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

    /// When the fileMap argument is provided in the request, fileUploadUrls contains a map of file
    /// names to upload URLs.
    pub const fn file_upload_urls(&self) -> Option<&BTreeMap<String, String>> {
        self.file_upload_urls.as_ref()
    }

    pub fn set_file_upload_urls(&mut self, file_upload_urls: Option<BTreeMap<String, String>>) {
        self.file_upload_urls = file_upload_urls;
    }

    #[must_use]
    pub fn with_file_upload_urls(mut self, file_upload_urls: BTreeMap<String, String>) -> Self {
        self.file_upload_urls = Some(file_upload_urls);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_file_upload_urls_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(&mut self.file_upload_urls, "fileUploadUrls", key.into(), value.into())?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_file_upload_urls_entries(&mut self) -> &mut Self {
        self.file_upload_urls = None;
        self
    }

    /// When the fileMap argument is not provided in the request, this zipUploadUrl is returned.
    pub fn zip_upload_url(&self) -> Option<&str> {
        self.zip_upload_url.as_deref()
    }

    pub fn set_zip_upload_url(&mut self, zip_upload_url: Option<String>) {
        self.zip_upload_url = zip_upload_url;
    }

    #[must_use]
    pub fn with_zip_upload_url(mut self, zip_upload_url: impl Into<String>) -> Self {
        self.zip_upload_url = Some(zip_upload_url.into());
        self
    }
}

impl Shape for CreateDeploymentResult {
    fn shape_name(&self) -> &'static str {
        "CreateDeploymentResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.job_id.as_ref()),
            Field::of(&d[1], self.file_upload_urls.as_ref()),
            Field::of(&d[2], self.zip_upload_url.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the StartDeployment operation.
///
/// Routed as `POST /apps/{appId}/branches/{branchName}/deployments/start`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartDeploymentRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_url: Option<String>,
}

impl StartDeploymentRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255),
        FieldDescriptor::new("sourceUrl").max_length(1000),
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

    /// The name for the branch, for the job.
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

    /// The job ID for this deployment, generated by the create deployment request.
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

    /// The source URL for this deployment, used when calling start deployment without create
    /// deployment.
    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref()
    }

    pub fn set_source_url(&mut self, source_url: Option<String>) {
        self.source_url = source_url;
    }

    #[must_use]
    pub fn with_source_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }
}

impl PartialEq for StartDeploymentRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
            && self.source_url == other.source_url
    }
}

impl Eq for StartDeploymentRequest {}

impl Hash for StartDeploymentRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
        self.source_url.hash(state);
    }
}

impl Shape for StartDeploymentRequest {
    fn shape_name(&self) -> &'static str {
        "StartDeploymentRequest"
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
            Field::of(&d[3], self.source_url.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for StartDeploymentRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for StartDeploymentRequest {
    type Output = StartDeploymentResult;

    const NAME: &'static str = "StartDeployment";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/deployments/start";
}

/// The result structure for the StartDeployment operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartDeploymentResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_summary: Option<JobSummary>,
}

impl StartDeploymentResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobSummary"),
    ];

    /// The summary for the job.
    pub const fn job_summary(&self) -> Option<&JobSummary> {
        self.job_summary.as_ref()
    }

    pub fn set_job_summary(&mut self, job_summary: Option<JobSummary>) {
        self.job_summary = job_summary;
    }

    #[must_use]
    pub fn with_job_summary(mut self, job_summary: JobSummary) -> Self {
        self.job_summary = Some(job_summary);
        self
    }
}

impl Shape for StartDeploymentResult {
    fn shape_name(&self) -> &'static str {
        "StartDeploymentResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.job_summary.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    CreateDeploymentRequest,
    CreateDeploymentResult,
    StartDeploymentRequest,
    StartDeploymentResult,
);
