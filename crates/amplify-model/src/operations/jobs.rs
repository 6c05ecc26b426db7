//! Job operations.

use std::any::Any;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::JobType;
use crate::model::{Field, FieldDescriptor, Shape, millis_precision, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::{Job, JobSummary};

/// The request structure for the DeleteJob operation.
///
/// Routed as `DELETE /apps/{appId}/branches/{branchName}/jobs/{jobId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteJobRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
}

impl DeleteJobRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255).in_path(),
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
}

impl PartialEq for DeleteJobRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
    }
}

impl Eq for DeleteJobRequest {}

impl Hash for DeleteJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
    }
}

impl Shape for DeleteJobRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteJobRequest"
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
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteJobRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteJobRequest {
    type Output = DeleteJobResult;

    const NAME: &'static str = "DeleteJob";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs/{jobId}";
}

/// The result structure for the DeleteJob operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_summary: Option<JobSummary>,
}

impl DeleteJobResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobSummary"),
    ];

    /// Describes the summary for an execution job for an Amplify app.
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

impl Shape for DeleteJobResult {
    fn shape_name(&self) -> &'static str {
        "DeleteJobResult"
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

/// The request structure for the GetJob operation.
///
/// Routed as `GET /apps/{appId}/branches/{branchName}/jobs/{jobId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetJobRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
}

impl GetJobRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255).in_path(),
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

    /// The branch name for the job.
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
}

impl PartialEq for GetJobRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
    }
}

impl Eq for GetJobRequest {}

impl Hash for GetJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
    }
}

impl Shape for GetJobRequest {
    fn shape_name(&self) -> &'static str {
        "GetJobRequest"
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
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetJobRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetJobRequest {
    type Output = GetJobResult;

    const NAME: &'static str = "GetJob";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs/{jobId}";
}

/// The result structure for the GetJob operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job: Option<Job>,
}

impl GetJobResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("job"),
    ];

    /// Describes an execution job for an Amplify app.
    pub const fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn set_job(&mut self, job: Option<Job>) {
        self.job = job;
    }

    #[must_use]
    pub fn with_job(mut self, job: Job) -> Self {
        self.job = Some(job);
        self
    }
}

impl Shape for GetJobResult {
    fn shape_name(&self) -> &'static str {
        "GetJobResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.job.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListJobs operation.
///
/// Routed as `GET /apps/{appId}/branches/{branchName}/jobs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListJobsRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
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

    /// The name for a branch.
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

impl PartialEq for ListJobsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListJobsRequest {}

impl Hash for ListJobsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListJobsRequest {
    fn shape_name(&self) -> &'static str {
        "ListJobsRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
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

impl AmplifyRequest for ListJobsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListJobsRequest {
    type Output = ListJobsResult;

    const NAME: &'static str = "ListJobs";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs";
}

impl PageRequest for ListJobsRequest {
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

/// The result structure for the ListJobs operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListJobsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_summaries: Option<Vec<JobSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListJobsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobSummaries"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// The result structure for the list job result request.
    pub fn job_summaries(&self) -> Option<&[JobSummary]> {
        self.job_summaries.as_deref()
    }

    pub fn set_job_summaries(&mut self, job_summaries: Option<Vec<JobSummary>>) {
        self.job_summaries = job_summaries;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_job_summaries(mut self, items: impl IntoIterator<Item = JobSummary>) -> Self {
        self.job_summaries.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListJobsResult {
    fn shape_name(&self) -> &'static str {
        "ListJobsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.job_summaries.as_ref()),
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

impl Paginated for ListJobsResult {
    type Item = JobSummary;

    fn items(&self) -> Option<&[JobSummary]> {
        self.job_summaries.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

/// The request structure for the StartJob operation.
///
/// Routed as `POST /apps/{appId}/branches/{branchName}/jobs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartJobRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    commit_time: Option<DateTime<Utc>>,
}

impl StartJobRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255),
        FieldDescriptor::new("jobType").one_of(JobType::VALUES).required(),
        FieldDescriptor::new("jobReason").max_length(255),
        FieldDescriptor::new("commitId").max_length(255),
        FieldDescriptor::new("commitMessage").max_length(10000),
        FieldDescriptor::new("commitTime"),
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

    /// The branch name for the job.
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

    /// The unique ID for an existing job. This is required if the value of jobType is RETRY.
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

    /// Describes the type for the job.
    ///
    /// One of [`JobType`]; stored as its wire string.
    pub fn job_type(&self) -> Option<&str> {
        self.job_type.as_deref()
    }

    pub fn set_job_type(&mut self, job_type: Option<String>) {
        self.job_type = job_type;
    }

    #[must_use]
    pub fn with_job_type(mut self, job_type: impl Into<String>) -> Self {
        self.job_type = Some(job_type.into());
        self
    }

    /// A descriptive reason for starting this job.
    pub fn job_reason(&self) -> Option<&str> {
        self.job_reason.as_deref()
    }

    pub fn set_job_reason(&mut self, job_reason: Option<String>) {
        self.job_reason = job_reason;
    }

    #[must_use]
    pub fn with_job_reason(mut self, job_reason: impl Into<String>) -> Self {
        self.job_reason = Some(job_reason.into());
        self
    }

    /// The commit ID from a third-party repository provider for the job.
    pub fn commit_id(&self) -> Option<&str> {
        self.commit_id.as_deref()
    }

    pub fn set_commit_id(&mut self, commit_id: Option<String>) {
        self.commit_id = commit_id;
    }

    #[must_use]
    pub fn with_commit_id(mut self, commit_id: impl Into<String>) -> Self {
        self.commit_id = Some(commit_id.into());
        self
    }

    /// The commit message from a third-party repository provider for the job.
    pub fn commit_message(&self) -> Option<&str> {
        self.commit_message.as_deref()
    }

    pub fn set_commit_message(&mut self, commit_message: Option<String>) {
        self.commit_message = commit_message;
    }

    #[must_use]
    pub fn with_commit_message(mut self, commit_message: impl Into<String>) -> Self {
        self.commit_message = Some(commit_message.into());
        self
    }

    /// The commit date and time for the job.
    pub const fn commit_time(&self) -> Option<DateTime<Utc>> {
        self.commit_time
    }

    pub fn set_commit_time(&mut self, commit_time: Option<DateTime<Utc>>) {
        self.commit_time = commit_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_commit_time(mut self, commit_time: DateTime<Utc>) -> Self {
        self.commit_time = Some(millis_precision(commit_time));
        self
    }
}

impl PartialEq for StartJobRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
            && self.job_type == other.job_type
            && self.job_reason == other.job_reason
            && self.commit_id == other.commit_id
            && self.commit_message == other.commit_message
            && self.commit_time == other.commit_time
    }
}

impl Eq for StartJobRequest {}

impl Hash for StartJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
        self.job_type.hash(state);
        self.job_reason.hash(state);
        self.commit_id.hash(state);
        self.commit_message.hash(state);
        self.commit_time.hash(state);
    }
}

impl Shape for StartJobRequest {
    fn shape_name(&self) -> &'static str {
        "StartJobRequest"
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
            Field::of(&d[3], self.job_type.as_ref()),
            Field::of(&d[4], self.job_reason.as_ref()),
            Field::of(&d[5], self.commit_id.as_ref()),
            Field::of(&d[6], self.commit_message.as_ref()),
            Field::of(&d[7], self.commit_time.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for StartJobRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for StartJobRequest {
    type Output = StartJobResult;

    const NAME: &'static str = "StartJob";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs";
}

/// The result structure for the StartJob operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StartJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_summary: Option<JobSummary>,
}

impl StartJobResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobSummary"),
    ];

    /// Describes the summary for an execution job for an Amplify app.
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

impl Shape for StartJobResult {
    fn shape_name(&self) -> &'static str {
        "StartJobResult"
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

/// The request structure for the StopJob operation.
///
/// Routed as `DELETE /apps/{appId}/branches/{branchName}/jobs/{jobId}/stop`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopJobRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
}

impl StopJobRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).in_path(),
        FieldDescriptor::new("jobId").max_length(255).in_path(),
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
}

impl PartialEq for StopJobRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.job_id == other.job_id
    }
}

impl Eq for StopJobRequest {}

impl Hash for StopJobRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.job_id.hash(state);
    }
}

impl Shape for StopJobRequest {
    fn shape_name(&self) -> &'static str {
        "StopJobRequest"
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
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for StopJobRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for StopJobRequest {
    type Output = StopJobResult;

    const NAME: &'static str = "StopJob";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}/branches/{branchName}/jobs/{jobId}/stop";
}

/// The result structure for the StopJob operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StopJobResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_summary: Option<JobSummary>,
}

impl StopJobResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobSummary"),
    ];

    /// Describes the summary for an execution job for an Amplify app.
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

impl Shape for StopJobResult {
    fn shape_name(&self) -> &'static str {
        "StopJobResult"
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
    DeleteJobRequest,
    DeleteJobResult,
    GetJobRequest,
    GetJobResult,
    ListJobsRequest,
    ListJobsResult,
    StartJobRequest,
    StartJobResult,
    StopJobRequest,
    StopJobResult,
);
