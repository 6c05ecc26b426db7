//! Jobs, their summaries and execution steps.

use std::any::Any;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{JobStatus, JobType};
use crate::error::ModelResult;
use crate::model::{
    Field, FieldDescriptor, Shape, insert_entry, millis_precision, model_traits, same_model,
};

/// A build, deploy, or verify job for a branch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<JobSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<Vec<Step>>,
}

impl Job {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("summary"),
        FieldDescriptor::new("steps"),
    ];

    /// Describes the summary for an execution job for an Amplify app.
    pub const fn summary(&self) -> Option<&JobSummary> {
        self.summary.as_ref()
    }

    pub fn set_summary(&mut self, summary: Option<JobSummary>) {
        self.summary = summary;
    }

    #[must_use]
    pub fn with_summary(mut self, summary: JobSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    /// The execution steps for an execution job, for an Amplify app.
    pub fn steps(&self) -> Option<&[Step]> {
        self.steps.as_deref()
    }

    pub fn set_steps(&mut self, steps: Option<Vec<Step>>) {
        self.steps = steps;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_steps(mut self, items: impl IntoIterator<Item = Step>) -> Self {
        self.steps.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl Shape for Job {
    fn shape_name(&self) -> &'static str {
        "Job"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.summary.as_ref()),
            Field::of(&d[1], self.steps.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The summary information of an execution job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    job_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    commit_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    job_type: Option<String>,
}

impl JobSummary {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("jobArn").max_length(1000),
        FieldDescriptor::new("jobId").max_length(255),
        FieldDescriptor::new("commitId").max_length(255),
        FieldDescriptor::new("commitMessage").max_length(10000),
        FieldDescriptor::new("commitTime"),
        FieldDescriptor::new("startTime"),
        FieldDescriptor::new("status").one_of(JobStatus::VALUES),
        FieldDescriptor::new("endTime"),
        FieldDescriptor::new("jobType").one_of(JobType::VALUES),
    ];

    /// The Amazon Resource Name (ARN) for the job.
    pub fn job_arn(&self) -> Option<&str> {
        self.job_arn.as_deref()
    }

    pub fn set_job_arn(&mut self, job_arn: Option<String>) {
        self.job_arn = job_arn;
    }

    #[must_use]
    pub fn with_job_arn(mut self, job_arn: impl Into<String>) -> Self {
        self.job_arn = Some(job_arn.into());
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

    /// The start date and time for the job.
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(millis_precision(start_time));
        self
    }

    /// The current status for the job.
    ///
    /// One of [`JobStatus`]; stored as its wire string.
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

    /// The end date and time for the job.
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(millis_precision(end_time));
        self
    }

    /// The type for the job.
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
}

impl Shape for JobSummary {
    fn shape_name(&self) -> &'static str {
        "JobSummary"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.job_arn.as_ref()),
            Field::of(&d[1], self.job_id.as_ref()),
            Field::of(&d[2], self.commit_id.as_ref()),
            Field::of(&d[3], self.commit_message.as_ref()),
            Field::of(&d[4], self.commit_time.as_ref()),
            Field::of(&d[5], self.start_time.as_ref()),
            Field::of(&d[6], self.status.as_ref()),
            Field::of(&d[7], self.end_time.as_ref()),
            Field::of(&d[8], self.job_type.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// An execution step for an execution job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    step_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artifacts_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_artifacts_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    test_config_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    screenshots: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<String>,
}

impl Step {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("stepName").max_length(255),
        FieldDescriptor::new("startTime"),
        FieldDescriptor::new("status").one_of(JobStatus::VALUES),
        FieldDescriptor::new("endTime"),
        FieldDescriptor::new("logUrl").max_length(1000),
        FieldDescriptor::new("artifactsUrl").max_length(1000),
        FieldDescriptor::new("testArtifactsUrl").max_length(1000),
        FieldDescriptor::new("testConfigUrl").max_length(1000),
        FieldDescriptor::new("screenshots"),
        FieldDescriptor::new("statusReason").max_length(1000),
        FieldDescriptor::new("context").max_length(255),
    ];

    /// The name of the execution step.
    pub fn step_name(&self) -> Option<&str> {
        self.step_name.as_deref()
    }

    pub fn set_step_name(&mut self, step_name: Option<String>) {
        self.step_name = step_name;
    }

    #[must_use]
    pub fn with_step_name(mut self, step_name: impl Into<String>) -> Self {
        self.step_name = Some(step_name.into());
        self
    }

    /// The start date and time of the execution step.
    pub const fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn set_start_time(&mut self, start_time: Option<DateTime<Utc>>) {
        self.start_time = start_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = Some(millis_precision(start_time));
        self
    }

    /// The status of the execution step.
    ///
    /// One of [`JobStatus`]; stored as its wire string.
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

    /// The end date and time of the execution step.
    pub const fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    pub fn set_end_time(&mut self, end_time: Option<DateTime<Utc>>) {
        self.end_time = end_time.map(millis_precision);
    }

    #[must_use]
    pub fn with_end_time(mut self, end_time: DateTime<Utc>) -> Self {
        self.end_time = Some(millis_precision(end_time));
        self
    }

    /// The URL to the logs for the execution step.
    pub fn log_url(&self) -> Option<&str> {
        self.log_url.as_deref()
    }

    pub fn set_log_url(&mut self, log_url: Option<String>) {
        self.log_url = log_url;
    }

    #[must_use]
    pub fn with_log_url(mut self, log_url: impl Into<String>) -> Self {
        self.log_url = Some(log_url.into());
        self
    }

    /// The URL to the artifact for the execution step.
    pub fn artifacts_url(&self) -> Option<&str> {
        self.artifacts_url.as_deref()
    }

    pub fn set_artifacts_url(&mut self, artifacts_url: Option<String>) {
        self.artifacts_url = artifacts_url;
    }

    #[must_use]
    pub fn with_artifacts_url(mut self, artifacts_url: impl Into<String>) -> Self {
        self.artifacts_url = Some(artifacts_url.into());
        self
    }

    /// The URL to the test artifact for the execution step.
    pub fn test_artifacts_url(&self) -> Option<&str> {
        self.test_artifacts_url.as_deref()
    }

    pub fn set_test_artifacts_url(&mut self, test_artifacts_url: Option<String>) {
        self.test_artifacts_url = test_artifacts_url;
    }

    #[must_use]
    pub fn with_test_artifacts_url(mut self, test_artifacts_url: impl Into<String>) -> Self {
        self.test_artifacts_url = Some(test_artifacts_url.into());
        self
    }

    /// The URL to the test configuration for the execution step.
    pub fn test_config_url(&self) -> Option<&str> {
        self.test_config_url.as_deref()
    }

    pub fn set_test_config_url(&mut self, test_config_url: Option<String>) {
        self.test_config_url = test_config_url;
    }

    #[must_use]
    pub fn with_test_config_url(mut self, test_config_url: impl Into<String>) -> Self {
        self.test_config_url = Some(test_config_url.into());
        self
    }

    /// The list of screenshot URLs for the execution step, if relevant.
    pub const fn screenshots(&self) -> Option<&BTreeMap<String, String>> {
        self.screenshots.as_ref()
    }

    pub fn set_screenshots(&mut self, screenshots: Option<BTreeMap<String, String>>) {
        self.screenshots = screenshots;
    }

    #[must_use]
    pub fn with_screenshots(mut self, screenshots: BTreeMap<String, String>) -> Self {
        self.screenshots = Some(screenshots);
        self
    }

    /// Adds one entry. A repeated `key` fails and leaves the map unchanged.
    pub fn add_screenshots_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> ModelResult<&mut Self> {
        insert_entry(&mut self.screenshots, "screenshots", key.into(), value.into())?;
        Ok(self)
    }

    /// Removes all entries, leaving the field absent.
    pub fn clear_screenshots_entries(&mut self) -> &mut Self {
        self.screenshots = None;
        self
    }

    /// The reason for the current step status.
    pub fn status_reason(&self) -> Option<&str> {
        self.status_reason.as_deref()
    }

    pub fn set_status_reason(&mut self, status_reason: Option<String>) {
        self.status_reason = status_reason;
    }

    #[must_use]
    pub fn with_status_reason(mut self, status_reason: impl Into<String>) -> Self {
        self.status_reason = Some(status_reason.into());
        self
    }

    /// The context for the current step. Includes a build image if the step is build.
    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn set_context(&mut self, context: Option<String>) {
        self.context = context;
    }

    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl Shape for Step {
    fn shape_name(&self) -> &'static str {
        "Step"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.step_name.as_ref()),
            Field::of(&d[1], self.start_time.as_ref()),
            Field::of(&d[2], self.status.as_ref()),
            Field::of(&d[3], self.end_time.as_ref()),
            Field::of(&d[4], self.log_url.as_ref()),
            Field::of(&d[5], self.artifacts_url.as_ref()),
            Field::of(&d[6], self.test_artifacts_url.as_ref()),
            Field::of(&d[7], self.test_config_url.as_ref()),
            Field::of(&d[8], self.screenshots.as_ref()),
            Field::of(&d[9], self.status_reason.as_ref()),
            Field::of(&d[10], self.context.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(Job, JobSummary, Step);
