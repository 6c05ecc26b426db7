//! Access log export.

use std::any::Any;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, millis_precision, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::request::{AmplifyRequest, RequestMetadata};

/// The request structure for the GenerateAccessLogs operation.
///
/// Routed as `POST /apps/{appId}/accesslogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateAccessLogsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
}

impl GenerateAccessLogsRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("startTime"),
        FieldDescriptor::new("endTime"),
        FieldDescriptor::new("domainName").max_length(255).required(),
        FieldDescriptor::new("appId").length(1, 20).in_path(),
    ];

    /// The time at which the logs should start. The time range specified is inclusive of the start
    /// time.
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

    /// The time at which the logs should end. The time range specified is inclusive of the end
    /// time.
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

    /// The name of the domain.
    pub fn domain_name(&self) -> Option<&str> {
        self.domain_name.as_deref()
    }

    pub fn set_domain_name(&mut self, domain_name: Option<String>) {
        self.domain_name = domain_name;
    }

    #[must_use]
    pub fn with_domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.domain_name = Some(domain_name.into());
        self
    }

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

impl PartialEq for GenerateAccessLogsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.start_time == other.start_time
            && self.end_time == other.end_time
            && self.domain_name == other.domain_name
            && self.app_id == other.app_id
    }
}

impl Eq for GenerateAccessLogsRequest {}

impl Hash for GenerateAccessLogsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start_time.hash(state);
        self.end_time.hash(state);
        self.domain_name.hash(state);
        self.app_id.hash(state);
    }
}

impl Shape for GenerateAccessLogsRequest {
    fn shape_name(&self) -> &'static str {
        "GenerateAccessLogsRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.start_time.as_ref()),
            Field::of(&d[1], self.end_time.as_ref()),
            Field::of(&d[2], self.domain_name.as_ref()),
            Field::of(&d[3], self.app_id.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GenerateAccessLogsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GenerateAccessLogsRequest {
    type Output = GenerateAccessLogsResult;

    const NAME: &'static str = "GenerateAccessLogs";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/accesslogs";
}

/// The result structure for the GenerateAccessLogs operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateAccessLogsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    log_url: Option<String>,
}

impl GenerateAccessLogsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("logUrl").max_length(1000),
    ];

    /// The pre-signed URL for the requested access logs.
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
}

impl Shape for GenerateAccessLogsResult {
    fn shape_name(&self) -> &'static str {
        "GenerateAccessLogsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.log_url.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(GenerateAccessLogsRequest, GenerateAccessLogsResult);
