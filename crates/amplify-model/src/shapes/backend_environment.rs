//! Backend environments linked to an app.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, millis_precision, model_traits, same_model};

/// The backend environment for an Amplify app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackendEnvironment {
    #[serde(skip_serializing_if = "Option::is_none")]
    backend_environment_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stack_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deployment_artifacts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    update_time: Option<DateTime<Utc>>,
}

impl BackendEnvironment {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("backendEnvironmentArn").length(1, 1000),
        FieldDescriptor::new("environmentName").length(1, 255),
        FieldDescriptor::new("stackName").length(1, 255),
        FieldDescriptor::new("deploymentArtifacts").length(1, 1000),
        FieldDescriptor::new("createTime"),
        FieldDescriptor::new("updateTime"),
    ];

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

    /// The name for a backend environment that is part of an Amplify app.
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

    /// The creation date and time for a backend environment.
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

    /// The last updated date and time for a backend environment.
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
}

impl Shape for BackendEnvironment {
    fn shape_name(&self) -> &'static str {
        "BackendEnvironment"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.backend_environment_arn.as_ref()),
            Field::of(&d[1], self.environment_name.as_ref()),
            Field::of(&d[2], self.stack_name.as_ref()),
            Field::of(&d[3], self.deployment_artifacts.as_ref()),
            Field::of(&d[4], self.create_time.as_ref()),
            Field::of(&d[5], self.update_time.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(BackendEnvironment);
