//! Repository webhooks.

use std::any::Any;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, millis_precision, model_traits, same_model};

/// A webhook that connects repository events to an Amplify app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    create_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "crate::wire::epoch_seconds")]
    update_time: Option<DateTime<Utc>>,
}

impl Webhook {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhookArn").max_length(1000),
        FieldDescriptor::new("webhookId").max_length(255),
        FieldDescriptor::new("webhookUrl").max_length(1000),
        FieldDescriptor::new("branchName").length(1, 255),
        FieldDescriptor::new("description").max_length(1000),
        FieldDescriptor::new("createTime"),
        FieldDescriptor::new("updateTime"),
    ];

    /// The Amazon Resource Name (ARN) for the webhook.
    pub fn webhook_arn(&self) -> Option<&str> {
        self.webhook_arn.as_deref()
    }

    pub fn set_webhook_arn(&mut self, webhook_arn: Option<String>) {
        self.webhook_arn = webhook_arn;
    }

    #[must_use]
    pub fn with_webhook_arn(mut self, webhook_arn: impl Into<String>) -> Self {
        self.webhook_arn = Some(webhook_arn.into());
        self
    }

    /// The ID of the webhook.
    pub fn webhook_id(&self) -> Option<&str> {
        self.webhook_id.as_deref()
    }

    pub fn set_webhook_id(&mut self, webhook_id: Option<String>) {
        self.webhook_id = webhook_id;
    }

    #[must_use]
    pub fn with_webhook_id(mut self, webhook_id: impl Into<String>) -> Self {
        self.webhook_id = Some(webhook_id.into());
        self
    }

    /// The URL of the webhook.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref()
    }

    pub fn set_webhook_url(&mut self, webhook_url: Option<String>) {
        self.webhook_url = webhook_url;
    }

    #[must_use]
    pub fn with_webhook_url(mut self, webhook_url: impl Into<String>) -> Self {
        self.webhook_url = Some(webhook_url.into());
        self
    }

    /// The name for a branch that is part of an Amplify app.
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

    /// The description for a webhook.
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

    /// The create date and time for a webhook.
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

    /// Updates the date and time for a webhook.
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

impl Shape for Webhook {
    fn shape_name(&self) -> &'static str {
        "Webhook"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.webhook_arn.as_ref()),
            Field::of(&d[1], self.webhook_id.as_ref()),
            Field::of(&d[2], self.webhook_url.as_ref()),
            Field::of(&d[3], self.branch_name.as_ref()),
            Field::of(&d[4], self.description.as_ref()),
            Field::of(&d[5], self.create_time.as_ref()),
            Field::of(&d[6], self.update_time.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(Webhook);
