//! Webhook operations.

use std::any::Any;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::Webhook;

/// The request structure for the CreateWebhook operation.
///
/// Routed as `POST /apps/{appId}/webhooks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateWebhookRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl CreateWebhookRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("branchName").length(1, 255).required(),
        FieldDescriptor::new("description").max_length(1000),
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
}

impl PartialEq for CreateWebhookRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.branch_name == other.branch_name
            && self.description == other.description
    }
}

impl Eq for CreateWebhookRequest {}

impl Hash for CreateWebhookRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.branch_name.hash(state);
        self.description.hash(state);
    }
}

impl Shape for CreateWebhookRequest {
    fn shape_name(&self) -> &'static str {
        "CreateWebhookRequest"
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
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateWebhookRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateWebhookRequest {
    type Output = CreateWebhookResult;

    const NAME: &'static str = "CreateWebhook";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/webhooks";
}

/// The result structure for the CreateWebhook operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateWebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<Webhook>,
}

impl CreateWebhookResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhook"),
    ];

    /// Describes a webhook that connects repository events to an Amplify app.
    pub const fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }

    pub fn set_webhook(&mut self, webhook: Option<Webhook>) {
        self.webhook = webhook;
    }

    #[must_use]
    pub fn with_webhook(mut self, webhook: Webhook) -> Self {
        self.webhook = Some(webhook);
        self
    }
}

impl Shape for CreateWebhookResult {
    fn shape_name(&self) -> &'static str {
        "CreateWebhookResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the DeleteWebhook operation.
///
/// Routed as `DELETE /webhooks/{webhookId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteWebhookRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_id: Option<String>,
}

impl DeleteWebhookRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhookId").max_length(255).in_path(),
    ];

    /// The unique ID for a webhook.
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
}

impl PartialEq for DeleteWebhookRequest {
    fn eq(&self, other: &Self) -> bool {
        self.webhook_id == other.webhook_id
    }
}

impl Eq for DeleteWebhookRequest {}

impl Hash for DeleteWebhookRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.webhook_id.hash(state);
    }
}

impl Shape for DeleteWebhookRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteWebhookRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook_id.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteWebhookRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteWebhookRequest {
    type Output = DeleteWebhookResult;

    const NAME: &'static str = "DeleteWebhook";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/webhooks/{webhookId}";
}

/// The result structure for the DeleteWebhook operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteWebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<Webhook>,
}

impl DeleteWebhookResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhook"),
    ];

    /// Describes a webhook that connects repository events to an Amplify app.
    pub const fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }

    pub fn set_webhook(&mut self, webhook: Option<Webhook>) {
        self.webhook = webhook;
    }

    #[must_use]
    pub fn with_webhook(mut self, webhook: Webhook) -> Self {
        self.webhook = Some(webhook);
        self
    }
}

impl Shape for DeleteWebhookResult {
    fn shape_name(&self) -> &'static str {
        "DeleteWebhookResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the GetWebhook operation.
///
/// Routed as `GET /webhooks/{webhookId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetWebhookRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_id: Option<String>,
}

impl GetWebhookRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhookId").max_length(255).in_path(),
    ];

    /// The unique ID for a webhook.
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
}

impl PartialEq for GetWebhookRequest {
    fn eq(&self, other: &Self) -> bool {
        self.webhook_id == other.webhook_id
    }
}

impl Eq for GetWebhookRequest {}

impl Hash for GetWebhookRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.webhook_id.hash(state);
    }
}

impl Shape for GetWebhookRequest {
    fn shape_name(&self) -> &'static str {
        "GetWebhookRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook_id.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetWebhookRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetWebhookRequest {
    type Output = GetWebhookResult;

    const NAME: &'static str = "GetWebhook";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/webhooks/{webhookId}";
}

/// The result structure for the GetWebhook operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetWebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<Webhook>,
}

impl GetWebhookResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhook"),
    ];

    /// Describes a webhook that connects repository events to an Amplify app.
    pub const fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }

    pub fn set_webhook(&mut self, webhook: Option<Webhook>) {
        self.webhook = webhook;
    }

    #[must_use]
    pub fn with_webhook(mut self, webhook: Webhook) -> Self {
        self.webhook = Some(webhook);
        self
    }
}

impl Shape for GetWebhookResult {
    fn shape_name(&self) -> &'static str {
        "GetWebhookResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListWebhooks operation.
///
/// Routed as `GET /apps/{appId}/webhooks`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListWebhooksRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListWebhooksRequest {
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

impl PartialEq for ListWebhooksRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListWebhooksRequest {}

impl Hash for ListWebhooksRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListWebhooksRequest {
    fn shape_name(&self) -> &'static str {
        "ListWebhooksRequest"
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

impl AmplifyRequest for ListWebhooksRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListWebhooksRequest {
    type Output = ListWebhooksResult;

    const NAME: &'static str = "ListWebhooks";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/webhooks";
}

impl PageRequest for ListWebhooksRequest {
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

/// The result structure for the ListWebhooks operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListWebhooksResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhooks: Option<Vec<Webhook>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListWebhooksResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhooks"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// A list of webhooks.
    pub fn webhooks(&self) -> Option<&[Webhook]> {
        self.webhooks.as_deref()
    }

    pub fn set_webhooks(&mut self, webhooks: Option<Vec<Webhook>>) {
        self.webhooks = webhooks;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_webhooks(mut self, items: impl IntoIterator<Item = Webhook>) -> Self {
        self.webhooks.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListWebhooksResult {
    fn shape_name(&self) -> &'static str {
        "ListWebhooksResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.webhooks.as_ref()),
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

impl Paginated for ListWebhooksResult {
    type Item = Webhook;

    fn items(&self) -> Option<&[Webhook]> {
        self.webhooks.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

/// The request structure for the UpdateWebhook operation.
///
/// Routed as `POST /webhooks/{webhookId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateWebhookRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl UpdateWebhookRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhookId").max_length(255).in_path(),
        FieldDescriptor::new("branchName").length(1, 255),
        FieldDescriptor::new("description").max_length(1000),
    ];

    /// The unique ID for a webhook.
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
}

impl PartialEq for UpdateWebhookRequest {
    fn eq(&self, other: &Self) -> bool {
        self.webhook_id == other.webhook_id
            && self.branch_name == other.branch_name
            && self.description == other.description
    }
}

impl Eq for UpdateWebhookRequest {}

impl Hash for UpdateWebhookRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.webhook_id.hash(state);
        self.branch_name.hash(state);
        self.description.hash(state);
    }
}

impl Shape for UpdateWebhookRequest {
    fn shape_name(&self) -> &'static str {
        "UpdateWebhookRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.webhook_id.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
            Field::of(&d[2], self.description.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for UpdateWebhookRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for UpdateWebhookRequest {
    type Output = UpdateWebhookResult;

    const NAME: &'static str = "UpdateWebhook";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/webhooks/{webhookId}";
}

/// The result structure for the UpdateWebhook operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateWebhookResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    webhook: Option<Webhook>,
}

impl UpdateWebhookResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("webhook"),
    ];

    /// Describes a webhook that connects repository events to an Amplify app.
    pub const fn webhook(&self) -> Option<&Webhook> {
        self.webhook.as_ref()
    }

    pub fn set_webhook(&mut self, webhook: Option<Webhook>) {
        self.webhook = webhook;
    }

    #[must_use]
    pub fn with_webhook(mut self, webhook: Webhook) -> Self {
        self.webhook = Some(webhook);
        self
    }
}

impl Shape for UpdateWebhookResult {
    fn shape_name(&self) -> &'static str {
        "UpdateWebhookResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.webhook.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    CreateWebhookRequest,
    CreateWebhookResult,
    DeleteWebhookRequest,
    DeleteWebhookResult,
    GetWebhookRequest,
    GetWebhookResult,
    ListWebhooksRequest,
    ListWebhooksResult,
    UpdateWebhookRequest,
    UpdateWebhookResult,
);
