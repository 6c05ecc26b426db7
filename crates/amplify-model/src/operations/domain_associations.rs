//! Domain association operations.

use std::any::Any;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};
use crate::operation::{HttpMethod, Operation};
use crate::pagination::{PageRequest, Paginated};
use crate::request::{AmplifyRequest, RequestMetadata};
use crate::shapes::{DomainAssociation, SubDomainSetting};

/// The request structure for the CreateDomainAssociation operation.
///
/// Routed as `POST /apps/{appId}/domains`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDomainAssociationRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_sub_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_domain_settings: Option<Vec<SubDomainSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_sub_domain_creation_patterns: Option<Vec<String>>,
    #[serde(rename = "autoSubDomainIAMRole", skip_serializing_if = "Option::is_none")]
    auto_sub_domain_iam_role: Option<String>,
}

impl CreateDomainAssociationRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("domainName").max_length(255).required(),
        FieldDescriptor::new("enableAutoSubDomain"),
        FieldDescriptor::new("subDomainSettings"),
        FieldDescriptor::new("autoSubDomainCreationPatterns"),
        FieldDescriptor::new("autoSubDomainIAMRole")
            .max_length(1000)
            .pattern(r"^$|^arn:aws:iam::\d{12}:role.+"),
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

    /// Enables the automated creation of subdomains for branches.
    pub const fn enable_auto_sub_domain(&self) -> Option<bool> {
        self.enable_auto_sub_domain
    }

    pub const fn set_enable_auto_sub_domain(&mut self, enable_auto_sub_domain: Option<bool>) {
        self.enable_auto_sub_domain = enable_auto_sub_domain;
    }

    #[must_use]
    pub fn with_enable_auto_sub_domain(mut self, enable_auto_sub_domain: bool) -> Self {
        self.enable_auto_sub_domain = Some(enable_auto_sub_domain);
        self
    }

    /// The setting for the subdomain.
    pub fn sub_domain_settings(&self) -> Option<&[SubDomainSetting]> {
        self.sub_domain_settings.as_deref()
    }

    pub fn set_sub_domain_settings(&mut self, sub_domain_settings: Option<Vec<SubDomainSetting>>) {
        self.sub_domain_settings = sub_domain_settings;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_sub_domain_settings(
        mut self,
        items: impl IntoIterator<Item = SubDomainSetting>,
    ) -> Self {
        self.sub_domain_settings.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// Sets the branch patterns for automatic subdomain creation.
    pub fn auto_sub_domain_creation_patterns(&self) -> Option<&[String]> {
        self.auto_sub_domain_creation_patterns.as_deref()
    }

    pub fn set_auto_sub_domain_creation_patterns(
        &mut self,
        auto_sub_domain_creation_patterns: Option<Vec<String>>,
    ) {
        self.auto_sub_domain_creation_patterns = auto_sub_domain_creation_patterns;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_auto_sub_domain_creation_patterns<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auto_sub_domain_creation_patterns
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// The required AWS IAM service role for automatic subdomain creation.
    pub fn auto_sub_domain_iam_role(&self) -> Option<&str> {
        self.auto_sub_domain_iam_role.as_deref()
    }

    pub fn set_auto_sub_domain_iam_role(&mut self, auto_sub_domain_iam_role: Option<String>) {
        self.auto_sub_domain_iam_role = auto_sub_domain_iam_role;
    }

    #[must_use]
    pub fn with_auto_sub_domain_iam_role(
        mut self,
        auto_sub_domain_iam_role: impl Into<String>,
    ) -> Self {
        self.auto_sub_domain_iam_role = Some(auto_sub_domain_iam_role.into());
        self
    }
}

impl PartialEq for CreateDomainAssociationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.domain_name == other.domain_name
            && self.enable_auto_sub_domain == other.enable_auto_sub_domain
            && self.sub_domain_settings == other.sub_domain_settings
            && self.auto_sub_domain_creation_patterns == other.auto_sub_domain_creation_patterns
            && self.auto_sub_domain_iam_role == other.auto_sub_domain_iam_role
    }
}

impl Eq for CreateDomainAssociationRequest {}

impl Hash for CreateDomainAssociationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.domain_name.hash(state);
        self.enable_auto_sub_domain.hash(state);
        self.sub_domain_settings.hash(state);
        self.auto_sub_domain_creation_patterns.hash(state);
        self.auto_sub_domain_iam_role.hash(state);
    }
}

impl Shape for CreateDomainAssociationRequest {
    fn shape_name(&self) -> &'static str {
        "CreateDomainAssociationRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.domain_name.as_ref()),
            Field::of(&d[2], self.enable_auto_sub_domain.as_ref()),
            Field::of(&d[3], self.sub_domain_settings.as_ref()),
            Field::of(&d[4], self.auto_sub_domain_creation_patterns.as_ref()),
            Field::of(&d[5], self.auto_sub_domain_iam_role.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for CreateDomainAssociationRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for CreateDomainAssociationRequest {
    type Output = CreateDomainAssociationResult;

    const NAME: &'static str = "CreateDomainAssociation";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/domains";
}

/// The result structure for the CreateDomainAssociation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDomainAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_association: Option<DomainAssociation>,
}

impl CreateDomainAssociationResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociation"),
    ];

    /// Describes the structure of a domain association, which associates a custom domain with an
    /// Amplify app.
    pub const fn domain_association(&self) -> Option<&DomainAssociation> {
        self.domain_association.as_ref()
    }

    pub fn set_domain_association(&mut self, domain_association: Option<DomainAssociation>) {
        self.domain_association = domain_association;
    }

    #[must_use]
    pub fn with_domain_association(mut self, domain_association: DomainAssociation) -> Self {
        self.domain_association = Some(domain_association);
        self
    }
}

impl Shape for CreateDomainAssociationResult {
    fn shape_name(&self) -> &'static str {
        "CreateDomainAssociationResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.domain_association.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the DeleteDomainAssociation operation.
///
/// Routed as `DELETE /apps/{appId}/domains/{domainName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDomainAssociationRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
}

impl DeleteDomainAssociationRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("domainName").max_length(255).in_path(),
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
}

impl PartialEq for DeleteDomainAssociationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.domain_name == other.domain_name
    }
}

impl Eq for DeleteDomainAssociationRequest {}

impl Hash for DeleteDomainAssociationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.domain_name.hash(state);
    }
}

impl Shape for DeleteDomainAssociationRequest {
    fn shape_name(&self) -> &'static str {
        "DeleteDomainAssociationRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.domain_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for DeleteDomainAssociationRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for DeleteDomainAssociationRequest {
    type Output = DeleteDomainAssociationResult;

    const NAME: &'static str = "DeleteDomainAssociation";
    const METHOD: HttpMethod = HttpMethod::Delete;
    const PATH: &'static str = "/apps/{appId}/domains/{domainName}";
}

/// The result structure for the DeleteDomainAssociation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeleteDomainAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_association: Option<DomainAssociation>,
}

impl DeleteDomainAssociationResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociation"),
    ];

    /// Describes the structure of a domain association, which associates a custom domain with an
    /// Amplify app.
    pub const fn domain_association(&self) -> Option<&DomainAssociation> {
        self.domain_association.as_ref()
    }

    pub fn set_domain_association(&mut self, domain_association: Option<DomainAssociation>) {
        self.domain_association = domain_association;
    }

    #[must_use]
    pub fn with_domain_association(mut self, domain_association: DomainAssociation) -> Self {
        self.domain_association = Some(domain_association);
        self
    }
}

impl Shape for DeleteDomainAssociationResult {
    fn shape_name(&self) -> &'static str {
        "DeleteDomainAssociationResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.domain_association.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the GetDomainAssociation operation.
///
/// Routed as `GET /apps/{appId}/domains/{domainName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDomainAssociationRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
}

impl GetDomainAssociationRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("domainName").max_length(255).in_path(),
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
}

impl PartialEq for GetDomainAssociationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.domain_name == other.domain_name
    }
}

impl Eq for GetDomainAssociationRequest {}

impl Hash for GetDomainAssociationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.domain_name.hash(state);
    }
}

impl Shape for GetDomainAssociationRequest {
    fn shape_name(&self) -> &'static str {
        "GetDomainAssociationRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.domain_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for GetDomainAssociationRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for GetDomainAssociationRequest {
    type Output = GetDomainAssociationResult;

    const NAME: &'static str = "GetDomainAssociation";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/domains/{domainName}";
}

/// The result structure for the GetDomainAssociation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GetDomainAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_association: Option<DomainAssociation>,
}

impl GetDomainAssociationResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociation"),
    ];

    /// Describes the structure of a domain association, which associates a custom domain with an
    /// Amplify app.
    pub const fn domain_association(&self) -> Option<&DomainAssociation> {
        self.domain_association.as_ref()
    }

    pub fn set_domain_association(&mut self, domain_association: Option<DomainAssociation>) {
        self.domain_association = domain_association;
    }

    #[must_use]
    pub fn with_domain_association(mut self, domain_association: DomainAssociation) -> Self {
        self.domain_association = Some(domain_association);
        self
    }
}

impl Shape for GetDomainAssociationResult {
    fn shape_name(&self) -> &'static str {
        "GetDomainAssociationResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.domain_association.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The request structure for the ListDomainAssociations operation.
///
/// Routed as `GET /apps/{appId}/domains`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDomainAssociationsRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<i32>,
}

impl ListDomainAssociationsRequest {
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

impl PartialEq for ListDomainAssociationsRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.next_token == other.next_token
            && self.max_results == other.max_results
    }
}

impl Eq for ListDomainAssociationsRequest {}

impl Hash for ListDomainAssociationsRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.next_token.hash(state);
        self.max_results.hash(state);
    }
}

impl Shape for ListDomainAssociationsRequest {
    fn shape_name(&self) -> &'static str {
        "ListDomainAssociationsRequest"
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

impl AmplifyRequest for ListDomainAssociationsRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for ListDomainAssociationsRequest {
    type Output = ListDomainAssociationsResult;

    const NAME: &'static str = "ListDomainAssociations";
    const METHOD: HttpMethod = HttpMethod::Get;
    const PATH: &'static str = "/apps/{appId}/domains";
}

impl PageRequest for ListDomainAssociationsRequest {
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

/// The result structure for the ListDomainAssociations operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListDomainAssociationsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_associations: Option<Vec<DomainAssociation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_token: Option<String>,
}

impl ListDomainAssociationsResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociations"),
        FieldDescriptor::new("nextToken").max_length(2000),
    ];

    /// A list of domain associations.
    pub fn domain_associations(&self) -> Option<&[DomainAssociation]> {
        self.domain_associations.as_deref()
    }

    pub fn set_domain_associations(&mut self, domain_associations: Option<Vec<DomainAssociation>>) {
        self.domain_associations = domain_associations;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_domain_associations(
        mut self,
        items: impl IntoIterator<Item = DomainAssociation>,
    ) -> Self {
        self.domain_associations.get_or_insert_with(Vec::new).extend(items);
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

impl Shape for ListDomainAssociationsResult {
    fn shape_name(&self) -> &'static str {
        "ListDomainAssociationsResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.domain_associations.as_ref()),
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

impl Paginated for ListDomainAssociationsResult {
    type Item = DomainAssociation;

    fn items(&self) -> Option<&[DomainAssociation]> {
        self.domain_associations.as_deref()
    }

    fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }
}

/// The request structure for the UpdateDomainAssociation operation.
///
/// Routed as `POST /apps/{appId}/domains/{domainName}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDomainAssociationRequest {
    #[serde(skip)]
    metadata: RequestMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_sub_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_domain_settings: Option<Vec<SubDomainSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_sub_domain_creation_patterns: Option<Vec<String>>,
    #[serde(rename = "autoSubDomainIAMRole", skip_serializing_if = "Option::is_none")]
    auto_sub_domain_iam_role: Option<String>,
}

impl UpdateDomainAssociationRequest {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("appId").length(1, 20).in_path(),
        FieldDescriptor::new("domainName").max_length(255).in_path(),
        FieldDescriptor::new("enableAutoSubDomain"),
        FieldDescriptor::new("subDomainSettings").required(),
        FieldDescriptor::new("autoSubDomainCreationPatterns"),
        FieldDescriptor::new("autoSubDomainIAMRole")
            .max_length(1000)
            .pattern(r"^$|^arn:aws:iam::\d{12}:role.+"),
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

    /// Enables the automated creation of subdomains for branches.
    pub const fn enable_auto_sub_domain(&self) -> Option<bool> {
        self.enable_auto_sub_domain
    }

    pub const fn set_enable_auto_sub_domain(&mut self, enable_auto_sub_domain: Option<bool>) {
        self.enable_auto_sub_domain = enable_auto_sub_domain;
    }

    #[must_use]
    pub fn with_enable_auto_sub_domain(mut self, enable_auto_sub_domain: bool) -> Self {
        self.enable_auto_sub_domain = Some(enable_auto_sub_domain);
        self
    }

    /// The setting for the subdomain.
    pub fn sub_domain_settings(&self) -> Option<&[SubDomainSetting]> {
        self.sub_domain_settings.as_deref()
    }

    pub fn set_sub_domain_settings(&mut self, sub_domain_settings: Option<Vec<SubDomainSetting>>) {
        self.sub_domain_settings = sub_domain_settings;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_sub_domain_settings(
        mut self,
        items: impl IntoIterator<Item = SubDomainSetting>,
    ) -> Self {
        self.sub_domain_settings.get_or_insert_with(Vec::new).extend(items);
        self
    }

    /// Sets the branch patterns for automatic subdomain creation.
    pub fn auto_sub_domain_creation_patterns(&self) -> Option<&[String]> {
        self.auto_sub_domain_creation_patterns.as_deref()
    }

    pub fn set_auto_sub_domain_creation_patterns(
        &mut self,
        auto_sub_domain_creation_patterns: Option<Vec<String>>,
    ) {
        self.auto_sub_domain_creation_patterns = auto_sub_domain_creation_patterns;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_auto_sub_domain_creation_patterns<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.auto_sub_domain_creation_patterns
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    /// The required AWS IAM service role for automatic subdomain creation.
    pub fn auto_sub_domain_iam_role(&self) -> Option<&str> {
        self.auto_sub_domain_iam_role.as_deref()
    }

    pub fn set_auto_sub_domain_iam_role(&mut self, auto_sub_domain_iam_role: Option<String>) {
        self.auto_sub_domain_iam_role = auto_sub_domain_iam_role;
    }

    #[must_use]
    pub fn with_auto_sub_domain_iam_role(
        mut self,
        auto_sub_domain_iam_role: impl Into<String>,
    ) -> Self {
        self.auto_sub_domain_iam_role = Some(auto_sub_domain_iam_role.into());
        self
    }
}

impl PartialEq for UpdateDomainAssociationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.app_id == other.app_id
            && self.domain_name == other.domain_name
            && self.enable_auto_sub_domain == other.enable_auto_sub_domain
            && self.sub_domain_settings == other.sub_domain_settings
            && self.auto_sub_domain_creation_patterns == other.auto_sub_domain_creation_patterns
            && self.auto_sub_domain_iam_role == other.auto_sub_domain_iam_role
    }
}

impl Eq for UpdateDomainAssociationRequest {}

impl Hash for UpdateDomainAssociationRequest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.app_id.hash(state);
        self.domain_name.hash(state);
        self.enable_auto_sub_domain.hash(state);
        self.sub_domain_settings.hash(state);
        self.auto_sub_domain_creation_patterns.hash(state);
        self.auto_sub_domain_iam_role.hash(state);
    }
}

impl Shape for UpdateDomainAssociationRequest {
    fn shape_name(&self) -> &'static str {
        "UpdateDomainAssociationRequest"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.app_id.as_ref()),
            Field::of(&d[1], self.domain_name.as_ref()),
            Field::of(&d[2], self.enable_auto_sub_domain.as_ref()),
            Field::of(&d[3], self.sub_domain_settings.as_ref()),
            Field::of(&d[4], self.auto_sub_domain_creation_patterns.as_ref()),
            Field::of(&d[5], self.auto_sub_domain_iam_role.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

impl AmplifyRequest for UpdateDomainAssociationRequest {
    fn metadata(&self) -> &RequestMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut RequestMetadata {
        &mut self.metadata
    }
}

impl Operation for UpdateDomainAssociationRequest {
    type Output = UpdateDomainAssociationResult;

    const NAME: &'static str = "UpdateDomainAssociation";
    const METHOD: HttpMethod = HttpMethod::Post;
    const PATH: &'static str = "/apps/{appId}/domains/{domainName}";
}

/// The result structure for the UpdateDomainAssociation operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateDomainAssociationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_association: Option<DomainAssociation>,
}

impl UpdateDomainAssociationResult {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociation"),
    ];

    /// Describes the structure of a domain association, which associates a custom domain with an
    /// Amplify app.
    pub const fn domain_association(&self) -> Option<&DomainAssociation> {
        self.domain_association.as_ref()
    }

    pub fn set_domain_association(&mut self, domain_association: Option<DomainAssociation>) {
        self.domain_association = domain_association;
    }

    #[must_use]
    pub fn with_domain_association(mut self, domain_association: DomainAssociation) -> Self {
        self.domain_association = Some(domain_association);
        self
    }
}

impl Shape for UpdateDomainAssociationResult {
    fn shape_name(&self) -> &'static str {
        "UpdateDomainAssociationResult"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::of(&Self::FIELDS[0], self.domain_association.as_ref())]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(
    CreateDomainAssociationRequest,
    CreateDomainAssociationResult,
    DeleteDomainAssociationRequest,
    DeleteDomainAssociationResult,
    GetDomainAssociationRequest,
    GetDomainAssociationResult,
    ListDomainAssociationsRequest,
    ListDomainAssociationsResult,
    UpdateDomainAssociationRequest,
    UpdateDomainAssociationResult,
);
