//! Custom domains and their subdomains.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::enums::DomainStatus;
use crate::model::{Field, FieldDescriptor, Shape, model_traits, same_model};

/// A domain association, which associates a custom domain with an Amplify app.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DomainAssociation {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_association_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    enable_auto_sub_domain: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_sub_domain_creation_patterns: Option<Vec<String>>,
    #[serde(rename = "autoSubDomainIAMRole", skip_serializing_if = "Option::is_none")]
    auto_sub_domain_iam_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_reason: Option<String>,
    #[serde(rename = "certificateVerificationDNSRecord", skip_serializing_if = "Option::is_none")]
    certificate_verification_dns_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_domains: Option<Vec<SubDomain>>,
}

impl DomainAssociation {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("domainAssociationArn").max_length(1000),
        FieldDescriptor::new("domainName").max_length(255),
        FieldDescriptor::new("enableAutoSubDomain"),
        FieldDescriptor::new("autoSubDomainCreationPatterns"),
        FieldDescriptor::new("autoSubDomainIAMRole")
            .max_length(1000)
            .pattern(r"^$|^arn:aws:iam::\d{12}:role.+"),
        FieldDescriptor::new("domainStatus").one_of(DomainStatus::VALUES),
        FieldDescriptor::new("statusReason").max_length(1000),
        FieldDescriptor::new("certificateVerificationDNSRecord").max_length(1000),
        FieldDescriptor::new("subDomains"),
    ];

    /// The ARN for the domain association.
    pub fn domain_association_arn(&self) -> Option<&str> {
        self.domain_association_arn.as_deref()
    }

    pub fn set_domain_association_arn(&mut self, domain_association_arn: Option<String>) {
        self.domain_association_arn = domain_association_arn;
    }

    #[must_use]
    pub fn with_domain_association_arn(
        mut self,
        domain_association_arn: impl Into<String>,
    ) -> Self {
        self.domain_association_arn = Some(domain_association_arn.into());
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

    /// Sets branch patterns for automatic subdomain creation.
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

    /// The current status of the domain association.
    ///
    /// One of [`DomainStatus`]; stored as its wire string.
    pub fn domain_status(&self) -> Option<&str> {
        self.domain_status.as_deref()
    }

    pub fn set_domain_status(&mut self, domain_status: Option<String>) {
        self.domain_status = domain_status;
    }

    #[must_use]
    pub fn with_domain_status(mut self, domain_status: impl Into<String>) -> Self {
        self.domain_status = Some(domain_status.into());
        self
    }

    /// The reason for the current status of the domain association.
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

    /// The DNS record for certificate verification.
    pub fn certificate_verification_dns_record(&self) -> Option<&str> {
        self.certificate_verification_dns_record.as_deref()
    }

    pub fn set_certificate_verification_dns_record(
        &mut self,
        certificate_verification_dns_record: Option<String>,
    ) {
        self.certificate_verification_dns_record = certificate_verification_dns_record;
    }

    #[must_use]
    pub fn with_certificate_verification_dns_record(
        mut self,
        certificate_verification_dns_record: impl Into<String>,
    ) -> Self {
        self.certificate_verification_dns_record = Some(certificate_verification_dns_record.into());
        self
    }

    /// The subdomains for the domain association.
    pub fn sub_domains(&self) -> Option<&[SubDomain]> {
        self.sub_domains.as_deref()
    }

    pub fn set_sub_domains(&mut self, sub_domains: Option<Vec<SubDomain>>) {
        self.sub_domains = sub_domains;
    }

    /// Appends to any existing entries.
    #[must_use]
    pub fn with_sub_domains(mut self, items: impl IntoIterator<Item = SubDomain>) -> Self {
        self.sub_domains.get_or_insert_with(Vec::new).extend(items);
        self
    }
}

impl Shape for DomainAssociation {
    fn shape_name(&self) -> &'static str {
        "DomainAssociation"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.domain_association_arn.as_ref()),
            Field::of(&d[1], self.domain_name.as_ref()),
            Field::of(&d[2], self.enable_auto_sub_domain.as_ref()),
            Field::of(&d[3], self.auto_sub_domain_creation_patterns.as_ref()),
            Field::of(&d[4], self.auto_sub_domain_iam_role.as_ref()),
            Field::of(&d[5], self.domain_status.as_ref()),
            Field::of(&d[6], self.status_reason.as_ref()),
            Field::of(&d[7], self.certificate_verification_dns_record.as_ref()),
            Field::of(&d[8], self.sub_domains.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// A subdomain of a domain association.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    sub_domain_setting: Option<SubDomainSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dns_record: Option<String>,
}

impl SubDomain {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("subDomainSetting"),
        FieldDescriptor::new("verified"),
        FieldDescriptor::new("dnsRecord").max_length(1000),
    ];

    /// Describes the settings for the subdomain.
    pub const fn sub_domain_setting(&self) -> Option<&SubDomainSetting> {
        self.sub_domain_setting.as_ref()
    }

    pub fn set_sub_domain_setting(&mut self, sub_domain_setting: Option<SubDomainSetting>) {
        self.sub_domain_setting = sub_domain_setting;
    }

    #[must_use]
    pub fn with_sub_domain_setting(mut self, sub_domain_setting: SubDomainSetting) -> Self {
        self.sub_domain_setting = Some(sub_domain_setting);
        self
    }

    /// The verified status of the subdomain.
    pub const fn verified(&self) -> Option<bool> {
        self.verified
    }

    pub const fn set_verified(&mut self, verified: Option<bool>) {
        self.verified = verified;
    }

    #[must_use]
    pub fn with_verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    /// The DNS record for the subdomain.
    pub fn dns_record(&self) -> Option<&str> {
        self.dns_record.as_deref()
    }

    pub fn set_dns_record(&mut self, dns_record: Option<String>) {
        self.dns_record = dns_record;
    }

    #[must_use]
    pub fn with_dns_record(mut self, dns_record: impl Into<String>) -> Self {
        self.dns_record = Some(dns_record.into());
        self
    }
}

impl Shape for SubDomain {
    fn shape_name(&self) -> &'static str {
        "SubDomain"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.sub_domain_setting.as_ref()),
            Field::of(&d[1], self.verified.as_ref()),
            Field::of(&d[2], self.dns_record.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

/// The settings for a subdomain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubDomainSetting {
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch_name: Option<String>,
}

impl SubDomainSetting {
    const FIELDS: &'static [FieldDescriptor] = &[
        FieldDescriptor::new("prefix").max_length(255),
        FieldDescriptor::new("branchName").length(1, 255),
    ];

    /// The prefix setting for the subdomain.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn set_prefix(&mut self, prefix: Option<String>) {
        self.prefix = prefix;
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The branch name setting for the subdomain.
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

impl Shape for SubDomainSetting {
    fn shape_name(&self) -> &'static str {
        "SubDomainSetting"
    }

    fn descriptors(&self) -> &'static [FieldDescriptor] {
        Self::FIELDS
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let d = Self::FIELDS;
        vec![
            Field::of(&d[0], self.prefix.as_ref()),
            Field::of(&d[1], self.branch_name.as_ref()),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn model_eq(&self, other: &dyn Shape) -> bool {
        same_model(self, other)
    }
}

model_traits!(DomainAssociation, SubDomain, SubDomainSetting);
