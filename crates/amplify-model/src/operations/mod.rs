//! Request and result shapes, one pair per service operation.
//!
//! Each request implements [`Operation`](crate::Operation), which ties it to
//! its result type, HTTP method and URI template.

mod access_logs;
mod apps;
mod artifacts;
mod backend_environments;
mod branches;
mod deployments;
mod domain_associations;
mod jobs;
mod tags;
mod webhooks;

pub use access_logs::{GenerateAccessLogsRequest, GenerateAccessLogsResult};
pub use apps::{
    CreateAppRequest, CreateAppResult, DeleteAppRequest, DeleteAppResult, GetAppRequest,
    GetAppResult, ListAppsRequest, ListAppsResult, UpdateAppRequest, UpdateAppResult,
};
pub use artifacts::{
    GetArtifactUrlRequest, GetArtifactUrlResult, ListArtifactsRequest, ListArtifactsResult,
};
pub use backend_environments::{
    CreateBackendEnvironmentRequest, CreateBackendEnvironmentResult,
    DeleteBackendEnvironmentRequest, DeleteBackendEnvironmentResult, GetBackendEnvironmentRequest,
    GetBackendEnvironmentResult, ListBackendEnvironmentsRequest, ListBackendEnvironmentsResult,
};
pub use branches::{
    CreateBranchRequest, CreateBranchResult, DeleteBranchRequest, DeleteBranchResult,
    GetBranchRequest, GetBranchResult, ListBranchesRequest, ListBranchesResult, UpdateBranchRequest,
    UpdateBranchResult,
};
pub use deployments::{
    CreateDeploymentRequest, CreateDeploymentResult, StartDeploymentRequest, StartDeploymentResult,
};
pub use domain_associations::{
    CreateDomainAssociationRequest, CreateDomainAssociationResult, DeleteDomainAssociationRequest,
    DeleteDomainAssociationResult, GetDomainAssociationRequest, GetDomainAssociationResult,
    ListDomainAssociationsRequest, ListDomainAssociationsResult, UpdateDomainAssociationRequest,
    UpdateDomainAssociationResult,
};
pub use jobs::{
    DeleteJobRequest, DeleteJobResult, GetJobRequest, GetJobResult, ListJobsRequest, ListJobsResult,
    StartJobRequest, StartJobResult, StopJobRequest, StopJobResult,
};
pub use tags::{
    ListTagsForResourceRequest, ListTagsForResourceResult, TagResourceRequest, TagResourceResult,
    UntagResourceRequest, UntagResourceResult,
};
pub use webhooks::{
    CreateWebhookRequest, CreateWebhookResult, DeleteWebhookRequest, DeleteWebhookResult,
    GetWebhookRequest, GetWebhookResult, ListWebhooksRequest, ListWebhooksResult,
    UpdateWebhookRequest, UpdateWebhookResult,
};
