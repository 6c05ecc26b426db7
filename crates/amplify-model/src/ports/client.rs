//! Amplify client port trait.

use async_trait::async_trait;

use super::error::AmplifyResult;
use crate::operations::{
    CreateAppRequest, CreateAppResult, CreateBackendEnvironmentRequest,
    CreateBackendEnvironmentResult, CreateBranchRequest, CreateBranchResult,
    CreateDeploymentRequest, CreateDeploymentResult, CreateDomainAssociationRequest,
    CreateDomainAssociationResult, CreateWebhookRequest, CreateWebhookResult, DeleteAppRequest,
    DeleteAppResult, DeleteBackendEnvironmentRequest, DeleteBackendEnvironmentResult,
    DeleteBranchRequest, DeleteBranchResult, DeleteDomainAssociationRequest,
    DeleteDomainAssociationResult, DeleteJobRequest, DeleteJobResult, DeleteWebhookRequest,
    DeleteWebhookResult, GenerateAccessLogsRequest, GenerateAccessLogsResult, GetAppRequest,
    GetAppResult, GetArtifactUrlRequest, GetArtifactUrlResult, GetBackendEnvironmentRequest,
    GetBackendEnvironmentResult, GetBranchRequest, GetBranchResult, GetDomainAssociationRequest,
    GetDomainAssociationResult, GetJobRequest, GetJobResult, GetWebhookRequest, GetWebhookResult,
    ListAppsRequest, ListAppsResult, ListArtifactsRequest, ListArtifactsResult,
    ListBackendEnvironmentsRequest, ListBackendEnvironmentsResult, ListBranchesRequest,
    ListBranchesResult, ListDomainAssociationsRequest, ListDomainAssociationsResult,
    ListJobsRequest, ListJobsResult, ListTagsForResourceRequest, ListTagsForResourceResult,
    ListWebhooksRequest, ListWebhooksResult, StartDeploymentRequest, StartDeploymentResult,
    StartJobRequest, StartJobResult, StopJobRequest, StopJobResult, TagResourceRequest,
    TagResourceResult, UntagResourceRequest, UntagResourceResult, UpdateAppRequest, UpdateAppResult,
    UpdateBranchRequest, UpdateBranchResult, UpdateDomainAssociationRequest,
    UpdateDomainAssociationResult, UpdateWebhookRequest, UpdateWebhookResult,
};

/// Port trait for the Amplify service.
///
/// One method per service operation. Implementations own transport concerns
/// (signing, retries, HTTP); this crate only defines the shapes that cross
/// the boundary and maps service error codes with
/// [`AmplifyServiceError::from_error_code`](super::AmplifyServiceError::from_error_code).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmplifyClientPort: Send + Sync {
    /// Creates a new Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `LimitExceeded`,
    /// `DependentServiceFailure`.
    async fn create_app(&self, request: &CreateAppRequest) -> AmplifyResult<CreateAppResult>;

    /// Creates a new backend environment for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `LimitExceeded`.
    async fn create_backend_environment(
        &self,
        request: &CreateBackendEnvironmentRequest,
    ) -> AmplifyResult<CreateBackendEnvironmentResult>;

    /// Creates a new branch for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `LimitExceeded`, `DependentServiceFailure`.
    async fn create_branch(
        &self,
        request: &CreateBranchRequest,
    ) -> AmplifyResult<CreateBranchResult>;

    /// Creates a deployment for a manually deployed Amplify app. Manually deployed apps are not
    /// connected to a repository.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `LimitExceeded`.
    async fn create_deployment(
        &self,
        request: &CreateDeploymentRequest,
    ) -> AmplifyResult<CreateDeploymentResult>;

    /// Creates a new domain association for an Amplify app. This action associates a custom domain
    /// with the Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `LimitExceeded`, `DependentServiceFailure`.
    async fn create_domain_association(
        &self,
        request: &CreateDomainAssociationRequest,
    ) -> AmplifyResult<CreateDomainAssociationResult>;

    /// Creates a new webhook on an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `LimitExceeded`, `DependentServiceFailure`.
    async fn create_webhook(
        &self,
        request: &CreateWebhookRequest,
    ) -> AmplifyResult<CreateWebhookResult>;

    /// Deletes an existing Amplify app specified by an app ID.
    ///
    /// Service errors: `BadRequest`, `NotFound`, `Unauthorized`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn delete_app(&self, request: &DeleteAppRequest) -> AmplifyResult<DeleteAppResult>;

    /// Deletes a backend environment for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn delete_backend_environment(
        &self,
        request: &DeleteBackendEnvironmentRequest,
    ) -> AmplifyResult<DeleteBackendEnvironmentResult>;

    /// Deletes a branch for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn delete_branch(
        &self,
        request: &DeleteBranchRequest,
    ) -> AmplifyResult<DeleteBranchResult>;

    /// Deletes a domain association for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn delete_domain_association(
        &self,
        request: &DeleteDomainAssociationRequest,
    ) -> AmplifyResult<DeleteDomainAssociationResult>;

    /// Deletes a job for a branch of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn delete_job(&self, request: &DeleteJobRequest) -> AmplifyResult<DeleteJobResult>;

    /// Deletes a webhook.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn delete_webhook(
        &self,
        request: &DeleteWebhookRequest,
    ) -> AmplifyResult<DeleteWebhookResult>;

    /// Returns the website access logs for a specific time range using a presigned URL.
    ///
    /// Service errors: `NotFound`, `BadRequest`, `Unauthorized`, `InternalFailure`.
    async fn generate_access_logs(
        &self,
        request: &GenerateAccessLogsRequest,
    ) -> AmplifyResult<GenerateAccessLogsResult>;

    /// Returns an existing Amplify app by appID.
    ///
    /// Service errors: `BadRequest`, `NotFound`, `Unauthorized`, `InternalFailure`.
    async fn get_app(&self, request: &GetAppRequest) -> AmplifyResult<GetAppResult>;

    /// Returns the artifact info that corresponds to an artifact id.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn get_artifact_url(
        &self,
        request: &GetArtifactUrlRequest,
    ) -> AmplifyResult<GetArtifactUrlResult>;

    /// Returns a backend environment for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`.
    async fn get_backend_environment(
        &self,
        request: &GetBackendEnvironmentRequest,
    ) -> AmplifyResult<GetBackendEnvironmentResult>;

    /// Returns a branch for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`.
    async fn get_branch(&self, request: &GetBranchRequest) -> AmplifyResult<GetBranchResult>;

    /// Returns the domain information for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`.
    async fn get_domain_association(
        &self,
        request: &GetDomainAssociationRequest,
    ) -> AmplifyResult<GetDomainAssociationResult>;

    /// Returns a job for a branch of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn get_job(&self, request: &GetJobRequest) -> AmplifyResult<GetJobResult>;

    /// Returns the webhook information that corresponds to a specified webhook ID.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn get_webhook(&self, request: &GetWebhookRequest) -> AmplifyResult<GetWebhookResult>;

    /// Returns a list of the existing Amplify apps.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`.
    async fn list_apps(&self, request: &ListAppsRequest) -> AmplifyResult<ListAppsResult>;

    /// Returns a list of artifacts for a specified app, branch, and job.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `LimitExceeded`.
    async fn list_artifacts(
        &self,
        request: &ListArtifactsRequest,
    ) -> AmplifyResult<ListArtifactsResult>;

    /// Lists the backend environments for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`.
    async fn list_backend_environments(
        &self,
        request: &ListBackendEnvironmentsRequest,
    ) -> AmplifyResult<ListBackendEnvironmentsResult>;

    /// Lists the branches of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`.
    async fn list_branches(
        &self,
        request: &ListBranchesRequest,
    ) -> AmplifyResult<ListBranchesResult>;

    /// Returns the domain associations for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`.
    async fn list_domain_associations(
        &self,
        request: &ListDomainAssociationsRequest,
    ) -> AmplifyResult<ListDomainAssociationsResult>;

    /// Lists the jobs for a branch of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `LimitExceeded`.
    async fn list_jobs(&self, request: &ListJobsRequest) -> AmplifyResult<ListJobsResult>;

    /// Returns a list of tags for a specified Amazon Resource Name (ARN).
    ///
    /// Service errors: `InternalFailure`, `BadRequest`, `ResourceNotFound`.
    async fn list_tags_for_resource(
        &self,
        request: &ListTagsForResourceRequest,
    ) -> AmplifyResult<ListTagsForResourceResult>;

    /// Returns a list of webhooks for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `LimitExceeded`.
    async fn list_webhooks(
        &self,
        request: &ListWebhooksRequest,
    ) -> AmplifyResult<ListWebhooksResult>;

    /// Starts a deployment for a manually deployed app. Manually deployed apps are not connected to
    /// a repository.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn start_deployment(
        &self,
        request: &StartDeploymentRequest,
    ) -> AmplifyResult<StartDeploymentResult>;

    /// Starts a new job for a branch of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn start_job(&self, request: &StartJobRequest) -> AmplifyResult<StartJobResult>;

    /// Stops a job that is in progress for a branch of an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `InternalFailure`, `NotFound`,
    /// `LimitExceeded`.
    async fn stop_job(&self, request: &StopJobRequest) -> AmplifyResult<StopJobResult>;

    /// Tags the resource with a tag key and value.
    ///
    /// Service errors: `InternalFailure`, `BadRequest`, `ResourceNotFound`.
    async fn tag_resource(&self, request: &TagResourceRequest) -> AmplifyResult<TagResourceResult>;

    /// Untags a resource with a specified Amazon Resource Name (ARN).
    ///
    /// Service errors: `InternalFailure`, `BadRequest`, `ResourceNotFound`.
    async fn untag_resource(
        &self,
        request: &UntagResourceRequest,
    ) -> AmplifyResult<UntagResourceResult>;

    /// Updates an existing Amplify app.
    ///
    /// Service errors: `BadRequest`, `NotFound`, `Unauthorized`, `InternalFailure`.
    async fn update_app(&self, request: &UpdateAppRequest) -> AmplifyResult<UpdateAppResult>;

    /// Updates a branch for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn update_branch(
        &self,
        request: &UpdateBranchRequest,
    ) -> AmplifyResult<UpdateBranchResult>;

    /// Creates a new domain association for an Amplify app.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn update_domain_association(
        &self,
        request: &UpdateDomainAssociationRequest,
    ) -> AmplifyResult<UpdateDomainAssociationResult>;

    /// Updates a webhook.
    ///
    /// Service errors: `BadRequest`, `Unauthorized`, `NotFound`, `InternalFailure`,
    /// `DependentServiceFailure`.
    async fn update_webhook(
        &self,
        request: &UpdateWebhookRequest,
    ) -> AmplifyResult<UpdateWebhookResult>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::AmplifyServiceError;
    use crate::shapes::App;
    use std::sync::Arc;

    // Verify the trait is object-safe
    fn _assert_object_safe(_: Arc<dyn AmplifyClientPort>) {}

    #[tokio::test]
    async fn test_mock_returns_app() {
        let mut mock = MockAmplifyClientPort::new();
        mock.expect_get_app()
            .withf(|request| request.app_id() == Some("d123"))
            .times(1)
            .returning(|request| {
                let app = App::default()
                    .with_app_id(request.app_id().unwrap_or_default())
                    .with_name("site");
                Ok(GetAppResult::default().with_app(app))
            });

        let port: Arc<dyn AmplifyClientPort> = Arc::new(mock);
        let result = port
            .get_app(&GetAppRequest::default().with_app_id("d123"))
            .await
            .unwrap();
        assert_eq!(result.app().and_then(App::name), Some("site"));
    }

    #[tokio::test]
    async fn test_mock_surfaces_service_error() {
        let mut mock = MockAmplifyClientPort::new();
        mock.expect_delete_branch().returning(|_| {
            Err(AmplifyServiceError::from_error_code(
                "NotFoundException",
                "branch not found",
            ))
        });

        let request = DeleteBranchRequest::default()
            .with_app_id("d123")
            .with_branch_name("gone");
        let err = mock.delete_branch(&request).await.unwrap_err();
        assert!(matches!(err, AmplifyServiceError::NotFound { .. }));
        assert!(!err.is_retryable());
    }
}
