//! Name-based access to shapes and operations.
//!
//! Lets tooling work with shapes it only knows by name: list them, build an
//! empty instance to read its field metadata, decode JSON into a boxed
//! [`Shape`], or resolve an operation's route from a request document.

use crate::error::{ModelError, ModelResult};
use crate::model::Shape;
use crate::operation::{HttpMethod, Operation, Route};
use crate::{operations, shapes};
use crate::wire::JsonCodec;

/// Static description of one service operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationInfo {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path: &'static str,
    pub request: &'static str,
    pub result: &'static str,
}

macro_rules! registry {
    (
        values: [$($value:ident),+ $(,)?],
        operations: [$($op:ident => $request:ident, $result:ident;)+]
    ) => {
        /// Every shape name: value shapes first, then request/result pairs by operation.
        pub const SHAPE_NAMES: &[&str] = &[
            $(stringify!($value),)+
            $(stringify!($request), stringify!($result),)+
        ];

        /// Every operation, sorted by name.
        pub const OPERATIONS: &[OperationInfo] = &[
            $(OperationInfo {
                name: <operations::$request as Operation>::NAME,
                method: <operations::$request as Operation>::METHOD,
                path: <operations::$request as Operation>::PATH,
                request: stringify!($request),
                result: stringify!($result),
            },)+
        ];

        /// An all-absent instance of the named shape.
        pub fn empty_shape(name: &str) -> Option<Box<dyn Shape>> {
            match name {
                $(stringify!($value) => Some(Box::new(shapes::$value::default())),)+
                $(
                    stringify!($request) => Some(Box::new(operations::$request::default())),
                    stringify!($result) => Some(Box::new(operations::$result::default())),
                )+
                _ => None,
            }
        }

        /// Decode `json` as the named shape.
        pub fn decode_shape(codec: &JsonCodec, name: &str, json: &str) -> ModelResult<Box<dyn Shape>> {
            match name {
                $(stringify!($value) => Ok(Box::new(codec.decode::<shapes::$value>(json)?)),)+
                $(
                    stringify!($request) => Ok(Box::new(codec.decode::<operations::$request>(json)?)),
                    stringify!($result) => Ok(Box::new(codec.decode::<operations::$result>(json)?)),
                )+
                _ => Err(ModelError::UnknownShape { name: name.to_string() }),
            }
        }

        /// Decode `json` as the operation's request and resolve its route.
        pub fn resolve_route(codec: &JsonCodec, operation: &str, json: &str) -> ModelResult<Route> {
            let info = find_operation(operation).ok_or_else(|| ModelError::UnknownOperation {
                name: operation.to_string(),
            })?;
            match info.name {
                $(stringify!($op) => codec.decode::<operations::$request>(json)?.route(),)+
                _ => Err(ModelError::UnknownOperation { name: operation.to_string() }),
            }
        }
    };
}

registry! {
    values: [
        App,
        AutoBranchCreationConfig,
        CustomRule,
        ProductionBranch,
        Artifact,
        BackendEnvironment,
        Branch,
        DomainAssociation,
        SubDomain,
        SubDomainSetting,
        Job,
        JobSummary,
        Step,
        Webhook,
    ],
    operations: [
        CreateApp => CreateAppRequest, CreateAppResult;
        CreateBackendEnvironment => CreateBackendEnvironmentRequest, CreateBackendEnvironmentResult;
        CreateBranch => CreateBranchRequest, CreateBranchResult;
        CreateDeployment => CreateDeploymentRequest, CreateDeploymentResult;
        CreateDomainAssociation => CreateDomainAssociationRequest, CreateDomainAssociationResult;
        CreateWebhook => CreateWebhookRequest, CreateWebhookResult;
        DeleteApp => DeleteAppRequest, DeleteAppResult;
        DeleteBackendEnvironment => DeleteBackendEnvironmentRequest, DeleteBackendEnvironmentResult;
        DeleteBranch => DeleteBranchRequest, DeleteBranchResult;
        DeleteDomainAssociation => DeleteDomainAssociationRequest, DeleteDomainAssociationResult;
        DeleteJob => DeleteJobRequest, DeleteJobResult;
        DeleteWebhook => DeleteWebhookRequest, DeleteWebhookResult;
        GenerateAccessLogs => GenerateAccessLogsRequest, GenerateAccessLogsResult;
        GetApp => GetAppRequest, GetAppResult;
        GetArtifactUrl => GetArtifactUrlRequest, GetArtifactUrlResult;
        GetBackendEnvironment => GetBackendEnvironmentRequest, GetBackendEnvironmentResult;
        GetBranch => GetBranchRequest, GetBranchResult;
        GetDomainAssociation => GetDomainAssociationRequest, GetDomainAssociationResult;
        GetJob => GetJobRequest, GetJobResult;
        GetWebhook => GetWebhookRequest, GetWebhookResult;
        ListApps => ListAppsRequest, ListAppsResult;
        ListArtifacts => ListArtifactsRequest, ListArtifactsResult;
        ListBackendEnvironments => ListBackendEnvironmentsRequest, ListBackendEnvironmentsResult;
        ListBranches => ListBranchesRequest, ListBranchesResult;
        ListDomainAssociations => ListDomainAssociationsRequest, ListDomainAssociationsResult;
        ListJobs => ListJobsRequest, ListJobsResult;
        ListTagsForResource => ListTagsForResourceRequest, ListTagsForResourceResult;
        ListWebhooks => ListWebhooksRequest, ListWebhooksResult;
        StartDeployment => StartDeploymentRequest, StartDeploymentResult;
        StartJob => StartJobRequest, StartJobResult;
        StopJob => StopJobRequest, StopJobResult;
        TagResource => TagResourceRequest, TagResourceResult;
        UntagResource => UntagResourceRequest, UntagResourceResult;
        UpdateApp => UpdateAppRequest, UpdateAppResult;
        UpdateBranch => UpdateBranchRequest, UpdateBranchResult;
        UpdateDomainAssociation => UpdateDomainAssociationRequest, UpdateDomainAssociationResult;
        UpdateWebhook => UpdateWebhookRequest, UpdateWebhookResult;
    ]
}

/// Look up an operation by name, ignoring ASCII case.
pub fn find_operation(name: &str) -> Option<&'static OperationInfo> {
    OPERATIONS
        .iter()
        .find(|info| info.name.eq_ignore_ascii_case(name))
}

/// Whether `name` is a registered shape.
pub fn is_shape(name: &str) -> bool {
    SHAPE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_name_builds_an_empty_instance() {
        for name in SHAPE_NAMES {
            let shape = empty_shape(name).unwrap();
            assert_eq!(shape.shape_name(), *name);
            assert_eq!(shape.render(), "{}");
            assert_eq!(shape.descriptors().len(), shape.fields().len());
        }
    }

    #[test]
    fn test_operation_table() {
        assert_eq!(OPERATIONS.len(), 37);
        assert!(OPERATIONS.windows(2).all(|w| w[0].name < w[1].name));
        for info in OPERATIONS {
            assert!(is_shape(info.request));
            assert!(is_shape(info.result));
            assert!(info.path.starts_with('/'));
        }
    }

    #[test]
    fn test_find_operation_ignores_case() {
        let info = find_operation("listapps").unwrap();
        assert_eq!(info.name, "ListApps");
        assert_eq!(info.method, HttpMethod::Get);
        assert!(find_operation("DescribeApp").is_none());
    }

    #[test]
    fn test_decode_shape_by_name() {
        let codec = JsonCodec::default();
        let shape = decode_shape(&codec, "CustomRule", r#"{"source":"/a","target":"/b"}"#).unwrap();
        assert_eq!(shape.render(), "{source: /a,target: /b}");
        assert!(matches!(
            decode_shape(&codec, "Nope", "{}"),
            Err(ModelError::UnknownShape { .. })
        ));
    }

    #[test]
    fn test_resolve_route_from_document() {
        let codec = JsonCodec::default();
        let route = resolve_route(
            &codec,
            "GetBranch",
            r#"{"appId":"d1","branchName":"feature/x"}"#,
        )
        .unwrap();
        assert_eq!(route.method, HttpMethod::Get);
        assert_eq!(route.path, "/apps/d1/branches/feature%2Fx");
        assert!(route.query.is_empty());
    }
}
