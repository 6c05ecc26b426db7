//! Request routing: path templates, query parameters and the operation registry.

use amplify_model::registry::{find_operation, resolve_route};
use amplify_model::{
    CreateAppRequest, DEFAULT_ENDPOINT, ENDPOINT_PREFIX, GetBranchRequest, GetJobRequest,
    HttpMethod, JsonCodec, ListJobsRequest, ListTagsForResourceRequest, ModelError, OPERATIONS,
    Operation, StopJobRequest,
};

#[test]
fn test_endpoint_constants() {
    assert_eq!(ENDPOINT_PREFIX, "amplify");
    assert!(DEFAULT_ENDPOINT.starts_with(ENDPOINT_PREFIX));
}

#[test]
fn test_nested_path_is_filled_in_order() {
    let request = GetJobRequest::default()
        .with_app_id("d1")
        .with_branch_name("main")
        .with_job_id("42");
    assert_eq!(
        request.resolve_path().unwrap(),
        "/apps/d1/branches/main/jobs/42"
    );
}

#[test]
fn test_path_values_are_percent_encoded() {
    let request = GetBranchRequest::default()
        .with_app_id("d1")
        .with_branch_name("feature/login page");
    assert_eq!(
        request.resolve_path().unwrap(),
        "/apps/d1/branches/feature%2Flogin%20page"
    );

    let tags = ListTagsForResourceRequest::default()
        .with_resource_arn("arn:aws:amplify:us-east-1:123456789012:apps/d1");
    assert_eq!(
        tags.resolve_path().unwrap(),
        "/tags/arn%3Aaws%3Aamplify%3Aus-east-1%3A123456789012%3Aapps%2Fd1"
    );
}

#[test]
fn test_missing_path_parameter() {
    let request = GetBranchRequest::default().with_app_id("d1");
    match request.route().unwrap_err() {
        ModelError::MissingPathParameter {
            operation,
            parameter,
        } => {
            assert_eq!(operation, "GetBranch");
            assert_eq!(parameter, "branchName");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_route_carries_query_parameters() {
    let request = ListJobsRequest::default()
        .with_app_id("d1")
        .with_branch_name("main")
        .with_next_token("a b")
        .with_max_results(5);
    let route = request.route().unwrap();
    assert_eq!(route.method, HttpMethod::Get);
    assert_eq!(
        route.query,
        vec![
            ("nextToken".to_string(), "a b".to_string()),
            ("maxResults".to_string(), "5".to_string()),
        ]
    );
    assert_eq!(
        route.to_string(),
        "GET /apps/d1/branches/main/jobs?nextToken=a%20b&maxResults=5"
    );
}

#[test]
fn test_body_fields_stay_out_of_the_query() {
    let request = CreateAppRequest::default()
        .with_name("site")
        .with_description("docs");
    let route = request.route().unwrap();
    assert_eq!(route.to_string(), "POST /apps");
    assert!(route.query.is_empty());
}

#[test]
fn test_action_suffix_after_placeholders() {
    let request = StopJobRequest::default()
        .with_app_id("d1")
        .with_branch_name("main")
        .with_job_id("7");
    assert_eq!(
        request.route().unwrap().to_string(),
        "DELETE /apps/d1/branches/main/jobs/7/stop"
    );
}

#[test]
fn test_registry_matches_operation_constants() {
    let info = find_operation("GetJob").unwrap();
    assert_eq!(info.path, GetJobRequest::PATH);
    assert_eq!(info.method, GetJobRequest::METHOD);
    assert_eq!(info.request, "GetJobRequest");
    assert_eq!(info.result, "GetJobResult");

    for info in OPERATIONS {
        assert!(info.path.starts_with('/'), "{} has a relative path", info.name);
        assert_eq!(info.request, format!("{}Request", info.name));
    }
}

#[test]
fn test_registry_resolves_route_from_json() {
    let codec = JsonCodec::default();
    let route = resolve_route(&codec, "listapps", r#"{"maxResults": 10}"#).unwrap();
    assert_eq!(route.to_string(), "GET /apps?maxResults=10");

    let route = resolve_route(
        &codec,
        "UntagResource",
        r#"{"resourceArn": "arn", "tagKeys": ["env", "team"]}"#,
    )
    .unwrap();
    assert_eq!(route.to_string(), "DELETE /tags/arn?tagKeys=env&tagKeys=team");
}

#[test]
fn test_registry_rejects_unknown_operation() {
    let err = resolve_route(&JsonCodec::default(), "LaunchRocket", "{}").unwrap_err();
    assert!(matches!(err, ModelError::UnknownOperation { name } if name == "LaunchRocket"));
}
