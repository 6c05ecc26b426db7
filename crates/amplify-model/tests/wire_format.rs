//! JSON wire format and codec validation modes.

use amplify_model::{
    App, Branch, CreateAppRequest, CustomRule, DomainAssociation, JobSummary, JsonCodec,
    ListAppsResult, ModelError, Settings, Shape, StartJobRequest, ValidationMode,
};
use chrono::{DateTime, Utc};
use serde_json::json;

fn strict() -> JsonCodec {
    JsonCodec::new(Settings {
        validation_mode: Some(ValidationMode::Strict),
        ..Settings::with_defaults()
    })
}

#[test]
fn test_absent_fields_are_omitted() {
    let app = App::default().with_name("site");
    let value = JsonCodec::default().to_value(&app).unwrap();
    assert_eq!(value, json!({ "name": "site" }));
}

#[test]
fn test_empty_collections_are_transmitted() {
    let app = App::default()
        .with_custom_rules(Vec::<CustomRule>::new())
        .with_environment_variables(Default::default())
        .with_description("");
    let value = JsonCodec::default().to_value(&app).unwrap();
    assert_eq!(
        value,
        json!({ "description": "", "environmentVariables": {}, "customRules": [] })
    );
}

#[test]
fn test_irregular_wire_names() {
    let domain = DomainAssociation::default()
        .with_auto_sub_domain_iam_role("arn:aws:iam::123456789012:role/amplify")
        .with_certificate_verification_dns_record("_abc.example.com. CNAME _x.acm");
    let value = JsonCodec::default().to_value(&domain).unwrap();
    assert!(value.get("autoSubDomainIAMRole").is_some());
    assert!(value.get("certificateVerificationDNSRecord").is_some());

    let decoded: DomainAssociation = JsonCodec::default()
        .from_value(value)
        .unwrap();
    assert_eq!(decoded, domain);
}

#[test]
fn test_timestamps_as_epoch_seconds() {
    let whole = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();
    let fractional = DateTime::<Utc>::from_timestamp_millis(1_700_000_000_250).unwrap();
    let summary = JobSummary::default().with_start_time(whole).with_end_time(fractional);

    let value = JsonCodec::default().to_value(&summary).unwrap();
    assert_eq!(value["startTime"], json!(1_700_000_000));
    assert_eq!(value["endTime"], json!(1_700_000_000.25));

    let decoded: JobSummary = JsonCodec::default().from_value(value).unwrap();
    assert_eq!(decoded.start_time(), Some(whole));
    assert_eq!(decoded.end_time(), Some(fractional));
}

#[test]
fn test_sub_millisecond_timestamps_round_trip() {
    // 0.5 ms past the second
    let precise = DateTime::<Utc>::from_timestamp(1_700_000_000, 500_000).unwrap();
    let summary = JobSummary::default().with_start_time(precise);
    assert_eq!(
        summary.start_time(),
        DateTime::<Utc>::from_timestamp(1_700_000_000, 0)
    );

    let codec = JsonCodec::default();
    let decoded: JobSummary = codec.decode(&codec.encode(&summary).unwrap()).unwrap();
    assert_eq!(decoded, summary);
    assert_eq!(decoded.render(), summary.render());
    assert_eq!(decoded.model_hash(), summary.model_hash());
}

#[test]
fn test_timestamp_setter_keeps_milliseconds() {
    let mut summary = JobSummary::default();
    summary.set_end_time(DateTime::<Utc>::from_timestamp(1_700_000_000, 123_456_789));
    assert_eq!(
        summary.end_time().map(|t| t.timestamp_subsec_nanos()),
        Some(123_000_000)
    );

    let codec = JsonCodec::default();
    let value = codec.to_value(&summary).unwrap();
    assert_eq!(value["endTime"], json!(1_700_000_000.123));
    let decoded: JobSummary = codec.from_value(value).unwrap();
    assert_eq!(decoded, summary);
}

#[test]
fn test_decode_nested_list_result() {
    let json = r#"{
        "apps": [
            {"appId": "d1", "name": "one", "platform": "WEB", "createTime": 1700000000},
            {"appId": "d2", "name": "two", "productionBranch": {"branchName": "main"}}
        ],
        "nextToken": "tok",
        "unknownField": true
    }"#;
    let result: ListAppsResult = JsonCodec::default().decode(json).unwrap();
    let apps = result.apps().unwrap();
    assert_eq!(apps.len(), 2);
    assert_eq!(apps[0].platform(), Some("WEB"));
    assert_eq!(
        apps[1].production_branch().and_then(|b| b.branch_name()),
        Some("main")
    );
    assert_eq!(result.next_token(), Some("tok"));
}

#[test]
fn test_request_metadata_not_serialized() {
    use amplify_model::AmplifyRequest;

    let request = StartJobRequest::default()
        .with_app_id("d1")
        .with_branch_name("main")
        .with_job_type(amplify_model::JobType::Release)
        .with_custom_header("x-debug", "1");
    let value = JsonCodec::default().to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({ "appId": "d1", "branchName": "main", "jobType": "RELEASE" })
    );
}

#[test]
fn test_advisory_mode_keeps_invalid_values() {
    let json = r#"{"appId": "this-app-id-is-much-too-long"}"#;
    let app: App = JsonCodec::default().decode(json).unwrap();
    assert_eq!(app.app_id(), Some("this-app-id-is-much-too-long"));
    assert_eq!(app.constraint_violations().len(), 1);
}

#[test]
fn test_strict_mode_rejects_violations() {
    let err = strict().encode(&CreateAppRequest::default()).unwrap_err();
    match err {
        ModelError::ConstraintViolations { shape, violations } => {
            assert_eq!(shape, "CreateAppRequest");
            assert_eq!(violations[0].path, "name");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = strict()
        .decode::<Branch>(r#"{"pullRequestEnvironmentName": "name-longer-than-twenty"}"#)
        .unwrap_err();
    assert!(matches!(err, ModelError::ConstraintViolations { .. }));
}

#[test]
fn test_strict_mode_accepts_valid_shapes() {
    let request = CreateAppRequest::default().with_name("site");
    let json = strict().encode(&request).unwrap();
    assert_eq!(json, r#"{"name":"site"}"#);
}

#[test]
fn test_pretty_output() {
    let codec = JsonCodec::new(Settings {
        pretty_json: Some(true),
        ..Settings::default()
    });
    let json = codec.encode(&App::default().with_name("site")).unwrap();
    assert_eq!(json, "{\n  \"name\": \"site\"\n}");
}

#[test]
fn test_malformed_json_is_error() {
    let err = JsonCodec::default().decode::<App>("{\"name\": 5}").unwrap_err();
    assert!(matches!(err, ModelError::Json(_)));
}

#[test]
fn test_wire_round_trip_preserves_render() {
    let app = App::default()
        .with_app_id("d1")
        .with_enable_basic_auth(false)
        .with_auto_branch_creation_patterns(["feature/*", "release/*"]);
    let codec = JsonCodec::default();
    let decoded: App = codec.decode(&codec.encode(&app).unwrap()).unwrap();
    assert_eq!(decoded.render(), app.render());
    assert_eq!(decoded.model_hash(), app.model_hash());
}
