//! Behaviour every shape shares: equality, hashing, rendering and the
//! absent / empty / populated distinction.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use amplify_model::{
    App, Branch, CreateBranchRequest, CustomRule, DeleteAppResult, GetAppResult, Job, JobSummary,
    ListAppsResult, ListBranchesRequest, Paginated, Shape, Stage, Step, Webhook,
};
use chrono::{DateTime, Utc};

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn sample_branch() -> Branch {
    let mut branch = Branch::default()
        .with_branch_name("main")
        .with_stage(Stage::Production)
        .with_enable_auto_build(true)
        .with_create_time(DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap())
        .with_custom_domains(["example.com"]);
    branch.add_tags_entry("team", "web").unwrap();
    branch
}

#[test]
fn test_reflexive_equality() {
    let branch = sample_branch();
    assert_eq!(branch, branch.clone());
    assert!(branch.model_eq(&branch));
    assert_ne!(Some(&branch), None);
}

#[test]
fn test_equal_values_hash_equal() {
    let a = sample_branch();
    let b = sample_branch();
    assert_eq!(a, b);
    assert_eq!(a.model_hash(), b.model_hash());
    assert_eq!(std_hash(&a), std_hash(&b));
}

#[test]
fn test_presence_difference_breaks_equality() {
    let a = sample_branch();
    let mut b = sample_branch();
    b.set_ttl(Some("300".to_string()));
    assert_ne!(a, b);
    assert!(!a.model_eq(&b));

    let mut c = sample_branch();
    c.set_enable_auto_build(None);
    assert_ne!(a, c);
}

#[test]
fn test_render_is_idempotent() {
    let branch = sample_branch();
    let first = branch.render();
    assert_eq!(first, branch.render());
    assert_eq!(first, branch.to_string());
    assert_eq!(
        first,
        "{branchName: main,tags: {team=web},stage: PRODUCTION,createTime: 2023-11-14T22:13:20Z,\
         enableAutoBuild: true,customDomains: [example.com]}"
    );
}

#[test]
fn test_setters_and_with_chain_agree() {
    let chained = Webhook::default()
        .with_webhook_id("w1")
        .with_branch_name("dev")
        .with_description("deploy on push");

    let mut set = Webhook::default();
    set.set_webhook_id(Some("w1".to_string()));
    set.set_branch_name(Some("dev".to_string()));
    set.set_description(Some("deploy on push".to_string()));

    assert_eq!(chained, set);
    assert_eq!(chained.model_hash(), set.model_hash());
}

#[test]
fn test_sequence_append_then_reset() {
    let first = Step::default().with_step_name("BUILD");
    let second = Step::default().with_step_name("DEPLOY");

    let job = Job::default()
        .with_steps([first.clone()])
        .with_steps([second.clone()]);
    assert_eq!(job.steps(), Some(&[first.clone(), second.clone()][..]));

    let mut job = job;
    job.set_steps(Some(vec![first, second]));
    assert_eq!(job.steps().map(<[Step]>::len), Some(2));
    job.set_steps(None);
    assert_eq!(job.steps(), None);
    assert_eq!(job, Job::default());
}

#[test]
fn test_explicit_empty_is_kept() {
    let request = CreateBranchRequest::default().with_environment_variables(Default::default());
    assert!(request.environment_variables().is_some());
    assert_eq!(request.render(), "{environmentVariables: {}}");
    assert_ne!(request, CreateBranchRequest::default());
}

#[test]
fn test_empty_list_scenario() {
    let result = ListAppsResult::default().with_apps(Vec::<App>::new());
    assert_eq!(result.render(), "{apps: []}");
    assert!(!result.has_more_pages());
    assert_eq!(result.next_token(), None);
}

#[test]
fn test_distinct_types_never_equal() {
    let get = GetAppResult::default();
    let delete = DeleteAppResult::default();
    assert!(!get.model_eq(&delete));
    assert!(!delete.model_eq(&get));

    let shapes: Vec<Box<dyn Shape>> = vec![Box::new(CustomRule::default()), Box::new(JobSummary::default())];
    assert!(!shapes[0].model_eq(shapes[1].as_ref()));
}

#[test]
fn test_absent_fields_contribute_zero() {
    // appId, nextToken and maxResults all absent
    assert_eq!(ListBranchesRequest::default().model_hash(), 31 * 31 * 31);
    assert_eq!(GetAppResult::default().model_hash(), 31);
}

#[test]
fn test_hash_changes_with_content() {
    let a = CustomRule::default().with_source("/a");
    let b = CustomRule::default().with_source("/b");
    assert_ne!(a.model_hash(), b.model_hash());
}
