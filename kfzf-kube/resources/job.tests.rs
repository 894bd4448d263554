use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn job_json() -> Value {
    json!({
        "apiVersion": "batch/v1",
        "kind": "Job",
        "metadata": {
            "name": "migrate",
            "namespace": "shop",
            "labels": { "app": "migrate" },
            "creationTimestamp": "2024-05-01T08:00:00Z"
        },
        "spec": { "completions": 3, "template": {} },
        "status": { "succeeded": 1, "active": 2 }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let job = Job::from_dynamic(&job_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop migrate 1/3 2 0 2h app=migrate", job.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<JobObject>(job_json()).unwrap();

    let from_typed = Job::from_typed(&typed, &config).unwrap();
    let from_dynamic = Job::from_dynamic(&job_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case(json!({ "completions": 5, "template": {} }), "1/5")]
#[case(json!({ "template": {} }), "1/1")]
fn completions_test(#[case] spec: Value, #[case] expected: &str) {
    let mut object = job_json();
    object["spec"] = spec;

    let job = Job::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(expected, job.columns()[0]);

    let typed = from_value::<JobObject>(object).unwrap();
    assert_eq!(expected, Job::from_typed(&typed, &CtorConfig::new("prod")).unwrap().columns()[0]);
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = Job::from_dynamic(&job_json(), &config).unwrap();

    let mut object = job_json();
    object["status"] = json!({ "succeeded": 2, "active": 1 });
    let progressed = Job::from_dynamic(&object, &config).unwrap();

    assert!(current.has_changed(&progressed));
    assert_eq!("prod shop migrate 2/3 1 0 2h app=migrate", progressed.render_at(&now()));
}

#[test]
fn wrong_typed_failed_test() {
    let mut object = job_json();
    object["status"]["failed"] = json!([1]);

    let error = Job::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("status.failed"), error.path());
}
