use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn deployment_json() -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": {
            "name": "web",
            "namespace": "shop",
            "labels": { "app": "web", "app.kubernetes.io/managed-by": "helm" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "replicas": 3,
            "selector": { "matchLabels": { "app": "web", "pod-template-hash": "6b7f" } }
        },
        "status": { "replicas": 3, "readyReplicas": 2, "updatedReplicas": 3, "availableReplicas": 2 }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let deployment = Deployment::from_dynamic(&deployment_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop web 3 2 3 2 app=web 3d app=web", deployment.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<DeploymentObject>(deployment_json()).unwrap();

    let from_typed = Deployment::from_typed(&typed, &config).unwrap();
    let from_dynamic = Deployment::from_dynamic(&deployment_json(), &config).unwrap();

    assert_eq!(from_typed.replicas(), from_dynamic.replicas());
    assert_eq!(from_typed.selector(), from_dynamic.selector());
    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case(json!({ "replicas": 5, "selector": {} }), 5)]
#[case(json!({ "replicas": 0, "selector": {} }), 0)]
#[case(json!({ "selector": {} }), 1)]
fn desired_replicas_test(#[case] spec: Value, #[case] expected: i32) {
    let mut object = deployment_json();
    object["spec"] = spec;

    let deployment = Deployment::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(expected, deployment.replicas().desired);

    let typed = from_value::<DeploymentObject>(object).unwrap();
    assert_eq!(expected, Deployment::from_typed(&typed, &CtorConfig::new("prod")).unwrap().replicas().desired);
}

#[test]
fn selector_change_test() {
    let config = CtorConfig::new("prod");
    let current = Deployment::from_dynamic(&deployment_json(), &config).unwrap();

    let mut object = deployment_json();
    object["spec"]["selector"]["matchLabels"]["pod-template-hash"] = json!("9c1d");
    assert!(!current.has_changed(&Deployment::from_dynamic(&object, &config).unwrap()));

    let mut object = deployment_json();
    object["spec"]["selector"]["matchLabels"]["app"] = json!("api");
    assert!(current.has_changed(&Deployment::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = Deployment::from_dynamic(&deployment_json(), &config).unwrap();

    let mut object = deployment_json();
    object["status"]["readyReplicas"] = json!(3);
    assert!(current.has_changed(&Deployment::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn hidden_counter_change_test() {
    let config = CtorConfig::new("prod");
    let current = Deployment::from_dynamic(&deployment_json(), &config).unwrap();

    let mut object = deployment_json();
    object["status"]["replicas"] = json!(4);
    let scaled = Deployment::from_dynamic(&object, &config).unwrap();

    assert_eq!(current.render_at(&now()), scaled.render_at(&now()));
    assert!(!current.has_changed(&scaled));
}

#[test]
fn wrong_typed_replicas_test() {
    let mut object = deployment_json();
    object["status"]["readyReplicas"] = json!("two");

    let error = Deployment::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("status.readyReplicas"), error.path());
}
