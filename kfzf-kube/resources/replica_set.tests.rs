use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

use super::*;

fn replica_set_json() -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "ReplicaSet",
        "metadata": {
            "name": "web-6b7f",
            "namespace": "shop",
            "labels": { "app": "web", "pod-template-hash": "6b7f" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "replicas": 3,
            "selector": { "matchLabels": { "app": "web", "pod-template-hash": "6b7f" } }
        },
        "status": { "replicas": 3, "readyReplicas": 2, "availableReplicas": 2 }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let replica_set = ReplicaSet::from_dynamic(&replica_set_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop web-6b7f 3 3 2 app=web 3d app=web", replica_set.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<ReplicaSetObject>(replica_set_json()).unwrap();

    let from_typed = ReplicaSet::from_typed(&typed, &config).unwrap();
    let from_dynamic = ReplicaSet::from_dynamic(&replica_set_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn desired_replicas_default_test() {
    let mut object = replica_set_json();
    object["spec"] = json!({ "selector": {} });

    let replica_set = ReplicaSet::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("1", replica_set.columns()[0]);

    let typed = from_value::<ReplicaSetObject>(object).unwrap();
    assert_eq!("1", ReplicaSet::from_typed(&typed, &CtorConfig::new("prod")).unwrap().columns()[0]);
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = ReplicaSet::from_dynamic(&replica_set_json(), &config).unwrap();

    let mut object = replica_set_json();
    object["status"]["readyReplicas"] = json!(3);
    assert!(current.has_changed(&ReplicaSet::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn hidden_counter_change_test() {
    let config = CtorConfig::new("prod");
    let current = ReplicaSet::from_dynamic(&replica_set_json(), &config).unwrap();

    let mut object = replica_set_json();
    object["status"]["availableReplicas"] = json!(3);
    let available = ReplicaSet::from_dynamic(&object, &config).unwrap();

    assert_eq!(current.render_at(&now()), available.render_at(&now()));
    assert!(!current.has_changed(&available));
}

#[test]
fn wrong_typed_replicas_test() {
    let mut object = replica_set_json();
    object["status"]["replicas"] = json!("three");

    let error = ReplicaSet::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("status.replicas"), error.path());
}
