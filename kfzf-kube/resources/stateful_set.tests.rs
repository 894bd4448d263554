use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

use super::*;

fn stateful_set_json() -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "StatefulSet",
        "metadata": {
            "name": "db",
            "namespace": "shop",
            "labels": { "app": "db" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "replicas": 3,
            "serviceName": "db",
            "selector": { "matchLabels": { "app": "db" } },
            "template": {}
        },
        "status": { "replicas": 3, "currentReplicas": 3, "readyReplicas": 1 }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let stateful_set = StatefulSet::from_dynamic(&stateful_set_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop db 3 1 app=db 3d app=db", stateful_set.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<StatefulSetObject>(stateful_set_json()).unwrap();

    let from_typed = StatefulSet::from_typed(&typed, &config).unwrap();
    let from_dynamic = StatefulSet::from_dynamic(&stateful_set_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = StatefulSet::from_dynamic(&stateful_set_json(), &config).unwrap();

    let mut object = stateful_set_json();
    object["status"]["readyReplicas"] = json!(3);
    assert!(current.has_changed(&StatefulSet::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn hidden_counter_change_test() {
    let config = CtorConfig::new("prod");
    let current = StatefulSet::from_dynamic(&stateful_set_json(), &config).unwrap();

    let mut object = stateful_set_json();
    object["status"]["currentReplicas"] = json!(2);
    let rolling = StatefulSet::from_dynamic(&object, &config).unwrap();

    assert_eq!(current.render_at(&now()), rolling.render_at(&now()));
    assert!(!current.has_changed(&rolling));
}

#[test]
fn wrong_typed_replicas_test() {
    let mut object = stateful_set_json();
    object["spec"]["replicas"] = json!(3.5);

    let error = StatefulSet::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.replicas"), error.path());
}
