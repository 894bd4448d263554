use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn daemon_set_json() -> Value {
    json!({
        "apiVersion": "apps/v1",
        "kind": "DaemonSet",
        "metadata": {
            "name": "agent",
            "namespace": "kube-system",
            "labels": { "app": "agent" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "selector": { "matchLabels": { "app": "agent", "controller-revision-hash": "5d8" } },
            "template": {}
        },
        "status": {
            "desiredNumberScheduled": 4,
            "currentNumberScheduled": 3,
            "numberReady": 2,
            "updatedNumberScheduled": 3,
            "numberAvailable": 1,
            "numberMisscheduled": 0
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let daemon_set = DaemonSet::from_dynamic(&daemon_set_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod kube-system agent 4 3 2 3 1 app=agent 3d app=agent", daemon_set.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<DaemonSetObject>(daemon_set_json()).unwrap();

    let from_typed = DaemonSet::from_typed(&typed, &config).unwrap();
    let from_dynamic = DaemonSet::from_dynamic(&daemon_set_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case("desiredNumberScheduled", 0)]
#[case("currentNumberScheduled", 1)]
#[case("numberReady", 2)]
#[case("updatedNumberScheduled", 3)]
#[case("numberAvailable", 4)]
fn counter_change_test(#[case] field: &str, #[case] column: usize) {
    let config = CtorConfig::new("prod");
    let current = DaemonSet::from_dynamic(&daemon_set_json(), &config).unwrap();

    let mut object = daemon_set_json();
    object["status"][field] = json!(7);
    let changed = DaemonSet::from_dynamic(&object, &config).unwrap();

    assert_eq!("7", changed.columns()[column]);
    assert!(current.has_changed(&changed));
}

#[test]
fn misscheduled_change_test() {
    let config = CtorConfig::new("prod");
    let current = DaemonSet::from_dynamic(&daemon_set_json(), &config).unwrap();

    let mut object = daemon_set_json();
    object["status"]["numberMisscheduled"] = json!(1);
    assert!(!current.has_changed(&DaemonSet::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn missing_status_test() {
    let mut object = daemon_set_json();
    object.as_object_mut().unwrap().remove("status");

    let daemon_set = DaemonSet::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(vec!["0", "0", "0", "0", "0", "app=agent"], daemon_set.columns());
}

#[test]
fn wrong_typed_counter_test() {
    let mut object = daemon_set_json();
    object["status"]["numberReady"] = json!("two");

    let error = DaemonSet::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("status.numberReady"), error.path());
}
