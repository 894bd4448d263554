use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn autoscaler_json() -> Value {
    json!({
        "apiVersion": "autoscaling/v2",
        "kind": "HorizontalPodAutoscaler",
        "metadata": {
            "name": "web",
            "namespace": "shop",
            "labels": { "app": "web" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "scaleTargetRef": { "apiVersion": "apps/v1", "kind": "Deployment", "name": "web" },
            "minReplicas": 2,
            "maxReplicas": 10
        },
        "status": { "currentReplicas": 3, "desiredReplicas": 4 }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let autoscaler = HorizontalPodAutoscaler::from_dynamic(&autoscaler_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop web Deployment/web 2 10 3 4 3d app=web", autoscaler.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<HorizontalPodAutoscalerObject>(autoscaler_json()).unwrap();

    let from_typed = HorizontalPodAutoscaler::from_typed(&typed, &config).unwrap();
    let from_dynamic = HorizontalPodAutoscaler::from_dynamic(&autoscaler_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case("Deployment", "web", "Deployment/web")]
#[case("StatefulSet", "", "StatefulSet/")]
#[case("", "web", "/web")]
#[case("", "", "")]
fn format_reference_test(#[case] kind: &str, #[case] name: &str, #[case] expected: &str) {
    assert_eq!(expected, format_reference(kind, name));
}

#[test]
fn min_replicas_default_test() {
    let mut object = autoscaler_json();
    object["spec"].as_object_mut().unwrap().remove("minReplicas");

    let autoscaler = HorizontalPodAutoscaler::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("1", autoscaler.columns()[1]);

    let typed = from_value::<HorizontalPodAutoscalerObject>(object).unwrap();
    assert_eq!("1", HorizontalPodAutoscaler::from_typed(&typed, &CtorConfig::new("prod")).unwrap().columns()[1]);
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = HorizontalPodAutoscaler::from_dynamic(&autoscaler_json(), &config).unwrap();

    let mut object = autoscaler_json();
    object["status"]["desiredReplicas"] = json!(6);
    assert!(current.has_changed(&HorizontalPodAutoscaler::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn wrong_typed_max_replicas_test() {
    let mut object = autoscaler_json();
    object["spec"]["maxReplicas"] = json!("ten");

    let error = HorizontalPodAutoscaler::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.maxReplicas"), error.path());
}
