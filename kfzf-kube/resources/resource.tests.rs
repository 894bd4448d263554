use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn pod_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": "web-1",
            "namespace": "shop",
            "labels": { "app": "foo", "pod-template-hash": "abc123" },
            "creationTimestamp": "2024-05-01T10:00:00Z"
        },
        "spec": { "containers": [{ "name": "app" }] },
        "status": { "phase": "Running" }
    })
}

fn certificate_json() -> Value {
    json!({
        "apiVersion": "cert-manager.io/v1",
        "kind": "Certificate",
        "metadata": {
            "name": "web-tls",
            "namespace": "shop",
            "creationTimestamp": "2024-05-01T10:00:00Z"
        },
        "spec": { "secretName": "web-tls" },
        "status": { "conditions": [{ "type": "Ready", "status": "True" }] }
    })
}

fn at(time: &str) -> Timestamp {
    time.parse().unwrap()
}

#[rstest]
#[case(json!({ "apiVersion": "v1", "kind": "Pod" }), ResourceKind::Pod)]
#[case(json!({ "apiVersion": "apps/v1", "kind": "Deployment" }), ResourceKind::Deployment)]
#[case(json!({ "apiVersion": "networking.k8s.io/v1", "kind": "Ingress" }), ResourceKind::Ingress)]
#[case(json!({ "apiVersion": "autoscaling/v2", "kind": "HorizontalPodAutoscaler" }), ResourceKind::HorizontalPodAutoscaler)]
#[case(json!({ "apiVersion": "example.com/v1", "kind": "Pod" }), ResourceKind::Custom)]
#[case(json!({ "apiVersion": "cert-manager.io/v1", "kind": "Certificate" }), ResourceKind::Custom)]
#[case(json!({}), ResourceKind::Custom)]
fn object_kind_test(#[case] object: Value, #[case] expected: ResourceKind) {
    assert_eq!(expected, object_kind(&object).unwrap());
}

#[test]
fn object_kind_wrong_type_test() {
    let error = object_kind(&json!({ "apiVersion": "v1", "kind": 7 })).unwrap_err();
    assert_eq!(Some("kind"), error.path());
}

#[test]
fn from_dynamic_dispatch_test() {
    let config = CtorConfig::new("prod");

    let pod = Resource::from_dynamic(&pod_json(), &config).unwrap();
    assert!(matches!(pod, Resource::Pod(_)));
    assert_eq!(ResourceKind::Pod, pod.kind());

    let certificate = Resource::from_dynamic(&certificate_json(), &config).unwrap();
    assert!(matches!(certificate, Resource::Custom(_)));
    assert_eq!(
        "prod shop web-tls cert-manager.io/v1 Certificate True 5m None",
        certificate.render_at(&at("2024-05-01T10:05:00Z"))
    );
}

#[test]
fn from_dynamic_as_test() {
    let config = CtorConfig::new("prod");
    let resource = Resource::from_dynamic_as(ResourceKind::ConfigMap, &pod_json(), &config).unwrap();

    assert_eq!(ResourceKind::ConfigMap, resource.kind());
    assert_eq!(vec!["None".to_owned()], resource.columns());
}

#[test]
fn from_typed_value_test() {
    let config = CtorConfig::new("prod");
    let now = at("2024-05-01T10:05:00Z");

    let typed = Resource::from_typed_value(ResourceKind::Pod, pod_json(), &config).unwrap();
    let dynamic = Resource::from_dynamic(&pod_json(), &config).unwrap();
    assert!(!typed.has_changed(&dynamic));
    assert_eq!(typed.render_at(&now), dynamic.render_at(&now));

    let typed = Resource::from_typed_value(ResourceKind::Custom, certificate_json(), &config).unwrap();
    let dynamic = Resource::from_dynamic(&certificate_json(), &config).unwrap();
    assert!(!typed.has_changed(&dynamic));
    assert_eq!(typed.render_at(&now), dynamic.render_at(&now));
}

#[test]
fn from_typed_value_conversion_error_test() {
    let mut object = pod_json();
    object["spec"]["containers"] = json!("app");

    let result = Resource::from_typed_value(ResourceKind::Pod, object, &CtorConfig::new("prod"));
    assert!(matches!(result, Err(ConstructionError::Conversion(_))));
}

#[test]
fn from_dynamic_object_test() {
    let config = CtorConfig::new("prod");
    let object = from_value::<DynamicObject>(pod_json()).unwrap();

    let resource = Resource::from_dynamic_object(&object, &config).unwrap();
    assert!(matches!(resource, Resource::Pod(_)));
    assert!(!resource.has_changed(&Resource::from_dynamic(&pod_json(), &config).unwrap()));
}

#[test]
fn age_only_change_test() {
    let config = CtorConfig::new("prod");
    let first = Resource::from_dynamic(&pod_json(), &config).unwrap();
    let second = Resource::from_dynamic(&pod_json(), &config).unwrap();

    assert_ne!(
        first.render_at(&at("2024-05-01T10:05:00Z")),
        second.render_at(&at("2024-05-04T10:05:00Z"))
    );
    assert!(!first.has_changed(&second));
}

#[test]
fn label_change_test() {
    let config = CtorConfig::new("prod");
    let first = Resource::from_dynamic(&pod_json(), &config).unwrap();

    let mut object = pod_json();
    object["metadata"]["labels"]["app"] = json!("bar");
    let second = Resource::from_dynamic(&object, &config).unwrap();

    assert!(first.has_changed(&second));
}

#[test]
fn different_kind_is_changed_test() {
    let config = CtorConfig::new("prod");
    let pod = Resource::from_dynamic_as(ResourceKind::Pod, &pod_json(), &config).unwrap();
    let config_map = Resource::from_dynamic_as(ResourceKind::ConfigMap, &pod_json(), &config).unwrap();

    assert!(pod.has_changed(&config_map));
}

#[test]
fn identity_test() {
    let config = CtorConfig::new("prod");

    let pod = Resource::from_dynamic(&pod_json(), &config).unwrap();
    let id = pod.identity();
    assert_eq!("prod", id.cluster);
    assert_eq!("Pod", id.kind);
    assert_eq!("prod/shop/Pod/web-1", id.to_string());

    let certificate = Resource::from_dynamic(&certificate_json(), &config).unwrap();
    assert_eq!("prod/shop/Certificate.cert-manager.io/web-tls", certificate.identity().to_string());

    let node = json!({ "apiVersion": "v1", "kind": "Node", "metadata": { "name": "node-a" } });
    let node = Resource::from_dynamic(&node, &config).unwrap();
    assert_eq!("prod/Node/node-a", node.identity().to_string());
}

#[test]
fn cluster_scoped_render_test() {
    let object = json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": { "name": "shop", "creationTimestamp": "2024-05-01T10:00:00Z" },
        "status": { "phase": "Active" }
    });

    let namespace = Resource::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop Active 5m None", namespace.render_at(&at("2024-05-01T10:05:00Z")));
}

#[test]
fn construction_error_is_not_fatal_test() {
    let config = CtorConfig::new("prod");
    let mut broken = pod_json();
    broken["metadata"]["creationTimestamp"] = json!("not-a-date");

    let results = [broken, pod_json()]
        .iter()
        .map(|object| Resource::from_dynamic(object, &config))
        .collect::<Vec<_>>();

    assert!(matches!(results[0], Err(ConstructionError::InvalidTimestamp { .. })));
    assert!(results[1].is_ok());
}

#[rstest]
#[case("web", "web")]
#[case("*/5_*_*_*_*", "*/5 * * * *")]
#[case("a_b", " a \t b ")]
#[case("None", "  ")]
fn single_token_test(#[case] expected: &str, #[case] value: &str) {
    assert_eq!(expected, single_token(value));
}
