use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn ingress_json() -> Value {
    json!({
        "apiVersion": "networking.k8s.io/v1",
        "kind": "Ingress",
        "metadata": {
            "name": "web",
            "namespace": "shop",
            "labels": { "app": "web" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "ingressClassName": "nginx",
            "rules": [
                { "host": "shop.example.com" },
                { "host": "api.example.com" },
                { "host": "shop.example.com" }
            ],
            "tls": [{ "hosts": ["shop.example.com"], "secretName": "shop-tls" }]
        },
        "status": {
            "loadBalancer": { "ingress": [{ "ip": "10.0.0.1" }, { "hostname": "lb.example.com" }] }
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let ingress = Ingress::from_dynamic(&ingress_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!(
        "prod shop web nginx api.example.com,shop.example.com 10.0.0.1,lb.example.com shop-tls 3d app=web",
        ingress.render_at(&now())
    );
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<IngressObject>(ingress_json()).unwrap();

    let from_typed = Ingress::from_typed(&typed, &config).unwrap();
    let from_dynamic = Ingress::from_dynamic(&ingress_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case(json!([{ "ip": "10.0.0.1", "hostname": "lb.example.com" }]), "10.0.0.1")]
#[case(json!([{ "hostname": "lb.example.com" }]), "lb.example.com")]
#[case(json!([{ "ports": [] }]), "None")]
#[case(json!([]), "None")]
fn address_test(#[case] items: Value, #[case] expected: &str) {
    let mut object = ingress_json();
    object["status"]["loadBalancer"]["ingress"] = items;

    let ingress = Ingress::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(expected, ingress.columns()[2]);

    let typed = from_value::<IngressObject>(object).unwrap();
    assert_eq!(expected, Ingress::from_typed(&typed, &CtorConfig::new("prod")).unwrap().columns()[2]);
}

#[test]
fn empty_ingress_render_test() {
    let mut object = ingress_json();
    object["spec"] = json!({});
    object.as_object_mut().unwrap().remove("status");

    let ingress = Ingress::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop web None None None None 3d app=web", ingress.render_at(&now()));
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = Ingress::from_dynamic(&ingress_json(), &config).unwrap();

    let mut object = ingress_json();
    object["status"]["loadBalancer"]["ingress"] = json!([{ "ip": "10.0.0.2" }]);
    assert!(current.has_changed(&Ingress::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn duplicated_host_change_test() {
    let config = CtorConfig::new("prod");
    let current = Ingress::from_dynamic(&ingress_json(), &config).unwrap();

    let mut object = ingress_json();
    object["spec"]["rules"] = json!([{ "host": "api.example.com" }, { "host": "shop.example.com" }]);
    assert!(!current.has_changed(&Ingress::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn wrong_typed_host_test() {
    let mut object = ingress_json();
    object["spec"]["rules"][1]["host"] = json!(443);

    let error = Ingress::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.rules[1].host"), error.path());
}
