use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn service_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": {
            "name": "web",
            "namespace": "shop",
            "creationTimestamp": "2024-05-01T08:00:00Z"
        },
        "spec": {
            "type": "NodePort",
            "clusterIP": "10.96.0.12",
            "ports": [
                { "port": 80, "nodePort": 30080, "protocol": "TCP" },
                { "port": 53, "protocol": "UDP" }
            ],
            "selector": { "app": "web" }
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:30:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let service = Service::from_dynamic(&service_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!(
        "prod shop web NodePort 10.96.0.12 None 80:30080/TCP,53/UDP app=web 2h None",
        service.render_at(&now())
    );
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<ServiceObject>(service_json()).unwrap();

    let from_typed = Service::from_typed(&typed, &config).unwrap();
    let from_dynamic = Service::from_dynamic(&service_json(), &config).unwrap();

    assert_eq!(from_typed.ports(), from_dynamic.ports());
    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn default_type_test() {
    let object = json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": { "name": "headless", "namespace": "shop" }
    });

    let service = Service::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("ClusterIP", service.type_());
    assert_eq!("prod shop headless ClusterIP None None None None n/a None", service.render_at(&now()));
}

#[rstest]
#[case(80, Some(30080), Some("TCP"), "80:30080/TCP")]
#[case(443, None, None, "443/TCP")]
#[case(53, None, Some("UDP"), "53/UDP")]
fn format_port_test(
    #[case] port: i32,
    #[case] node_port: Option<i32>,
    #[case] protocol: Option<&str>,
    #[case] expected: &str,
) {
    assert_eq!(expected, format_port(port, node_port, protocol));
}

#[test]
fn malformed_port_test() {
    let mut object = service_json();
    object["spec"]["ports"][1]["port"] = json!("dns");

    let error = Service::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert_eq!(Some("spec.ports[1].port"), error.path());
}
