use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

use super::*;

fn node_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Node",
        "metadata": {
            "name": "node-a",
            "labels": {
                "kubernetes.io/hostname": "node-a",
                "node-role.kubernetes.io/control-plane": "",
                "node-role.kubernetes.io/worker": ""
            },
            "creationTimestamp": "2024-04-01T00:00:00Z"
        },
        "spec": {
            "taints": [{ "key": "dedicated", "value": "infra", "effect": "NoSchedule" }]
        },
        "status": {
            "conditions": [
                { "type": "MemoryPressure", "status": "False" },
                { "type": "Ready", "status": "True" }
            ],
            "addresses": [
                { "type": "Hostname", "address": "node-a" },
                { "type": "InternalIP", "address": "192.168.1.10" }
            ],
            "nodeInfo": {
                "kubeletVersion": "v1.30.2",
                "architecture": "amd64",
                "bootID": "",
                "containerRuntimeVersion": "",
                "kernelVersion": "",
                "kubeProxyVersion": "",
                "machineID": "",
                "operatingSystem": "linux",
                "osImage": "",
                "systemUUID": ""
            }
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T00:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let node = Node::from_dynamic(&node_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!(&["control-plane".to_owned(), "worker".to_owned()], node.roles());
    assert_eq!(
        "prod node-a Ready control-plane,worker 192.168.1.10 v1.30.2 dedicated=infra:NoSchedule 30d \
         kubernetes.io/hostname=node-a,node-role.kubernetes.io/control-plane=,node-role.kubernetes.io/worker=",
        node.render_at(&now())
    );
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<NodeObject>(node_json()).unwrap();

    let from_typed = Node::from_typed(&typed, &config).unwrap();
    let from_dynamic = Node::from_dynamic(&node_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn status_test() {
    let config = CtorConfig::new("prod");

    let mut object = node_json();
    object["spec"]["unschedulable"] = json!(true);
    assert_eq!("Ready,SchedulingDisabled", Node::from_dynamic(&object, &config).unwrap().status());

    let mut object = node_json();
    object["status"]["conditions"][1]["status"] = json!("Unknown");
    let node = Node::from_dynamic(&object, &config).unwrap();
    assert_eq!("NotReady", node.status());
    assert!(node.has_changed(&Node::from_dynamic(&node_json(), &config).unwrap()));

    let mut object = node_json();
    object["status"]["conditions"] = json!([]);
    assert_eq!("NotReady", Node::from_dynamic(&object, &config).unwrap().status());
}

#[test]
fn taint_without_key_is_fatal_test() {
    let mut object = node_json();
    object["spec"]["taints"][0] = json!({ "effect": "NoSchedule" });

    let error = Node::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert_eq!(Some("spec.taints[0].key"), error.path());
}
