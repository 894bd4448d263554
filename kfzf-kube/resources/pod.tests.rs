use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

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
        "spec": {
            "nodeName": "node-a",
            "containers": [{ "name": "app", "image": "nginx" }, { "name": "proxy", "image": "envoy" }]
        },
        "status": {
            "phase": "Running",
            "podIP": "10.0.0.5",
            "hostIP": "192.168.1.10",
            "containerStatuses": [
                { "name": "app", "ready": true, "restartCount": 2, "image": "nginx", "imageID": "", "state": { "running": {} } },
                { "name": "proxy", "ready": false, "restartCount": 1, "image": "envoy", "imageID": "", "state": { "running": {} } }
            ]
        }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:05:00Z".parse().unwrap()
}

#[test]
fn from_dynamic_test() {
    let pod = Pod::from_dynamic(&pod_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("Running", pod.status());
    assert_eq!(3, pod.restarts());
    assert_eq!("node-a", pod.node_name());
    assert_eq!(&["app".to_owned(), "proxy".to_owned()], pod.containers());
    assert_eq!(
        "prod shop web-1 Running 1/2 3 10.0.0.5 192.168.1.10 node-a app,proxy 5m app=foo",
        pod.render_at(&now())
    );
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<PodObject>(pod_json()).unwrap();

    let from_typed = Pod::from_typed(&typed, &config).unwrap();
    let from_dynamic = Pod::from_dynamic(&pod_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn render_contains_identity_test() {
    let typed = from_value::<PodObject>(pod_json()).unwrap();
    let pod = Pod::from_typed(&typed, &CtorConfig::new("prod")).unwrap();
    let line = pod.render();

    assert!(line.starts_with("prod shop web-1 "));
    assert!(line.contains(&pod.meta().age()));
    assert!(!line.contains('\n'));
}

#[test]
fn status_test() {
    let config = CtorConfig::new("prod");

    let mut object = pod_json();
    object["status"]["containerStatuses"][1]["state"] = json!({ "waiting": { "reason": "CrashLoopBackOff" } });
    assert_eq!("CrashLoopBackOff", Pod::from_dynamic(&object, &config).unwrap().status());

    object["metadata"]["deletionTimestamp"] = json!("2024-05-01T11:00:00Z");
    assert_eq!("Terminating", Pod::from_dynamic(&object, &config).unwrap().status());

    let typed = from_value::<PodObject>(object).unwrap();
    assert_eq!("Terminating", Pod::from_typed(&typed, &config).unwrap().status());
}

#[test]
fn minimal_pod_test() {
    let object = json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": "pending", "namespace": "shop", "creationTimestamp": "2024-05-01T10:00:00Z" }
    });

    let pod = Pod::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop pending None 0/0 0 None None None None 5m None", pod.render_at(&now()));
}

#[test]
fn malformed_container_is_fatal_test() {
    let mut object = pod_json();
    object["spec"]["containers"][1] = json!({ "image": "envoy" });

    let error = Pod::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert_eq!(Some("spec.containers[1].name"), error.path());

    let mut object = pod_json();
    object["status"]["containerStatuses"][0]["restartCount"] = json!("two");
    let error = Pod::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert_eq!(Some("status.containerStatuses[0].restartCount"), error.path());
}

#[test]
fn has_changed_test() {
    let config = CtorConfig::new("prod");
    let current = Pod::from_dynamic(&pod_json(), &config).unwrap();

    let same = Pod::from_dynamic(&pod_json(), &config).unwrap();
    assert!(!current.has_changed(&same));

    let mut object = pod_json();
    object["status"]["containerStatuses"][0]["restartCount"] = json!(3);
    assert!(current.has_changed(&Pod::from_dynamic(&object, &config).unwrap()));

    let mut object = pod_json();
    object["status"]["podIP"] = json!("10.0.0.6");
    assert!(current.has_changed(&Pod::from_dynamic(&object, &config).unwrap()));

    let mut object = pod_json();
    object["metadata"]["resourceVersion"] = json!("12345");
    object["metadata"]["annotations"] = json!({ "note": "ignored" });
    assert!(!current.has_changed(&Pod::from_dynamic(&object, &config).unwrap()));

    let mut object = pod_json();
    object["metadata"]["labels"]["controller-revision-hash"] = json!("v2");
    let relabeled = Pod::from_dynamic(&object, &config).unwrap();
    assert_eq!(current.render_at(&now()), relabeled.render_at(&now()));
    assert!(!current.has_changed(&relabeled));
}
