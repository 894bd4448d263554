use k8s_openapi::serde_json::{Value, json};

use super::*;
use crate::CtorConfig;

fn service(name: &str, cluster_ip: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": { "name": name, "namespace": "shop", "creationTimestamp": "2024-05-01T10:00:00Z" },
        "spec": { "clusterIP": cluster_ip }
    })
}

fn resource(object: &Value) -> Resource {
    Resource::from_dynamic(object, &CtorConfig::new("prod")).unwrap()
}

#[test]
fn observe_test() {
    let mut tracker = ResourceTracker::default();
    assert!(tracker.is_empty());

    assert_eq!(Observation::Added, tracker.observe(resource(&service("web", "10.0.0.1"))));
    assert_eq!(Observation::Unchanged, tracker.observe(resource(&service("web", "10.0.0.1"))));
    assert_eq!(Observation::Updated, tracker.observe(resource(&service("web", "10.0.0.2"))));
    assert_eq!(Observation::Added, tracker.observe(resource(&service("api", "10.0.0.3"))));
    assert_eq!(2, tracker.len());

    let id = resource(&service("web", "")).identity();
    let stored = tracker.get(&id).unwrap();
    assert_eq!("10.0.0.2", stored.columns()[1]);
}

#[test]
fn same_name_in_other_cluster_is_added_test() {
    let mut tracker = ResourceTracker::default();
    let object = service("web", "10.0.0.1");

    assert_eq!(Observation::Added, tracker.observe(resource(&object)));

    let other = Resource::from_dynamic(&object, &CtorConfig::new("staging")).unwrap();
    assert_eq!(Observation::Added, tracker.observe(other));
    assert_eq!(2, tracker.iter().count());
}

#[test]
fn remove_test() {
    let mut tracker = ResourceTracker::default();
    let web = resource(&service("web", "10.0.0.1"));
    let id = web.identity();

    tracker.observe(web);
    assert!(tracker.remove(&id).is_some());
    assert!(tracker.remove(&id).is_none());
    assert!(tracker.is_empty());
    assert_eq!(Observation::Added, tracker.observe(resource(&service("web", "10.0.0.1"))));
}

#[test]
fn is_changed_test() {
    assert!(Observation::Added.is_changed());
    assert!(Observation::Updated.is_changed());
    assert!(!Observation::Unchanged.is_changed());
}
