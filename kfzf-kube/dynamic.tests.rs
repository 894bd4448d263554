use k8s_openapi::serde_json::json;

use super::*;

#[test]
fn nested_field_test() {
    let object = json!({ "spec": { "replicas": 3, "template": null }, "kind": "Deployment" });

    assert_eq!(Some(&json!(3)), nested_field(&object, &["spec", "replicas"]).unwrap());
    assert_eq!(None, nested_field(&object, &["spec", "paused"]).unwrap());
    assert_eq!(None, nested_field(&object, &["status", "replicas"]).unwrap());
    assert_eq!(None, nested_field(&object, &["spec", "template", "spec"]).unwrap());

    let error = nested_field(&object, &["kind", "name"]).unwrap_err();
    assert_eq!(Some("kind"), error.path());
}

#[test]
fn nested_str_test() {
    let object = json!({ "metadata": { "name": "web-1", "generation": 2 } });

    assert_eq!(Some("web-1"), nested_str(&object, &["metadata", "name"]).unwrap());
    assert_eq!(None, nested_str(&object, &["metadata", "namespace"]).unwrap());
    assert_eq!("", nested_string(&object, &["metadata", "namespace"]).unwrap());
    assert!(matches!(
        nested_str(&object, &["metadata", "generation"]),
        Err(ConstructionError::InvalidField { .. })
    ));
}

#[test]
fn required_str_test() {
    let object = json!({ "metadata": { "name": "web-1" } });

    assert_eq!("web-1", required_str(&object, &["metadata", "name"]).unwrap());

    let error = required_str(&object, &["metadata", "uid"]).unwrap_err();
    assert!(matches!(error, ConstructionError::MissingField { .. }));
    assert_eq!("required field 'metadata.uid' is missing", error.to_string());
}

#[test]
fn nested_numbers_test() {
    let object = json!({ "status": { "replicas": 2, "big": 5_000_000_000_i64, "ready": true, "phase": "Running" } });

    assert_eq!(Some(2), nested_i32(&object, &["status", "replicas"]).unwrap());
    assert_eq!(Some(5_000_000_000), nested_i64(&object, &["status", "big"]).unwrap());
    assert!(nested_i32(&object, &["status", "big"]).is_err());
    assert!(nested_i64(&object, &["status", "phase"]).is_err());
    assert_eq!(Some(true), nested_bool(&object, &["status", "ready"]).unwrap());
    assert!(nested_bool(&object, &["status", "replicas"]).is_err());
    assert_eq!(None, nested_i32(&object, &["status", "missing"]).unwrap());
}

#[test]
fn nested_collections_test() {
    let object = json!({
        "spec": {
            "modes": ["ReadWriteOnce", "ReadOnlyMany"],
            "mixed": ["a", 1],
            "data": { "b": "2", "a": "1" },
            "broken": { "a": "1", "b": 2 }
        }
    });

    assert_eq!(
        vec!["ReadWriteOnce", "ReadOnlyMany"],
        nested_string_vec(&object, &["spec", "modes"]).unwrap()
    );
    assert!(nested_string_vec(&object, &["spec", "absent"]).unwrap().is_empty());
    assert!(nested_string_vec(&object, &["spec", "mixed"]).is_err());
    assert_eq!(2, nested_slice(&object, &["spec", "mixed"]).unwrap().len());
    assert!(nested_slice(&object, &["spec", "data"]).is_err());

    let map = nested_string_map(&object, &["spec", "data"]).unwrap().unwrap();
    assert_eq!(Some(&"1".to_owned()), map.get("a"));
    assert_eq!(None, nested_string_map(&object, &["spec", "absent"]).unwrap());
    assert!(nested_string_map(&object, &["spec", "broken"]).is_err());
    assert!(nested_string_map(&object, &["spec", "modes"]).is_err());

    assert_eq!(vec!["a", "b"], nested_keys(&object, &["spec", "data"]).unwrap());
    assert!(nested_keys(&object, &["spec", "absent"]).unwrap().is_empty());
}

#[test]
fn nested_timestamp_test() {
    let object = json!({ "metadata": { "creationTimestamp": "2024-05-01T10:00:00Z", "bad": "not-a-date" } });

    let expected: Timestamp = "2024-05-01T10:00:00Z".parse().unwrap();
    assert_eq!(
        Some(expected),
        nested_timestamp(&object, &["metadata", "creationTimestamp"]).unwrap()
    );
    assert_eq!(None, nested_timestamp(&object, &["metadata", "deletionTimestamp"]).unwrap());

    let error = nested_timestamp(&object, &["metadata", "bad"]).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidTimestamp { .. }));
    assert!(error.to_string().contains("not-a-date"));
}

#[test]
fn map_items_test() {
    let object = json!({ "spec": { "containers": [{ "name": "app" }, { "name": "sidecar" }, { "image": "nginx" }] } });

    let names = map_items(&object, &["spec", "containers"], |c| nested_string(c, &["name"])).unwrap();
    assert_eq!(vec!["app", "sidecar", ""], names);

    let error = map_items(&object, &["spec", "containers"], |c| {
        required_str(c, &["name"]).map(String::from)
    })
    .unwrap_err();
    assert_eq!(Some("spec.containers[2].name"), error.path());
    assert!(map_items(&object, &["spec", "volumes"], |c| nested_string(c, &["name"])).unwrap().is_empty());
}

#[test]
fn condition_status_test() {
    let object = json!({
        "status": {
            "conditions": [
                { "type": "MemoryPressure", "status": "False" },
                { "type": "Ready", "status": "True" }
            ]
        }
    });

    assert_eq!(
        Some("True".to_owned()),
        condition_status(&object, &["status", "conditions"], "Ready").unwrap()
    );
    assert_eq!(None, condition_status(&object, &["status", "conditions"], "Synced").unwrap());
    assert_eq!(None, condition_status(&json!({}), &["status", "conditions"], "Ready").unwrap());

    let broken = json!({ "status": { "conditions": [{ "type": "Ready", "status": true }] } });
    let error = condition_status(&broken, &["status", "conditions"], "Ready").unwrap_err();
    assert_eq!(Some("status.conditions[0].status"), error.path());
}
