use k8s_openapi::serde_json::json;
use rstest::rstest;

use super::*;

fn config_map(name: &str, data: Value) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {
            "name": name,
            "namespace": "shop",
            "labels": { "app": "shop" },
            "creationTimestamp": "2024-05-01T10:00:00Z"
        },
        "data": data
    })
}

fn now() -> Timestamp {
    "2024-05-01T12:00:00Z".parse().unwrap()
}

#[rstest]
#[case(false)]
#[case(true)]
fn process_test(#[case] typed: bool) {
    let mut processor = Processor::new(CtorConfig::new("prod"), None, typed);

    let line = processor.process_at(&config_map("settings", json!({ "b": "2", "a": "1" })), &now());
    assert_eq!(Some("prod shop settings a,b 2h app=shop".to_owned()), line.unwrap());

    let line = processor.process_at(&config_map("settings", json!({ "a": "1", "b": "2" })), &now());
    assert_eq!(None, line.unwrap());

    let line = processor.process_at(&config_map("settings", json!({ "a": "1" })), &now());
    assert_eq!(Some("prod shop settings a 2h app=shop".to_owned()), line.unwrap());

    assert_eq!(1, processor.tracked());
}

#[test]
fn forced_kind_test() {
    let mut processor = Processor::new(CtorConfig::new("prod"), Some(ResourceKind::Namespace), false);

    let line = processor.process_at(&config_map("settings", json!({})), &now()).unwrap();
    assert_eq!(Some("prod settings None 2h app=shop".to_owned()), line);
}

#[test]
fn error_does_not_stop_processing_test() {
    let mut processor = Processor::new(CtorConfig::new("prod"), None, false);

    let mut broken = config_map("broken", json!({}));
    broken["metadata"]["labels"] = json!({ "app": 1 });

    let error = processor.process_at(&broken, &now()).unwrap_err();
    assert_eq!(Some("metadata.labels"), error.path());

    assert!(processor.process_at(&config_map("settings", json!({})), &now()).unwrap().is_some());
    assert_eq!(1, processor.tracked());
}
