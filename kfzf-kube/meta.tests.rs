use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use k8s_openapi::serde_json::json;
use std::io::Write;
use std::sync::Mutex;

use super::*;

fn created() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

fn object_meta() -> ObjectMeta {
    ObjectMeta {
        name: Some("web-1".to_owned()),
        namespace: Some("default".to_owned()),
        labels: Some(BTreeMap::from([
            ("app".to_owned(), "foo".to_owned()),
            ("pod-template-hash".to_owned(), "abc123".to_owned()),
        ])),
        creation_timestamp: Some(Time(created())),
        ..Default::default()
    }
}

fn dynamic_object() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": "web-1",
            "namespace": "default",
            "labels": { "pod-template-hash": "abc123", "app": "foo" },
            "creationTimestamp": "2024-05-01T10:00:00Z"
        }
    })
}

#[test]
fn from_object_meta_test() {
    let meta = ResourceMeta::from_object_meta(&object_meta(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("web-1", meta.name());
    assert_eq!("default", meta.namespace());
    assert_eq!("prod", meta.cluster());
    assert_eq!(2, meta.labels().len());
    assert_eq!(Some(&created()), meta.creation_time());
    assert_eq!("app=foo", meta.render_labels());
}

#[test]
fn from_object_meta_without_name_test() {
    let meta = ObjectMeta {
        name: None,
        ..object_meta()
    };

    let result = ResourceMeta::from_object_meta(&meta, &CtorConfig::new("prod"));
    assert!(matches!(result, Err(ConstructionError::MissingField { .. })));
}

#[test]
fn cross_path_equivalence_test() {
    let config = CtorConfig::new("prod");
    let typed = ResourceMeta::from_object_meta(&object_meta(), &config).unwrap();
    let dynamic = ResourceMeta::from_dynamic(&dynamic_object(), &config).unwrap();

    assert_eq!(typed.name(), dynamic.name());
    assert_eq!(typed.namespace(), dynamic.namespace());
    assert_eq!(typed.cluster(), dynamic.cluster());
    assert_eq!(typed.labels(), dynamic.labels());
    assert_eq!(typed.creation_time(), dynamic.creation_time());
    assert!(!typed.has_changed(&dynamic));
}

#[test]
fn cluster_is_injected_test() {
    let mut object = dynamic_object();
    object["metadata"]["cluster"] = json!("from-object");
    object["metadata"]["clusterName"] = json!("from-object");

    let meta = ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod", meta.cluster());
}

#[test]
fn missing_labels_are_benign_test() {
    let mut object = dynamic_object();
    object["metadata"].as_object_mut().unwrap().remove("labels");

    let logs = capture_logs(|| {
        let meta = ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
        assert!(meta.labels().is_empty());
        assert_eq!("None", meta.render_labels());
    });

    assert_eq!(1, logs.matches("metadata.labels was not found").count());
}

#[test]
fn malformed_labels_are_fatal_test() {
    let mut object = dynamic_object();
    object["metadata"]["labels"] = json!({ "app": 1 });
    assert!(matches!(
        ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")),
        Err(ConstructionError::InvalidField { .. })
    ));

    object["metadata"]["labels"] = json!(["app=foo"]);
    assert!(matches!(
        ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")),
        Err(ConstructionError::InvalidField { .. })
    ));
}

#[test]
fn invalid_timestamp_is_fatal_test() {
    let mut object = dynamic_object();
    object["metadata"]["creationTimestamp"] = json!("not-a-date");

    let error = ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidTimestamp { .. }));
    assert_eq!(Some("metadata.creationTimestamp"), error.path());
    assert!(error.to_string().contains("not-a-date"));
}

#[test]
fn missing_timestamp_is_benign_test() {
    let mut object = dynamic_object();
    object["metadata"].as_object_mut().unwrap().remove("creationTimestamp");

    let meta = ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(None, meta.creation_time());
    assert_eq!("n/a", meta.age());
}

#[test]
fn invalid_identity_is_fatal_test() {
    let config = CtorConfig::new("prod");

    let mut object = dynamic_object();
    object["metadata"].as_object_mut().unwrap().remove("name");
    let error = ResourceMeta::from_dynamic(&object, &config).unwrap_err();
    assert_eq!("required field 'metadata.name' is missing", error.to_string());

    object["metadata"]["name"] = json!(42);
    assert!(matches!(
        ResourceMeta::from_dynamic(&object, &config),
        Err(ConstructionError::InvalidField { .. })
    ));

    object["metadata"]["name"] = json!("");
    assert!(ResourceMeta::from_dynamic(&object, &config).is_err());

    object["metadata"]["name"] = json!("web-1");
    object["metadata"]["namespace"] = json!(["default"]);
    assert!(ResourceMeta::from_dynamic(&object, &config).is_err());

    assert!(ResourceMeta::from_dynamic(&json!({ "metadata": "web-1" }), &config).is_err());
}

#[test]
fn cluster_scoped_object_test() {
    let mut object = dynamic_object();
    object["metadata"].as_object_mut().unwrap().remove("namespace");

    let meta = ResourceMeta::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("", meta.namespace());
}

#[test]
fn age_test() {
    let meta = ResourceMeta::from_dynamic(&dynamic_object(), &CtorConfig::new("prod")).unwrap();

    let now: Timestamp = "2024-05-04T11:00:00Z".parse().unwrap();
    assert_eq!("3d", meta.age_at(&now));

    let now: Timestamp = "2024-05-01T10:05:00Z".parse().unwrap();
    assert_eq!("5m", meta.age_at(&now));
}

#[test]
fn has_changed_test() {
    let config = CtorConfig::new("prod");
    let first = ResourceMeta::from_dynamic(&dynamic_object(), &config).unwrap();
    let second = ResourceMeta::from_dynamic(&dynamic_object(), &config).unwrap();
    assert!(!first.has_changed(&second));

    let mut object = dynamic_object();
    object["metadata"]["labels"]["app"] = json!("bar");
    let relabeled = ResourceMeta::from_dynamic(&object, &config).unwrap();
    assert!(first.has_changed(&relabeled));

    let mut object = dynamic_object();
    object["metadata"]["creationTimestamp"] = json!("2024-06-01T10:00:00Z");
    let recreated = ResourceMeta::from_dynamic(&object, &config).unwrap();
    assert!(first.has_changed(&recreated));

    let mut object = dynamic_object();
    object["metadata"]["labels"]["pod-template-hash"] = json!("def456");
    object["metadata"]["labels"]["controller-revision-hash"] = json!("v2");
    let relabeled_noise = ResourceMeta::from_dynamic(&object, &config).unwrap();
    assert!(!first.has_changed(&relabeled_noise));
    assert_eq!(3, relabeled_noise.labels().len());

    let other_cluster = ResourceMeta::from_dynamic(&dynamic_object(), &CtorConfig::new("dev")).unwrap();
    assert!(first.has_changed(&other_cluster));
}

#[test]
fn exclusions_come_from_config_test() {
    let config = CtorConfig::new("prod").with_excluded_labels(ExcludedLabels::empty());
    let meta = ResourceMeta::from_dynamic(&dynamic_object(), &config).unwrap();

    assert_eq!("app=foo,pod-template-hash=abc123", meta.render_labels());
}

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
