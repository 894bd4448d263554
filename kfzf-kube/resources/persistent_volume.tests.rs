use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};
use rstest::rstest;

use super::*;

fn persistent_volume_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "PersistentVolume",
        "metadata": {
            "name": "pv-1",
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "capacity": { "storage": "10Gi" },
            "accessModes": ["ReadWriteOnce", "ReadOnlyMany"],
            "persistentVolumeReclaimPolicy": "Retain",
            "claimRef": { "kind": "PersistentVolumeClaim", "namespace": "shop", "name": "data-db-0" },
            "storageClassName": "standard"
        },
        "status": { "phase": "Bound" }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let volume = PersistentVolume::from_dynamic(&persistent_volume_json(), &CtorConfig::new("prod")).unwrap();

    assert!(!volume.is_namespaced());
    assert_eq!(
        "prod pv-1 10Gi RWO,ROX Retain Bound shop/data-db-0 standard 3d None",
        volume.render_at(&now())
    );
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<PersistentVolumeObject>(persistent_volume_json()).unwrap();

    let from_typed = PersistentVolume::from_typed(&typed, &config).unwrap();
    let from_dynamic = PersistentVolume::from_dynamic(&persistent_volume_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[rstest]
#[case(Some("shop"), Some("data-db-0"), "shop/data-db-0")]
#[case(None, Some("data-db-0"), "data-db-0")]
#[case(Some("shop"), None, "")]
#[case(None, None, "")]
fn format_claim_test(#[case] namespace: Option<&str>, #[case] name: Option<&str>, #[case] expected: &str) {
    assert_eq!(expected, format_claim(namespace, name));
}

#[test]
fn available_volume_render_test() {
    let mut object = persistent_volume_json();
    object["spec"].as_object_mut().unwrap().remove("claimRef");
    object["status"]["phase"] = json!("Available");

    let volume = PersistentVolume::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!(
        "prod pv-1 10Gi RWO,ROX Retain Available None standard 3d None",
        volume.render_at(&now())
    );
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = PersistentVolume::from_dynamic(&persistent_volume_json(), &config).unwrap();

    let mut object = persistent_volume_json();
    object["status"]["phase"] = json!("Released");
    assert!(current.has_changed(&PersistentVolume::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn wrong_typed_capacity_test() {
    let mut object = persistent_volume_json();
    object["spec"]["capacity"]["storage"] = json!(10);

    let error = PersistentVolume::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.capacity.storage"), error.path());
}
