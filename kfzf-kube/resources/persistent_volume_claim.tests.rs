use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

use super::*;

fn persistent_volume_claim_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "PersistentVolumeClaim",
        "metadata": {
            "name": "data-db-0",
            "namespace": "shop",
            "labels": { "app": "db" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "spec": {
            "accessModes": ["ReadWriteOncePod"],
            "storageClassName": "standard",
            "volumeName": "pv-1"
        },
        "status": { "phase": "Bound", "capacity": { "storage": "10Gi" } }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let claim = PersistentVolumeClaim::from_dynamic(&persistent_volume_claim_json(), &CtorConfig::new("prod")).unwrap();

    assert_eq!("prod shop data-db-0 Bound pv-1 10Gi RWOP standard 3d app=db", claim.render_at(&now()));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<PersistentVolumeClaimObject>(persistent_volume_claim_json()).unwrap();

    let from_typed = PersistentVolumeClaim::from_typed(&typed, &config).unwrap();
    let from_dynamic = PersistentVolumeClaim::from_dynamic(&persistent_volume_claim_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn pending_claim_render_test() {
    let mut object = persistent_volume_claim_json();
    object["spec"].as_object_mut().unwrap().remove("volumeName");
    object["status"] = json!({ "phase": "Pending" });

    let claim = PersistentVolumeClaim::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop data-db-0 Pending None None RWOP standard 3d app=db", claim.render_at(&now()));
}

#[test]
fn status_change_test() {
    let config = CtorConfig::new("prod");
    let current = PersistentVolumeClaim::from_dynamic(&persistent_volume_claim_json(), &config).unwrap();

    let mut object = persistent_volume_claim_json();
    object["status"]["capacity"]["storage"] = json!("20Gi");
    assert!(current.has_changed(&PersistentVolumeClaim::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn wrong_typed_access_modes_test() {
    let mut object = persistent_volume_claim_json();
    object["spec"]["accessModes"] = json!(["ReadWriteOnce", 1]);

    let error = PersistentVolumeClaim::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("spec.accessModes"), error.path());
}
