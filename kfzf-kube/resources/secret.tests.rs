use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{from_value, json};

use super::*;

fn secret_json() -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": {
            "name": "db-creds",
            "namespace": "shop",
            "labels": { "app": "db" },
            "creationTimestamp": "2024-04-28T10:00:00Z"
        },
        "type": "Opaque",
        "data": { "username": "YWRtaW4=", "password": "c2VjcmV0" }
    })
}

fn now() -> Timestamp {
    "2024-05-01T10:00:00Z".parse().unwrap()
}

#[test]
fn render_test() {
    let secret = Secret::from_dynamic(&secret_json(), &CtorConfig::new("prod")).unwrap();
    let line = secret.render_at(&now());

    assert_eq!("prod shop db-creds Opaque password,username 3d app=db", line);
    assert!(!line.contains("c2VjcmV0"));
}

#[test]
fn typed_and_dynamic_paths_are_equivalent_test() {
    let config = CtorConfig::new("prod");
    let typed = from_value::<SecretObject>(secret_json()).unwrap();

    let from_typed = Secret::from_typed(&typed, &config).unwrap();
    let from_dynamic = Secret::from_dynamic(&secret_json(), &config).unwrap();

    assert!(!from_typed.has_changed(&from_dynamic));
    assert_eq!(from_typed.render_at(&now()), from_dynamic.render_at(&now()));
}

#[test]
fn no_data_render_test() {
    let mut object = secret_json();
    object.as_object_mut().unwrap().remove("data");

    let secret = Secret::from_dynamic(&object, &CtorConfig::new("prod")).unwrap();
    assert_eq!("prod shop db-creds Opaque None 3d app=db", secret.render_at(&now()));
}

#[test]
fn data_change_test() {
    let config = CtorConfig::new("prod");
    let current = Secret::from_dynamic(&secret_json(), &config).unwrap();

    let mut object = secret_json();
    object["data"]["password"] = json!("cm90YXRlZA==");
    assert!(!current.has_changed(&Secret::from_dynamic(&object, &config).unwrap()));

    let mut object = secret_json();
    object["data"]["token"] = json!("dG9rZW4=");
    assert!(current.has_changed(&Secret::from_dynamic(&object, &config).unwrap()));
}

#[test]
fn wrong_typed_data_test() {
    let mut object = secret_json();
    object["data"] = json!(["username"]);

    let error = Secret::from_dynamic(&object, &CtorConfig::new("prod")).unwrap_err();
    assert!(matches!(error, ConstructionError::InvalidField { .. }));
    assert_eq!(Some("data"), error.path());
}
