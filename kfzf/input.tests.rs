use k8s_openapi::serde_json::json;

use super::*;

#[test]
fn parse_yaml_documents_test() {
    let content = r#"
apiVersion: v1
kind: Namespace
metadata:
  name: shop
---
apiVersion: v1
kind: ConfigMap
metadata:
  name: settings
  namespace: shop
data:
  mode: fast
---
"#;

    let objects = parse_objects(content).unwrap();
    assert_eq!(2, objects.len());
    assert_eq!(json!("Namespace"), objects[0]["kind"]);
    assert_eq!(json!("fast"), objects[1]["data"]["mode"]);
}

#[test]
fn parse_json_test() {
    let content = r#"{ "apiVersion": "v1", "kind": "Service", "metadata": { "name": "web" }, "spec": { "ports": [{ "port": 80 }] } }"#;

    let objects = parse_objects(content).unwrap();
    assert_eq!(1, objects.len());
    assert_eq!(json!(80), objects[0]["spec"]["ports"][0]["port"]);
}

#[test]
fn flatten_list_test() {
    let content = json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": [
            { "apiVersion": "v1", "kind": "Pod", "metadata": { "name": "a" } },
            { "apiVersion": "apps/v1", "kind": "Deployment", "metadata": { "name": "b" } }
        ]
    })
    .to_string();

    let objects = parse_objects(&content).unwrap();
    assert_eq!(2, objects.len());
    assert_eq!(json!("Deployment"), objects[1]["kind"]);
}

#[test]
fn flatten_typed_list_test() {
    let content = json!({
        "apiVersion": "apps/v1",
        "kind": "DeploymentList",
        "items": [
            { "metadata": { "name": "a" } },
            { "apiVersion": "apps/v1", "kind": "Deployment", "metadata": { "name": "b" } }
        ]
    })
    .to_string();

    let objects = parse_objects(&content).unwrap();
    assert_eq!(2, objects.len());
    assert_eq!(json!("Deployment"), objects[0]["kind"]);
    assert_eq!(json!("apps/v1"), objects[0]["apiVersion"]);
}

#[test]
fn parse_malformed_test() {
    assert!(parse_objects("kind: [unterminated").is_err());
}

#[tokio::test]
async fn read_file_test() {
    let path = std::env::temp_dir().join(format!("kfzf-input-{}.yaml", std::process::id()));
    std::fs::write(&path, "kind: Namespace\n").unwrap();

    let sources = read_sources(std::slice::from_ref(&path)).await.unwrap();
    assert_eq!(1, sources.len());
    assert_eq!(path.display().to_string(), sources[0].name);
    assert_eq!("kind: Namespace\n", sources[0].content);

    std::fs::remove_file(&path).unwrap();
    assert!(read_sources(&[path]).await.is_err());
}
