use anyhow::{Context, Result};
use k8s_openapi::serde::Deserialize;
use k8s_openapi::serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;

#[cfg(test)]
#[path = "./input.tests.rs"]
mod input_tests;

const STDIN: &str = "-";
const LIST_SUFFIX: &str = "List";

/// Manifests read from a single file or from the standard input.
pub struct Source {
    pub name: String,
    pub content: String,
}

/// Reads all `files`, the standard input is read if `files` is empty or for every `-` entry.
pub async fn read_sources(files: &[PathBuf]) -> Result<Vec<Source>> {
    if files.is_empty() {
        return Ok(vec![read_stdin().await?]);
    }

    let mut sources = Vec::with_capacity(files.len());
    for file in files {
        if file.as_os_str() == STDIN {
            sources.push(read_stdin().await?);
        } else {
            sources.push(read_file(file).await?);
        }
    }

    Ok(sources)
}

async fn read_stdin() -> Result<Source> {
    let mut content = String::new();
    tokio::io::stdin()
        .read_to_string(&mut content)
        .await
        .context("cannot read standard input")?;

    Ok(Source {
        name: "<stdin>".to_owned(),
        content,
    })
}

async fn read_file(path: &Path) -> Result<Source> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("cannot read file {}", path.display()))?;

    Ok(Source {
        name: path.display().to_string(),
        content,
    })
}

/// Parses all YAML (or JSON) documents in `content` and returns objects with `List` kinds flattened.
pub fn parse_objects(content: &str) -> Result<Vec<Value>, serde_yaml::Error> {
    let mut objects = Vec::new();
    for document in serde_yaml::Deserializer::from_str(content) {
        flatten(Value::deserialize(document)?, &mut objects);
    }

    Ok(objects)
}

/// Pushes `object` to `objects` or, if it is a list, all of its items.\
/// **Note** that items of typed lists like `PodList` get `apiVersion` and `kind` from the list if they lack them.
fn flatten(object: Value, objects: &mut Vec<Value>) {
    match object {
        Value::Null => (),
        Value::Object(mut map) if is_list(&map) => {
            let item_kind = list_item_kind(&map);
            let api_version = map.get("apiVersion").cloned();
            if let Some(Value::Array(items)) = map.remove("items") {
                for mut item in items {
                    if let (Some(kind), Value::Object(item)) = (&item_kind, &mut item)
                        && !item.contains_key("kind")
                    {
                        item.insert("kind".to_owned(), Value::String(kind.clone()));
                        if let Some(api_version) = &api_version {
                            item.entry("apiVersion").or_insert_with(|| api_version.clone());
                        }
                    }

                    flatten(item, objects);
                }
            }
        },
        other => objects.push(other),
    }
}

fn is_list(map: &Map<String, Value>) -> bool {
    map.get("kind")
        .and_then(Value::as_str)
        .is_some_and(|kind| kind.ends_with(LIST_SUFFIX))
        && map.get("items").is_some_and(Value::is_array)
}

/// Returns kind of the items for typed lists, e.g. `Pod` for `PodList`.
fn list_item_kind(map: &Map<String, Value>) -> Option<String> {
    map.get("kind")
        .and_then(Value::as_str)
        .and_then(|kind| kind.strip_suffix(LIST_SUFFIX))
        .filter(|kind| !kind.is_empty())
        .map(String::from)
}
