//! Path lookups over schema-less kubernetes objects.
//!
//! Every `nested_*` accessor returns `Ok(None)` when some segment of the path is absent
//! and an error when a value on the path has an unexpected shape.

use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::ConstructionError;
use crate::errors::join_path;

#[cfg(test)]
#[path = "./dynamic.tests.rs"]
mod dynamic_tests;

/// Returns value stored under the `path` or `None` if any segment is absent or `null`.
pub fn nested_field<'a>(object: &'a Value, path: &[&str]) -> Result<Option<&'a Value>, ConstructionError> {
    let mut current = object;
    for (i, segment) in path.iter().enumerate() {
        let Some(map) = current.as_object() else {
            if current.is_null() {
                return Ok(None);
            }

            return Err(ConstructionError::invalid(&path[..i], "an object", current));
        };

        match map.get(*segment) {
            Some(Value::Null) | None => return Ok(None),
            Some(value) => current = value,
        }
    }

    Ok(Some(current))
}

/// Returns string stored under the `path`.
pub fn nested_str<'a>(object: &'a Value, path: &[&str]) -> Result<Option<&'a str>, ConstructionError> {
    match nested_field(object, path)? {
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(other) => Err(ConstructionError::invalid(path, "a string", other)),
        None => Ok(None),
    }
}

/// Returns string stored under the `path` or an empty string if it is absent.
pub fn nested_string(object: &Value, path: &[&str]) -> Result<String, ConstructionError> {
    Ok(nested_str(object, path)?.unwrap_or_default().to_owned())
}

/// Returns string stored under the `path`, the field must be present.
pub fn required_str<'a>(object: &'a Value, path: &[&str]) -> Result<&'a str, ConstructionError> {
    nested_str(object, path)?.ok_or_else(|| ConstructionError::missing(path))
}

/// Returns integer stored under the `path`.
pub fn nested_i64(object: &Value, path: &[&str]) -> Result<Option<i64>, ConstructionError> {
    match nested_field(object, path)? {
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ConstructionError::invalid(path, "an integer", value)),
        None => Ok(None),
    }
}

/// Returns `i32` stored under the `path`.
pub fn nested_i32(object: &Value, path: &[&str]) -> Result<Option<i32>, ConstructionError> {
    match nested_i64(object, path)? {
        Some(value) => i32::try_from(value)
            .map(Some)
            .map_err(|_| ConstructionError::invalid(path, "a 32-bit integer", &Value::from(value))),
        None => Ok(None),
    }
}

/// Returns boolean stored under the `path`.
pub fn nested_bool(object: &Value, path: &[&str]) -> Result<Option<bool>, ConstructionError> {
    match nested_field(object, path)? {
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(other) => Err(ConstructionError::invalid(path, "a boolean", other)),
        None => Ok(None),
    }
}

/// Returns array stored under the `path` or an empty slice if it is absent.
pub fn nested_slice<'a>(object: &'a Value, path: &[&str]) -> Result<&'a [Value], ConstructionError> {
    match nested_field(object, path)? {
        Some(Value::Array(values)) => Ok(values.as_slice()),
        Some(other) => Err(ConstructionError::invalid(path, "an array", other)),
        None => Ok(&[]),
    }
}

/// Maps every item of the array stored under the `path`.\
/// **Note** that errors returned by `f` are reported with the path of the offending item.
pub fn map_items<T, F>(object: &Value, path: &[&str], f: F) -> Result<Vec<T>, ConstructionError>
where
    F: Fn(&Value) -> Result<T, ConstructionError>,
{
    nested_slice(object, path)?
        .iter()
        .enumerate()
        .map(|(i, item)| f(item).map_err(|error| error.within(&format!("{}[{i}]", join_path(path)))))
        .collect()
}

/// Returns object stored under the `path`.
pub fn nested_map<'a>(object: &'a Value, path: &[&str]) -> Result<Option<&'a Map<String, Value>>, ConstructionError> {
    match nested_field(object, path)? {
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(ConstructionError::invalid(path, "an object", other)),
        None => Ok(None),
    }
}

/// Returns list of strings stored under the `path` or an empty list if it is absent.
pub fn nested_string_vec(object: &Value, path: &[&str]) -> Result<Vec<String>, ConstructionError> {
    nested_slice(object, path)?
        .iter()
        .map(|value| {
            value
                .as_str()
                .map(String::from)
                .ok_or_else(|| ConstructionError::invalid(path, "an array of strings", value))
        })
        .collect()
}

/// Returns string to string map stored under the `path`.\
/// **Note** that a single non-string value makes the whole map invalid.
pub fn nested_string_map(object: &Value, path: &[&str]) -> Result<Option<BTreeMap<String, String>>, ConstructionError> {
    let Some(map) = nested_map(object, path)? else {
        return Ok(None);
    };

    let mut result = BTreeMap::new();
    for (key, value) in map {
        let Some(value) = value.as_str() else {
            return Err(ConstructionError::invalid(path, "a map of strings", &Value::Object(map.clone())));
        };

        result.insert(key.clone(), value.to_owned());
    }

    Ok(Some(result))
}

/// Returns timestamp stored under the `path` as RFC3339 string.
pub fn nested_timestamp(object: &Value, path: &[&str]) -> Result<Option<Timestamp>, ConstructionError> {
    let Some(text) = nested_str(object, path)? else {
        return Ok(None);
    };

    text.parse::<Timestamp>()
        .map(Some)
        .map_err(|source| ConstructionError::InvalidTimestamp {
            path: join_path(path),
            value: text.to_owned(),
            source,
        })
}

/// Returns map keys stored under the `path` as a sorted list.
pub fn nested_keys(object: &Value, path: &[&str]) -> Result<Vec<String>, ConstructionError> {
    let mut keys = nested_map(object, path)?
        .map(|map| map.keys().cloned().collect::<Vec<_>>())
        .unwrap_or_default();
    keys.sort();

    Ok(keys)
}

/// Returns `status` of the condition with the specified `type` from the conditions array under the `path`.
pub fn condition_status(object: &Value, path: &[&str], condition_type: &str) -> Result<Option<String>, ConstructionError> {
    let statuses = map_items(object, path, |c| {
        Ok((nested_string(c, &["type"])?, nested_string(c, &["status"])?))
    })?;

    Ok(statuses
        .into_iter()
        .find(|(t, _)| t == condition_type)
        .map(|(_, status)| status))
}
