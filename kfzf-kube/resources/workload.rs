use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use k8s_openapi::serde_json::Value;
use std::collections::BTreeMap;

use crate::dynamic::{nested_field, nested_i32, nested_string_map};
use crate::ConstructionError;

/// Replica counters shared by the workload kinds.\
/// **Note** that every kind fills only the counters it renders, the rest stay `0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Replicas {
    pub desired: i32,
    pub current: i32,
    pub ready: i32,
    pub updated: i32,
    pub available: i32,
}

/// Returns `matchLabels` of the typed label selector.
pub fn typed_selector(selector: Option<&LabelSelector>) -> BTreeMap<String, String> {
    selector.and_then(|s| s.match_labels.clone()).unwrap_or_default()
}

/// Returns `spec.selector.matchLabels` of the dynamic workload object.
pub fn dynamic_selector(object: &Value) -> Result<BTreeMap<String, String>, ConstructionError> {
    Ok(nested_string_map(object, &["spec", "selector", "matchLabels"])?.unwrap_or_default())
}

/// Returns integer under the `path` or `0` if it is absent.
pub fn count(object: &Value, path: &[&str]) -> Result<i32, ConstructionError> {
    Ok(nested_i32(object, path)?.unwrap_or_default())
}

/// Returns `true` if the typed object is being deleted.
pub fn is_terminating(meta: &ObjectMeta) -> bool {
    meta.deletion_timestamp.is_some()
}

/// Returns `true` if the dynamic object is being deleted.
pub fn is_dynamic_terminating(object: &Value) -> Result<bool, ConstructionError> {
    Ok(nested_field(object, &["metadata", "deletionTimestamp"])?.is_some())
}
