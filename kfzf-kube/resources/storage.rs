use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;

#[cfg(test)]
#[path = "./storage.tests.rs"]
mod storage_tests;

const STORAGE: &str = "storage";

/// Returns `storage` entry of the capacity map.
pub fn typed_capacity(capacity: Option<&BTreeMap<String, Quantity>>) -> String {
    capacity
        .and_then(|c| c.get(STORAGE))
        .map(|q| q.0.clone())
        .unwrap_or_default()
}

/// Returns abbreviated access mode, e.g. `RWO` for `ReadWriteOnce`.
pub fn access_mode(mode: &str) -> String {
    match mode {
        "ReadWriteOnce" => "RWO",
        "ReadOnlyMany" => "ROX",
        "ReadWriteMany" => "RWX",
        "ReadWriteOncePod" => "RWOP",
        other => other,
    }
    .to_owned()
}

/// Returns abbreviated access modes.
pub fn access_modes(modes: &[String]) -> Vec<String> {
    modes.iter().map(|m| access_mode(m)).collect()
}
