use k8s_openapi::api::core::v1::{Node as NodeObject, Taint};
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;
use std::collections::BTreeMap;

use crate::dynamic::{condition_status, map_items, nested_bool, nested_str, nested_string, required_str};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./node.tests.rs"]
mod node_tests;

const ROLE_LABEL_PREFIX: &str = "node-role.kubernetes.io/";
const INTERNAL_IP: &str = "InternalIP";

/// Record for the `node` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Node {
    meta: ResourceMeta,
    status: String,
    roles: Vec<String>,
    internal_ip: String,
    kubelet_version: String,
    taints: Vec<String>,
}

impl Node {
    fn new(
        meta: ResourceMeta,
        ready: Option<&str>,
        unschedulable: bool,
        internal_ip: String,
        kubelet_version: String,
        taints: Vec<String>,
    ) -> Self {
        let mut status = if ready == Some("True") { "Ready" } else { "NotReady" }.to_owned();
        if unschedulable {
            status.push_str(",SchedulingDisabled");
        }

        Self {
            roles: roles(meta.labels()),
            meta,
            status,
            internal_ip,
            kubelet_version,
            taints,
        }
    }

    /// Returns node status, e.g. `Ready` or `NotReady,SchedulingDisabled`.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns node roles taken from the `node-role.kubernetes.io/*` labels.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }
}

/// Returns sorted node roles.\
/// **Note** that raw labels are used here, role labels are never excluded.
fn roles(labels: &BTreeMap<String, String>) -> Vec<String> {
    labels
        .keys()
        .filter_map(|key| key.strip_prefix(ROLE_LABEL_PREFIX))
        .filter(|role| !role.is_empty())
        .map(String::from)
        .collect()
}

fn format_taint(key: &str, value: Option<&str>, effect: &str) -> String {
    match value {
        Some(value) if !value.is_empty() => format!("{key}={value}:{effect}"),
        _ => format!("{key}:{effect}"),
    }
}

fn typed_taint(taint: &Taint) -> String {
    format_taint(&taint.key, taint.value.as_deref(), &taint.effect)
}

fn dynamic_taint(taint: &Value) -> Result<String, ConstructionError> {
    Ok(format_taint(
        required_str(taint, &["key"])?,
        nested_str(taint, &["value"])?,
        nested_str(taint, &["effect"])?.unwrap_or_default(),
    ))
}

impl KubeResource for Node {
    type Typed = NodeObject;
    const KIND: ResourceKind = ResourceKind::Node;

    fn from_typed(object: &NodeObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();
        let ready = status
            .and_then(|s| s.conditions.as_ref())
            .and_then(|c| c.iter().find(|c| c.type_ == "Ready"))
            .map(|c| c.status.as_str());
        let internal_ip = status
            .and_then(|s| s.addresses.as_ref())
            .and_then(|a| a.iter().find(|a| a.type_ == INTERNAL_IP))
            .map(|a| a.address.clone())
            .unwrap_or_default();
        let taints = spec
            .and_then(|s| s.taints.as_ref())
            .map(|t| t.iter().map(typed_taint).collect())
            .unwrap_or_default();

        Ok(Self::new(
            ResourceMeta::from_object_meta(&object.metadata, config)?,
            ready,
            spec.and_then(|s| s.unschedulable).unwrap_or_default(),
            internal_ip,
            status
                .and_then(|s| s.node_info.as_ref())
                .map(|i| i.kubelet_version.clone())
                .unwrap_or_default(),
            taints,
        ))
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let ready = condition_status(object, &["status", "conditions"], "Ready")?;
        let addresses = map_items(object, &["status", "addresses"], |a| {
            Ok((nested_string(a, &["type"])?, nested_string(a, &["address"])?))
        })?;
        let internal_ip = addresses
            .into_iter()
            .find(|(t, _)| t == INTERNAL_IP)
            .map(|(_, address)| address)
            .unwrap_or_default();

        Ok(Self::new(
            ResourceMeta::from_dynamic(object, config)?,
            ready.as_deref(),
            nested_bool(object, &["spec", "unschedulable"])?.unwrap_or_default(),
            internal_ip,
            nested_string(object, &["status", "nodeInfo", "kubeletVersion"])?,
            map_items(object, &["spec", "taints"], dynamic_taint)?,
        ))
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.status != other.status
            || self.roles != other.roles
            || self.internal_ip != other.internal_ip
            || self.kubelet_version != other.kubelet_version
            || self.taints != other.taints
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            join_or_none(&self.roles, ","),
            self.internal_ip.clone(),
            self.kubelet_version.clone(),
            join_or_none(&self.taints, ","),
        ]
    }
}
