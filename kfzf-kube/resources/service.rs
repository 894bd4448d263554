use k8s_openapi::api::core::v1::{Service as ServiceObject, ServicePort};
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;
use std::collections::BTreeMap;

use crate::dynamic::{map_items, nested_i32, nested_str, nested_string, nested_string_map, nested_string_vec};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./service.tests.rs"]
mod service_tests;

const DEFAULT_TYPE: &str = "ClusterIP";
const DEFAULT_PROTOCOL: &str = "TCP";

/// Record for the `service` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Service {
    meta: ResourceMeta,
    type_: String,
    cluster_ip: String,
    external_ips: Vec<String>,
    ports: Vec<String>,
    selector: BTreeMap<String, String>,
}

impl Service {
    /// Returns service type, `ClusterIP` if not specified.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// Returns service ports formatted as `port[:nodePort]/protocol`.
    pub fn ports(&self) -> &[String] {
        &self.ports
    }
}

/// Formats service port the way `kubectl` does: `80/TCP` or `80:30080/TCP`.
fn format_port(port: i32, node_port: Option<i32>, protocol: Option<&str>) -> String {
    let protocol = protocol.unwrap_or(DEFAULT_PROTOCOL);
    match node_port {
        Some(node_port) => format!("{port}:{node_port}/{protocol}"),
        None => format!("{port}/{protocol}"),
    }
}

fn typed_port(port: &ServicePort) -> String {
    format_port(port.port, port.node_port, port.protocol.as_deref())
}

fn dynamic_port(port: &Value) -> Result<String, ConstructionError> {
    Ok(format_port(
        nested_i32(port, &["port"])?.unwrap_or_default(),
        nested_i32(port, &["nodePort"])?,
        nested_str(port, &["protocol"])?,
    ))
}

impl KubeResource for Service {
    type Typed = ServiceObject;
    const KIND: ResourceKind = ResourceKind::Service;

    fn from_typed(object: &ServiceObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            type_: spec
                .and_then(|s| s.type_.clone())
                .unwrap_or_else(|| DEFAULT_TYPE.to_owned()),
            cluster_ip: spec.and_then(|s| s.cluster_ip.clone()).unwrap_or_default(),
            external_ips: spec.and_then(|s| s.external_ips.clone()).unwrap_or_default(),
            ports: spec
                .and_then(|s| s.ports.as_ref())
                .map(|ports| ports.iter().map(typed_port).collect())
                .unwrap_or_default(),
            selector: spec.and_then(|s| s.selector.clone()).unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            type_: nested_str(object, &["spec", "type"])?.unwrap_or(DEFAULT_TYPE).to_owned(),
            cluster_ip: nested_string(object, &["spec", "clusterIP"])?,
            external_ips: nested_string_vec(object, &["spec", "externalIPs"])?,
            ports: map_items(object, &["spec", "ports"], dynamic_port)?,
            selector: nested_string_map(object, &["spec", "selector"])?.unwrap_or_default(),
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.type_ != other.type_
            || self.cluster_ip != other.cluster_ip
            || self.external_ips != other.external_ips
            || self.ports != other.ports
            || self.meta.excluded_labels().changed(&self.selector, &other.selector)
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.type_.clone(),
            self.cluster_ip.clone(),
            join_or_none(&self.external_ips, ","),
            join_or_none(&self.ports, ","),
            self.meta.excluded_labels().render(&self.selector),
        ]
    }
}
