use k8s_openapi::api::networking::v1::Ingress as IngressObject;
use k8s_openapi::serde_json::Value;
use kfzf_common::{join_or_none, sorted_unique};

use crate::dynamic::{map_items, nested_str, nested_string};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./ingress.tests.rs"]
mod ingress_tests;

/// Record for the `ingress` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Ingress {
    meta: ResourceMeta,
    class: String,
    hosts: Vec<String>,
    addresses: Vec<String>,
    tls_secrets: Vec<String>,
}

impl KubeResource for Ingress {
    type Typed = IngressObject;
    const KIND: ResourceKind = ResourceKind::Ingress;

    fn from_typed(object: &IngressObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let hosts = spec
            .and_then(|s| s.rules.as_ref())
            .map(|rules| rules.iter().filter_map(|r| r.host.clone()).collect())
            .unwrap_or_default();
        let addresses = object
            .status
            .as_ref()
            .and_then(|s| s.load_balancer.as_ref())
            .and_then(|lb| lb.ingress.as_ref())
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i.ip.clone().or_else(|| i.hostname.clone()))
                    .collect()
            })
            .unwrap_or_default();
        let tls_secrets = spec
            .and_then(|s| s.tls.as_ref())
            .map(|tls| tls.iter().filter_map(|t| t.secret_name.clone()).collect())
            .unwrap_or_default();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            class: spec.and_then(|s| s.ingress_class_name.clone()).unwrap_or_default(),
            hosts: sorted_unique(hosts),
            addresses,
            tls_secrets,
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let hosts = map_items(object, &["spec", "rules"], |r| Ok(nested_str(r, &["host"])?.map(String::from)))?;
        let addresses = map_items(object, &["status", "loadBalancer", "ingress"], |i| {
            Ok(nested_str(i, &["ip"])?.or(nested_str(i, &["hostname"])?).map(String::from))
        })?;
        let tls_secrets = map_items(object, &["spec", "tls"], |t| {
            Ok(nested_str(t, &["secretName"])?.map(String::from))
        })?;

        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            class: nested_string(object, &["spec", "ingressClassName"])?,
            hosts: sorted_unique(hosts.into_iter().flatten().collect()),
            addresses: addresses.into_iter().flatten().collect(),
            tls_secrets: tls_secrets.into_iter().flatten().collect(),
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.class != other.class
            || self.hosts != other.hosts
            || self.addresses != other.addresses
            || self.tls_secrets != other.tls_secrets
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.class.clone(),
            join_or_none(&self.hosts, ","),
            join_or_none(&self.addresses, ","),
            join_or_none(&self.tls_secrets, ","),
        ]
    }
}
