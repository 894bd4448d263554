use k8s_openapi::api::apps::v1::Deployment as DeploymentObject;
use k8s_openapi::serde_json::Value;
use std::collections::BTreeMap;

use crate::dynamic::nested_i32;
use crate::resources::KubeResource;
use crate::resources::workload::{Replicas, count, dynamic_selector, typed_selector};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./deployment.tests.rs"]
mod deployment_tests;

/// Replicas used when `spec.replicas` is not set.
const DEFAULT_REPLICAS: i32 = 1;

/// Record for the `deployment` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Deployment {
    meta: ResourceMeta,
    replicas: Replicas,
    selector: BTreeMap<String, String>,
}

impl Deployment {
    /// Returns replica counters.
    pub fn replicas(&self) -> &Replicas {
        &self.replicas
    }

    /// Returns pods selector.
    pub fn selector(&self) -> &BTreeMap<String, String> {
        &self.selector
    }
}

impl KubeResource for Deployment {
    type Typed = DeploymentObject;
    const KIND: ResourceKind = ResourceKind::Deployment;

    fn from_typed(object: &DeploymentObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            replicas: Replicas {
                desired: spec.and_then(|s| s.replicas).unwrap_or(DEFAULT_REPLICAS),
                ready: status.and_then(|s| s.ready_replicas).unwrap_or_default(),
                updated: status.and_then(|s| s.updated_replicas).unwrap_or_default(),
                available: status.and_then(|s| s.available_replicas).unwrap_or_default(),
                ..Default::default()
            },
            selector: typed_selector(spec.map(|s| &s.selector)),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            replicas: Replicas {
                desired: nested_i32(object, &["spec", "replicas"])?.unwrap_or(DEFAULT_REPLICAS),
                ready: count(object, &["status", "readyReplicas"])?,
                updated: count(object, &["status", "updatedReplicas"])?,
                available: count(object, &["status", "availableReplicas"])?,
                ..Default::default()
            },
            selector: dynamic_selector(object)?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.replicas != other.replicas
            || self.meta.excluded_labels().changed(&self.selector, &other.selector)
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.replicas.desired.to_string(),
            self.replicas.ready.to_string(),
            self.replicas.updated.to_string(),
            self.replicas.available.to_string(),
            self.meta.excluded_labels().render(&self.selector),
        ]
    }
}
