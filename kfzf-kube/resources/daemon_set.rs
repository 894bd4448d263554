use k8s_openapi::api::apps::v1::DaemonSet as DaemonSetObject;
use k8s_openapi::serde_json::Value;
use std::collections::BTreeMap;

use crate::resources::KubeResource;
use crate::resources::workload::{Replicas, count, dynamic_selector, typed_selector};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./daemon_set.tests.rs"]
mod daemon_set_tests;

/// Record for the `daemonset` kubernetes resource.
#[derive(Debug, Clone)]
pub struct DaemonSet {
    meta: ResourceMeta,
    replicas: Replicas,
    selector: BTreeMap<String, String>,
}

impl KubeResource for DaemonSet {
    type Typed = DaemonSetObject;
    const KIND: ResourceKind = ResourceKind::DaemonSet;

    fn from_typed(object: &DaemonSetObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            replicas: Replicas {
                desired: status.map(|s| s.desired_number_scheduled).unwrap_or_default(),
                current: status.map(|s| s.current_number_scheduled).unwrap_or_default(),
                ready: status.map(|s| s.number_ready).unwrap_or_default(),
                updated: status.and_then(|s| s.updated_number_scheduled).unwrap_or_default(),
                available: status.and_then(|s| s.number_available).unwrap_or_default(),
            },
            selector: typed_selector(object.spec.as_ref().map(|s| &s.selector)),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            replicas: Replicas {
                desired: count(object, &["status", "desiredNumberScheduled"])?,
                current: count(object, &["status", "currentNumberScheduled"])?,
                ready: count(object, &["status", "numberReady"])?,
                updated: count(object, &["status", "updatedNumberScheduled"])?,
                available: count(object, &["status", "numberAvailable"])?,
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
            self.replicas.current.to_string(),
            self.replicas.ready.to_string(),
            self.replicas.updated.to_string(),
            self.replicas.available.to_string(),
            self.meta.excluded_labels().render(&self.selector),
        ]
    }
}
