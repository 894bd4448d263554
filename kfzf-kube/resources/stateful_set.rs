use k8s_openapi::api::apps::v1::StatefulSet as StatefulSetObject;
use k8s_openapi::serde_json::Value;
use std::collections::BTreeMap;

use crate::dynamic::nested_i32;
use crate::resources::KubeResource;
use crate::resources::workload::{Replicas, count, dynamic_selector, typed_selector};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./stateful_set.tests.rs"]
mod stateful_set_tests;

/// Record for the `statefulset` kubernetes resource.
#[derive(Debug, Clone)]
pub struct StatefulSet {
    meta: ResourceMeta,
    replicas: Replicas,
    selector: BTreeMap<String, String>,
}

impl KubeResource for StatefulSet {
    type Typed = StatefulSetObject;
    const KIND: ResourceKind = ResourceKind::StatefulSet;

    fn from_typed(object: &StatefulSetObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            replicas: Replicas {
                desired: spec.and_then(|s| s.replicas).unwrap_or(1),
                ready: status.and_then(|s| s.ready_replicas).unwrap_or_default(),
                ..Default::default()
            },
            selector: typed_selector(spec.map(|s| &s.selector)),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            replicas: Replicas {
                desired: nested_i32(object, &["spec", "replicas"])?.unwrap_or(1),
                ready: count(object, &["status", "readyReplicas"])?,
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
            self.meta.excluded_labels().render(&self.selector),
        ]
    }
}
