use k8s_openapi::api::core::v1::PersistentVolume as PersistentVolumeObject;
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;

use crate::dynamic::{nested_str, nested_string, nested_string_vec};
use crate::resources::KubeResource;
use crate::resources::storage::{access_modes, typed_capacity};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./persistent_volume.tests.rs"]
mod persistent_volume_tests;

/// Record for the `persistentvolume` kubernetes resource.
#[derive(Debug, Clone)]
pub struct PersistentVolume {
    meta: ResourceMeta,
    capacity: String,
    access_modes: Vec<String>,
    reclaim_policy: String,
    status: String,
    claim: String,
    storage_class: String,
}

/// Formats claim reference as `namespace/name`.
fn format_claim(namespace: Option<&str>, name: Option<&str>) -> String {
    match (namespace, name) {
        (Some(namespace), Some(name)) => format!("{namespace}/{name}"),
        (None, Some(name)) => name.to_owned(),
        _ => String::new(),
    }
}

impl KubeResource for PersistentVolume {
    type Typed = PersistentVolumeObject;
    const KIND: ResourceKind = ResourceKind::PersistentVolume;

    fn from_typed(object: &PersistentVolumeObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let claim = spec.and_then(|s| s.claim_ref.as_ref());

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            capacity: typed_capacity(spec.and_then(|s| s.capacity.as_ref())),
            access_modes: access_modes(spec.and_then(|s| s.access_modes.as_deref()).unwrap_or_default()),
            reclaim_policy: spec
                .and_then(|s| s.persistent_volume_reclaim_policy.clone())
                .unwrap_or_default(),
            status: object
                .status
                .as_ref()
                .and_then(|s| s.phase.clone())
                .unwrap_or_default(),
            claim: format_claim(
                claim.and_then(|c| c.namespace.as_deref()),
                claim.and_then(|c| c.name.as_deref()),
            ),
            storage_class: spec.and_then(|s| s.storage_class_name.clone()).unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            capacity: nested_string(object, &["spec", "capacity", "storage"])?,
            access_modes: access_modes(&nested_string_vec(object, &["spec", "accessModes"])?),
            reclaim_policy: nested_string(object, &["spec", "persistentVolumeReclaimPolicy"])?,
            status: nested_string(object, &["status", "phase"])?,
            claim: format_claim(
                nested_str(object, &["spec", "claimRef", "namespace"])?,
                nested_str(object, &["spec", "claimRef", "name"])?,
            ),
            storage_class: nested_string(object, &["spec", "storageClassName"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.capacity != other.capacity
            || self.access_modes != other.access_modes
            || self.reclaim_policy != other.reclaim_policy
            || self.status != other.status
            || self.claim != other.claim
            || self.storage_class != other.storage_class
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.capacity.clone(),
            join_or_none(&self.access_modes, ","),
            self.reclaim_policy.clone(),
            self.status.clone(),
            self.claim.clone(),
            self.storage_class.clone(),
        ]
    }
}
