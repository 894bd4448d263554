use k8s_openapi::api::core::v1::PersistentVolumeClaim as PersistentVolumeClaimObject;
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;

use crate::dynamic::{nested_string, nested_string_vec};
use crate::resources::KubeResource;
use crate::resources::storage::{access_modes, typed_capacity};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./persistent_volume_claim.tests.rs"]
mod persistent_volume_claim_tests;

/// Record for the `persistentvolumeclaim` kubernetes resource.
#[derive(Debug, Clone)]
pub struct PersistentVolumeClaim {
    meta: ResourceMeta,
    status: String,
    volume: String,
    capacity: String,
    access_modes: Vec<String>,
    storage_class: String,
}

impl KubeResource for PersistentVolumeClaim {
    type Typed = PersistentVolumeClaimObject;
    const KIND: ResourceKind = ResourceKind::PersistentVolumeClaim;

    fn from_typed(object: &PersistentVolumeClaimObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            status: status.and_then(|s| s.phase.clone()).unwrap_or_default(),
            volume: spec.and_then(|s| s.volume_name.clone()).unwrap_or_default(),
            capacity: typed_capacity(status.and_then(|s| s.capacity.as_ref())),
            access_modes: access_modes(spec.and_then(|s| s.access_modes.as_deref()).unwrap_or_default()),
            storage_class: spec.and_then(|s| s.storage_class_name.clone()).unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            status: nested_string(object, &["status", "phase"])?,
            volume: nested_string(object, &["spec", "volumeName"])?,
            capacity: nested_string(object, &["status", "capacity", "storage"])?,
            access_modes: access_modes(&nested_string_vec(object, &["spec", "accessModes"])?),
            storage_class: nested_string(object, &["spec", "storageClassName"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.status != other.status
            || self.volume != other.volume
            || self.capacity != other.capacity
            || self.access_modes != other.access_modes
            || self.storage_class != other.storage_class
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            self.volume.clone(),
            self.capacity.clone(),
            join_or_none(&self.access_modes, ","),
            self.storage_class.clone(),
        ]
    }
}
