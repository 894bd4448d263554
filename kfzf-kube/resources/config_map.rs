use k8s_openapi::api::core::v1::ConfigMap as ConfigMapObject;
use k8s_openapi::serde_json::Value;
use kfzf_common::{join_or_none, sorted_unique};

use crate::dynamic::nested_keys;
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

/// Record for the `configmap` kubernetes resource.
#[derive(Debug, Clone)]
pub struct ConfigMap {
    meta: ResourceMeta,
    keys: Vec<String>,
}

impl KubeResource for ConfigMap {
    type Typed = ConfigMapObject;
    const KIND: ResourceKind = ResourceKind::ConfigMap;

    fn from_typed(object: &ConfigMapObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let mut keys = object
            .data
            .as_ref()
            .map(|d| d.keys().cloned().collect::<Vec<_>>())
            .unwrap_or_default();
        if let Some(binary) = &object.binary_data {
            keys.extend(binary.keys().cloned());
        }

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            keys: sorted_unique(keys),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let mut keys = nested_keys(object, &["data"])?;
        keys.extend(nested_keys(object, &["binaryData"])?);

        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            keys: sorted_unique(keys),
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta) || self.keys != other.keys
    }

    fn columns(&self) -> Vec<String> {
        vec![join_or_none(&self.keys, ",")]
    }
}
