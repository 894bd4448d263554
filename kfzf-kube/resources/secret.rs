use k8s_openapi::api::core::v1::Secret as SecretObject;
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;

use crate::dynamic::{nested_keys, nested_string};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./secret.tests.rs"]
mod secret_tests;

/// Record for the `secret` kubernetes resource.\
/// **Note** that secret values are never read, only names of the data keys.
#[derive(Debug, Clone)]
pub struct Secret {
    meta: ResourceMeta,
    type_: String,
    keys: Vec<String>,
}

impl KubeResource for Secret {
    type Typed = SecretObject;
    const KIND: ResourceKind = ResourceKind::Secret;

    fn from_typed(object: &SecretObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            type_: object.type_.clone().unwrap_or_default(),
            keys: object
                .data
                .as_ref()
                .map(|d| d.keys().cloned().collect())
                .unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            type_: nested_string(object, &["type"])?,
            keys: nested_keys(object, &["data"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta) || self.type_ != other.type_ || self.keys != other.keys
    }

    fn columns(&self) -> Vec<String> {
        vec![self.type_.clone(), join_or_none(&self.keys, ",")]
    }
}
