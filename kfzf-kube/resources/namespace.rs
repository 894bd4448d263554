use k8s_openapi::api::core::v1::Namespace as NamespaceObject;
use k8s_openapi::serde_json::Value;

use crate::dynamic::nested_string;
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

/// Record for the `namespace` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Namespace {
    meta: ResourceMeta,
    phase: String,
}

impl KubeResource for Namespace {
    type Typed = NamespaceObject;
    const KIND: ResourceKind = ResourceKind::Namespace;

    fn from_typed(object: &NamespaceObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            phase: object
                .status
                .as_ref()
                .and_then(|s| s.phase.clone())
                .unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            phase: nested_string(object, &["status", "phase"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta) || self.phase != other.phase
    }

    fn columns(&self) -> Vec<String> {
        vec![self.phase.clone()]
    }
}
