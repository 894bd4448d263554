use k8s_openapi::serde_json::Value;
use kube::api::DynamicObject;

use crate::core::split_api_version;
use crate::dynamic::{condition_status, nested_string};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

const CONDITIONS_PATH: &[&str] = &["status", "conditions"];
const READY: &str = "Ready";

/// Record for any kubernetes resource without a dedicated kind, e.g. CRD instances.
#[derive(Debug, Clone)]
pub struct CustomResource {
    meta: ResourceMeta,
    api_version: String,
    kind: String,
    ready: String,
}

impl CustomResource {
    /// Returns `apiVersion` of the object.
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Returns `kind` of the object.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns kind qualified with the API group, e.g. `Certificate.cert-manager.io`.
    pub fn type_name(&self) -> String {
        let (group, _) = split_api_version(&self.api_version);
        if group.is_empty() {
            self.kind.clone()
        } else {
            format!("{}.{}", self.kind, group)
        }
    }
}

impl KubeResource for CustomResource {
    type Typed = DynamicObject;
    const KIND: ResourceKind = ResourceKind::Custom;

    fn from_typed(object: &DynamicObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let types = object.types.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            api_version: types.map(|t| t.api_version.clone()).unwrap_or_default(),
            kind: types.map(|t| t.kind.clone()).unwrap_or_default(),
            ready: condition_status(&object.data, CONDITIONS_PATH, READY)?.unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            api_version: nested_string(object, &["apiVersion"])?,
            kind: nested_string(object, &["kind"])?,
            ready: condition_status(object, CONDITIONS_PATH, READY)?.unwrap_or_default(),
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.api_version != other.api_version
            || self.kind != other.kind
            || self.ready != other.ready
    }

    fn columns(&self) -> Vec<String> {
        vec![self.api_version.clone(), self.kind.clone(), self.ready.clone()]
    }

    fn is_namespaced(&self) -> bool {
        !self.meta.namespace().is_empty()
    }
}
