use k8s_openapi::api::autoscaling::v2::HorizontalPodAutoscaler as HorizontalPodAutoscalerObject;
use k8s_openapi::serde_json::Value;

use crate::dynamic::{nested_i32, nested_str};
use crate::resources::KubeResource;
use crate::resources::workload::count;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./horizontal_pod_autoscaler.tests.rs"]
mod horizontal_pod_autoscaler_tests;

/// Record for the `horizontalpodautoscaler` kubernetes resource.
#[derive(Debug, Clone)]
pub struct HorizontalPodAutoscaler {
    meta: ResourceMeta,
    reference: String,
    min_replicas: i32,
    max_replicas: i32,
    current_replicas: i32,
    desired_replicas: i32,
}

/// Formats scale target as `Kind/name`.
fn format_reference(kind: &str, name: &str) -> String {
    if kind.is_empty() && name.is_empty() {
        String::new()
    } else {
        format!("{kind}/{name}")
    }
}

impl KubeResource for HorizontalPodAutoscaler {
    type Typed = HorizontalPodAutoscalerObject;
    const KIND: ResourceKind = ResourceKind::HorizontalPodAutoscaler;

    fn from_typed(object: &HorizontalPodAutoscalerObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();
        let target = spec.map(|s| &s.scale_target_ref);

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            reference: format_reference(
                target.map(|t| t.kind.as_str()).unwrap_or_default(),
                target.map(|t| t.name.as_str()).unwrap_or_default(),
            ),
            min_replicas: spec.and_then(|s| s.min_replicas).unwrap_or(1),
            max_replicas: spec.map(|s| s.max_replicas).unwrap_or_default(),
            current_replicas: status.and_then(|s| s.current_replicas).unwrap_or_default(),
            desired_replicas: status.map(|s| s.desired_replicas).unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            reference: format_reference(
                nested_str(object, &["spec", "scaleTargetRef", "kind"])?.unwrap_or_default(),
                nested_str(object, &["spec", "scaleTargetRef", "name"])?.unwrap_or_default(),
            ),
            min_replicas: nested_i32(object, &["spec", "minReplicas"])?.unwrap_or(1),
            max_replicas: count(object, &["spec", "maxReplicas"])?,
            current_replicas: count(object, &["status", "currentReplicas"])?,
            desired_replicas: count(object, &["status", "desiredReplicas"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.reference != other.reference
            || self.min_replicas != other.min_replicas
            || self.max_replicas != other.max_replicas
            || self.current_replicas != other.current_replicas
            || self.desired_replicas != other.desired_replicas
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.reference.clone(),
            self.min_replicas.to_string(),
            self.max_replicas.to_string(),
            self.current_replicas.to_string(),
            self.desired_replicas.to_string(),
        ]
    }
}
