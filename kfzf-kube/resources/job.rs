use k8s_openapi::api::batch::v1::Job as JobObject;
use k8s_openapi::serde_json::Value;

use crate::dynamic::nested_i32;
use crate::resources::KubeResource;
use crate::resources::workload::count;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./job.tests.rs"]
mod job_tests;

/// Record for the `job` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Job {
    meta: ResourceMeta,
    completions: i32,
    succeeded: i32,
    active: i32,
    failed: i32,
}

impl KubeResource for Job {
    type Typed = JobObject;
    const KIND: ResourceKind = ResourceKind::Job;

    fn from_typed(object: &JobObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            completions: object.spec.as_ref().and_then(|s| s.completions).unwrap_or(1),
            succeeded: status.and_then(|s| s.succeeded).unwrap_or_default(),
            active: status.and_then(|s| s.active).unwrap_or_default(),
            failed: status.and_then(|s| s.failed).unwrap_or_default(),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            completions: nested_i32(object, &["spec", "completions"])?.unwrap_or(1),
            succeeded: count(object, &["status", "succeeded"])?,
            active: count(object, &["status", "active"])?,
            failed: count(object, &["status", "failed"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.completions != other.completions
            || self.succeeded != other.succeeded
            || self.active != other.active
            || self.failed != other.failed
    }

    fn columns(&self) -> Vec<String> {
        vec![
            format!("{}/{}", self.succeeded, self.completions),
            self.active.to_string(),
            self.failed.to_string(),
        ]
    }
}
