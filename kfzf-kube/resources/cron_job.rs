use k8s_openapi::api::batch::v1::CronJob as CronJobObject;
use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::Value;

use crate::dynamic::{nested_bool, nested_slice, nested_string, nested_timestamp};
use crate::resources::KubeResource;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./cron_job.tests.rs"]
mod cron_job_tests;

/// Record for the `cronjob` kubernetes resource.
#[derive(Debug, Clone)]
pub struct CronJob {
    meta: ResourceMeta,
    schedule: String,
    suspend: bool,
    active: usize,
    last_schedule: Option<Timestamp>,
}

impl CronJob {
    /// Returns cron schedule of the job.
    pub fn schedule(&self) -> &str {
        &self.schedule
    }
}

impl KubeResource for CronJob {
    type Typed = CronJobObject;
    const KIND: ResourceKind = ResourceKind::CronJob;

    fn from_typed(object: &CronJobObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();

        Ok(Self {
            meta: ResourceMeta::from_object_meta(&object.metadata, config)?,
            schedule: spec.map(|s| s.schedule.clone()).unwrap_or_default(),
            suspend: spec.and_then(|s| s.suspend).unwrap_or_default(),
            active: status.and_then(|s| s.active.as_ref()).map(Vec::len).unwrap_or_default(),
            last_schedule: status.and_then(|s| s.last_schedule_time.as_ref()).map(|t| t.0),
        })
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Ok(Self {
            meta: ResourceMeta::from_dynamic(object, config)?,
            schedule: nested_string(object, &["spec", "schedule"])?,
            suspend: nested_bool(object, &["spec", "suspend"])?.unwrap_or_default(),
            active: nested_slice(object, &["status", "active"])?.len(),
            last_schedule: nested_timestamp(object, &["status", "lastScheduleTime"])?,
        })
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.schedule != other.schedule
            || self.suspend != other.suspend
            || self.active != other.active
            || self.last_schedule != other.last_schedule
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.schedule.clone(),
            self.suspend.to_string(),
            self.active.to_string(),
            self.last_schedule.map(|t| t.to_string()).unwrap_or_default(),
        ]
    }
}
