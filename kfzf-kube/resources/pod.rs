use k8s_openapi::api::core::v1::{ContainerStatus, Pod as PodObject};
use k8s_openapi::serde_json::Value;
use kfzf_common::join_or_none;

use crate::dynamic::{map_items, nested_bool, nested_i64, nested_str, nested_string, required_str};
use crate::resources::KubeResource;
use crate::resources::workload::{is_dynamic_terminating, is_terminating};
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

#[cfg(test)]
#[path = "./pod.tests.rs"]
mod pod_tests;

/// Record for the `pod` kubernetes resource.
#[derive(Debug, Clone)]
pub struct Pod {
    meta: ResourceMeta,
    status: String,
    ready: usize,
    total: usize,
    restarts: i64,
    pod_ip: String,
    host_ip: String,
    node_name: String,
    containers: Vec<String>,
}

/// Per container state taken from `status.containerStatuses`.
struct ContainerSummary {
    ready: bool,
    restarts: i64,
    waiting_reason: Option<String>,
}

impl From<&ContainerStatus> for ContainerSummary {
    fn from(status: &ContainerStatus) -> Self {
        Self {
            ready: status.ready,
            restarts: i64::from(status.restart_count),
            waiting_reason: status
                .state
                .as_ref()
                .and_then(|s| s.waiting.as_ref())
                .and_then(|w| w.reason.clone()),
        }
    }
}

impl Pod {
    fn new(
        meta: ResourceMeta,
        phase: &str,
        terminating: bool,
        states: &[ContainerSummary],
        addresses: (String, String, String),
        containers: Vec<String>,
    ) -> Self {
        let waiting = states.iter().find_map(|s| s.waiting_reason.as_deref());
        let status = if terminating {
            "Terminating"
        } else if let Some(reason) = waiting {
            reason
        } else {
            phase
        };

        let (pod_ip, host_ip, node_name) = addresses;
        Self {
            meta,
            status: status.to_owned(),
            ready: states.iter().filter(|s| s.ready).count(),
            total: states.len(),
            restarts: states.iter().map(|s| s.restarts).sum(),
            pod_ip,
            host_ip,
            node_name,
            containers,
        }
    }

    /// Returns pod status: `Terminating`, the first container waiting reason or the pod phase.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns number of restarts of all containers.
    pub fn restarts(&self) -> i64 {
        self.restarts
    }

    /// Returns name of the node the pod is scheduled on.
    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    /// Returns names of the pod containers.
    pub fn containers(&self) -> &[String] {
        &self.containers
    }
}

impl KubeResource for Pod {
    type Typed = PodObject;
    const KIND: ResourceKind = ResourceKind::Pod;

    fn from_typed(object: &PodObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let meta = ResourceMeta::from_object_meta(&object.metadata, config)?;
        let spec = object.spec.as_ref();
        let status = object.status.as_ref();
        let states = status
            .and_then(|s| s.container_statuses.as_deref())
            .unwrap_or_default()
            .iter()
            .map(ContainerSummary::from)
            .collect::<Vec<_>>();
        let addresses = (
            status.and_then(|s| s.pod_ip.clone()).unwrap_or_default(),
            status.and_then(|s| s.host_ip.clone()).unwrap_or_default(),
            spec.and_then(|s| s.node_name.clone()).unwrap_or_default(),
        );
        let containers = spec
            .map(|s| s.containers.iter().map(|c| c.name.clone()).collect())
            .unwrap_or_default();

        Ok(Self::new(
            meta,
            status.and_then(|s| s.phase.as_deref()).unwrap_or_default(),
            is_terminating(&object.metadata),
            &states,
            addresses,
            containers,
        ))
    }

    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let meta = ResourceMeta::from_dynamic(object, config)?;
        let states = map_items(object, &["status", "containerStatuses"], |c| {
            Ok(ContainerSummary {
                ready: nested_bool(c, &["ready"])?.unwrap_or_default(),
                restarts: nested_i64(c, &["restartCount"])?.unwrap_or_default(),
                waiting_reason: nested_str(c, &["state", "waiting", "reason"])?.map(String::from),
            })
        })?;
        let addresses = (
            nested_string(object, &["status", "podIP"])?,
            nested_string(object, &["status", "hostIP"])?,
            nested_string(object, &["spec", "nodeName"])?,
        );
        let containers = map_items(object, &["spec", "containers"], |c| {
            required_str(c, &["name"]).map(String::from)
        })?;

        Ok(Self::new(
            meta,
            nested_str(object, &["status", "phase"])?.unwrap_or_default(),
            is_dynamic_terminating(object)?,
            &states,
            addresses,
            containers,
        ))
    }

    fn meta(&self) -> &ResourceMeta {
        &self.meta
    }

    fn has_changed(&self, other: &Self) -> bool {
        self.meta.has_changed(&other.meta)
            || self.status != other.status
            || self.ready != other.ready
            || self.total != other.total
            || self.restarts != other.restarts
            || self.pod_ip != other.pod_ip
            || self.host_ip != other.host_ip
            || self.node_name != other.node_name
            || self.containers != other.containers
    }

    fn columns(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            format!("{}/{}", self.ready, self.total),
            self.restarts.to_string(),
            self.pod_ip.clone(),
            self.host_ip.clone(),
            self.node_name.clone(),
            join_or_none(&self.containers, ","),
        ]
    }
}
