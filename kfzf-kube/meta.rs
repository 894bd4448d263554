use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::dynamic::{nested_str, nested_string_map, nested_timestamp, required_str};
use crate::utils::format_optional_age;
use crate::{ConstructionError, CtorConfig, ExcludedLabels};

#[cfg(test)]
#[path = "./meta.tests.rs"]
mod meta_tests;

const NAME_PATH: &[&str] = &["metadata", "name"];
const NAMESPACE_PATH: &[&str] = &["metadata", "namespace"];
const LABELS_PATH: &[&str] = &["metadata", "labels"];
const CREATION_TIMESTAMP_PATH: &[&str] = &["metadata", "creationTimestamp"];

/// Identity and envelope shared by every kubernetes resource record.
#[derive(Debug, Clone)]
pub struct ResourceMeta {
    name: String,
    namespace: String,
    cluster: String,
    labels: BTreeMap<String, String>,
    creation_time: Option<Timestamp>,
    excluded_labels: Arc<ExcludedLabels>,
}

impl ResourceMeta {
    /// Creates new [`ResourceMeta`] instance from the typed kubernetes object metadata.
    pub fn from_object_meta(meta: &ObjectMeta, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let name = meta.name.as_deref().ok_or_else(|| ConstructionError::missing(NAME_PATH))?;

        Self::populate(
            name,
            meta.namespace.as_deref().unwrap_or_default(),
            meta.labels.clone().unwrap_or_default(),
            meta.creation_timestamp.as_ref().map(|t| t.0),
            config,
        )
    }

    /// Creates new [`ResourceMeta`] instance from the dynamic kubernetes object.\
    /// **Note** that missing labels are not an error, labels that are not a string map are.
    pub fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        let name = required_str(object, NAME_PATH)?;
        let namespace = nested_str(object, NAMESPACE_PATH)?.unwrap_or_default();
        let labels = match nested_string_map(object, LABELS_PATH)? {
            Some(labels) => labels,
            None => {
                debug!("metadata.labels was not found in '{}' ({})", name, namespace);
                BTreeMap::new()
            },
        };
        let creation_time = nested_timestamp(object, CREATION_TIMESTAMP_PATH)?;

        Self::populate(name, namespace, labels, creation_time, config)
    }

    fn populate(
        name: &str,
        namespace: &str,
        labels: BTreeMap<String, String>,
        creation_time: Option<Timestamp>,
        config: &CtorConfig,
    ) -> Result<Self, ConstructionError> {
        if name.is_empty() {
            return Err(ConstructionError::invalid(NAME_PATH, "a non-empty string", &Value::from(name)));
        }

        if creation_time.is_none() {
            debug!("metadata.creationTimestamp was not found in '{}' ({})", name, namespace);
        }

        Ok(Self {
            name: name.to_owned(),
            namespace: namespace.to_owned(),
            cluster: config.cluster().to_owned(),
            labels,
            creation_time,
            excluded_labels: Arc::clone(config.excluded_labels()),
        })
    }

    /// Returns resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns resource namespace, empty for cluster-scoped resources.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns name of the cluster the resource comes from.
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Returns all resource labels, including the excluded ones.
    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Returns resource creation time.
    pub fn creation_time(&self) -> Option<&Timestamp> {
        self.creation_time.as_ref()
    }

    /// Returns label keys hidden when the resource is rendered.
    pub fn excluded_labels(&self) -> &ExcludedLabels {
        &self.excluded_labels
    }

    /// Returns resource age.
    pub fn age(&self) -> String {
        self.age_at(&Timestamp::now())
    }

    /// Returns resource age relative to `now`.
    pub fn age_at(&self, now: &Timestamp) -> String {
        format_optional_age(self.creation_time.as_ref(), now)
    }

    /// Returns labels as sorted `key=value` list without the excluded keys.
    pub fn render_labels(&self) -> String {
        self.excluded_labels.render(&self.labels)
    }

    /// Returns `true` if identity, creation time or labels that are not excluded differ.\
    /// **Note** that it never depends on the current time.
    pub fn has_changed(&self, other: &ResourceMeta) -> bool {
        self.name != other.name
            || self.namespace != other.namespace
            || self.cluster != other.cluster
            || self.creation_time != other.creation_time
            || self.excluded_labels.changed(&self.labels, &other.labels)
    }
}
