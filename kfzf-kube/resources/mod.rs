use k8s_openapi::jiff::Timestamp;
use k8s_openapi::serde::de::DeserializeOwned;
use k8s_openapi::serde_json::{self, Value};
use kfzf_common::{NONE, or_none};
use kube::api::DynamicObject;
use std::borrow::Cow;

use crate::dynamic::nested_str;
use crate::{ConstructionError, CtorConfig, ResourceKind, ResourceMeta};

pub use self::config_map::ConfigMap;
pub use self::cron_job::CronJob;
pub use self::custom_resource::CustomResource;
pub use self::daemon_set::DaemonSet;
pub use self::deployment::Deployment;
pub use self::horizontal_pod_autoscaler::HorizontalPodAutoscaler;
pub use self::ingress::Ingress;
pub use self::job::Job;
pub use self::namespace::Namespace;
pub use self::node::Node;
pub use self::persistent_volume::PersistentVolume;
pub use self::persistent_volume_claim::PersistentVolumeClaim;
pub use self::pod::Pod;
pub use self::replica_set::ReplicaSet;
pub use self::secret::Secret;
pub use self::service::Service;
pub use self::stateful_set::StatefulSet;

mod config_map;
mod cron_job;
mod custom_resource;
mod daemon_set;
mod deployment;
mod horizontal_pod_autoscaler;
mod ingress;
mod job;
mod namespace;
mod node;
mod persistent_volume;
mod persistent_volume_claim;
mod pod;
mod replica_set;
mod secret;
mod service;
mod stateful_set;
mod storage;
mod workload;

#[cfg(test)]
#[path = "./resource.tests.rs"]
mod resource_tests;

/// Capabilities shared by every kubernetes resource record.
pub trait KubeResource: Sized {
    /// Generated type used by the typed construction path.
    type Typed: DeserializeOwned;

    /// Kind of the record.
    const KIND: ResourceKind;

    /// Creates new record from the typed kubernetes object.
    fn from_typed(object: &Self::Typed, config: &CtorConfig) -> Result<Self, ConstructionError>;

    /// Creates new record from the dynamic kubernetes object.
    fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError>;

    /// Returns shared record metadata.
    fn meta(&self) -> &ResourceMeta;

    /// Returns `true` if `other` differs from this record in anything that is displayed or indexed.\
    /// **Note** that age is never taken into account.
    fn has_changed(&self, other: &Self) -> bool;

    /// Returns kind specific columns in display order.
    fn columns(&self) -> Vec<String>;

    /// Returns `true` if the namespace column is rendered.
    fn is_namespaced(&self) -> bool {
        Self::KIND.is_namespaced()
    }

    /// Renders the record as a single line.
    fn render(&self) -> String {
        self.render_at(&Timestamp::now())
    }

    /// Renders the record as a single line with age computed relative to `now`.
    fn render_at(&self, now: &Timestamp) -> String {
        render_line(self.meta(), self.is_namespaced(), &self.columns(), now)
    }
}

/// Builds display line: `cluster [namespace] name columns... age labels`.\
/// **Note** that whitespace inside a column is replaced with `_`, so every column is a single token.
fn render_line(meta: &ResourceMeta, is_namespaced: bool, columns: &[String], now: &Timestamp) -> String {
    let mut line: Vec<Cow<'_, str>> = Vec::with_capacity(columns.len() + 5);
    line.push(Cow::Borrowed(or_none(meta.cluster())));
    if is_namespaced {
        line.push(Cow::Borrowed(or_none(meta.namespace())));
    }

    line.push(Cow::Borrowed(meta.name()));
    line.extend(columns.iter().map(|c| single_token(or_none(c))));
    line.push(Cow::Owned(meta.age_at(now)));
    line.push(Cow::Owned(meta.render_labels()));

    line.join(" ")
}

fn single_token(value: &str) -> Cow<'_, str> {
    if value.contains(char::is_whitespace) {
        let joined = value.split_whitespace().collect::<Vec<_>>().join("_");
        Cow::Owned(if joined.is_empty() { NONE.to_owned() } else { joined })
    } else {
        Cow::Borrowed(value)
    }
}

/// Identity of a resource record: cluster, namespace, kind and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId {
    pub cluster: String,
    pub namespace: String,
    pub kind: String,
    pub name: String,
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}/{}/{}", self.cluster, self.kind, self.name)
        } else {
            write!(f, "{}/{}/{}/{}", self.cluster, self.namespace, self.kind, self.name)
        }
    }
}

macro_rules! define_resources {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Kubernetes resource record of any supported kind.
        #[derive(Debug, Clone)]
        pub enum Resource {
            $($variant($ty),)*
        }

        impl Resource {
            /// Creates new record of the specified `kind` from the dynamic kubernetes object.
            pub fn from_dynamic_as(kind: ResourceKind, object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
                match kind {
                    $(ResourceKind::$variant => <$ty>::from_dynamic(object, config).map(Self::$variant),)*
                }
            }

            /// Creates new record of the specified `kind` from the value that deserializes to its typed object.
            pub fn from_typed_value(kind: ResourceKind, object: Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
                match kind {
                    $(ResourceKind::$variant => {
                        let typed: <$ty as KubeResource>::Typed = serde_json::from_value(object)?;
                        <$ty>::from_typed(&typed, config).map(Self::$variant)
                    },)*
                }
            }

            /// Returns kind of the record.
            pub fn kind(&self) -> ResourceKind {
                match self {
                    $(Self::$variant(_) => <$ty as KubeResource>::KIND,)*
                }
            }

            /// Returns shared record metadata.
            pub fn meta(&self) -> &ResourceMeta {
                match self {
                    $(Self::$variant(r) => r.meta(),)*
                }
            }

            /// Returns `true` if `other` should replace this record in a cache.\
            /// **Note** that records of a different kind are always considered changed.
            pub fn has_changed(&self, other: &Resource) -> bool {
                match (self, other) {
                    $((Self::$variant(current), Self::$variant(other)) => current.has_changed(other),)*
                    _ => true,
                }
            }

            /// Returns kind specific columns in display order.
            pub fn columns(&self) -> Vec<String> {
                match self {
                    $(Self::$variant(r) => r.columns(),)*
                }
            }

            /// Renders the record as a single line.
            pub fn render(&self) -> String {
                self.render_at(&Timestamp::now())
            }

            /// Renders the record as a single line with age computed relative to `now`.
            pub fn render_at(&self, now: &Timestamp) -> String {
                match self {
                    $(Self::$variant(r) => r.render_at(now),)*
                }
            }
        }

        $(
            impl From<$ty> for Resource {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

define_resources! {
    Pod(Pod),
    Deployment(Deployment),
    ReplicaSet(ReplicaSet),
    StatefulSet(StatefulSet),
    DaemonSet(DaemonSet),
    Job(Job),
    CronJob(CronJob),
    Service(Service),
    Ingress(Ingress),
    ConfigMap(ConfigMap),
    Secret(Secret),
    Node(Node),
    Namespace(Namespace),
    PersistentVolume(PersistentVolume),
    PersistentVolumeClaim(PersistentVolumeClaim),
    HorizontalPodAutoscaler(HorizontalPodAutoscaler),
    Custom(CustomResource),
}

impl Resource {
    /// Creates new record from the dynamic kubernetes object, kind is taken from the object itself.
    pub fn from_dynamic(object: &Value, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Self::from_dynamic_as(object_kind(object)?, object, config)
    }

    /// Creates new record from the kube [`DynamicObject`].
    pub fn from_dynamic_object(object: &DynamicObject, config: &CtorConfig) -> Result<Self, ConstructionError> {
        Self::from_dynamic(&serde_json::to_value(object)?, config)
    }

    /// Returns identity of the record.
    pub fn identity(&self) -> ResourceId {
        let meta = self.meta();
        let kind = match self {
            Self::Custom(custom) => custom.type_name(),
            other => other.kind().as_str().to_owned(),
        };

        ResourceId {
            cluster: meta.cluster().to_owned(),
            namespace: meta.namespace().to_owned(),
            kind,
            name: meta.name().to_owned(),
        }
    }
}

/// Returns [`ResourceKind`] declared by the object's `apiVersion` and `kind` fields.
pub fn object_kind(object: &Value) -> Result<ResourceKind, ConstructionError> {
    let api_version = nested_str(object, &["apiVersion"])?.unwrap_or_default();
    let kind = nested_str(object, &["kind"])?.unwrap_or_default();

    Ok(ResourceKind::from_type(api_version, kind))
}
