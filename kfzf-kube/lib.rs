pub use self::config::CtorConfig;
pub use self::core::{ResourceKind, UnknownKindError, split_api_version};
pub use self::errors::ConstructionError;
pub use self::labels::{DEFAULT_EXCLUDED_LABELS, ExcludedLabels};
pub use self::meta::ResourceMeta;
pub use self::resources::{
    ConfigMap, CronJob, CustomResource, DaemonSet, Deployment, HorizontalPodAutoscaler, Ingress, Job, KubeResource,
    Namespace, Node, PersistentVolume, PersistentVolumeClaim, Pod, ReplicaSet, Resource, ResourceId, Secret, Service,
    StatefulSet, object_kind,
};
pub use self::tracker::{Observation, ResourceTracker};

pub mod dynamic;
pub mod utils;

mod config;
mod core;
mod errors;
mod labels;
mod meta;
mod resources;
mod tracker;
