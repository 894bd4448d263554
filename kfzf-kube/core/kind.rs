use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(test)]
#[path = "./kind.tests.rs"]
mod kind_tests;

/// Error returned when a kind name does not match any supported resource kind.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("unknown resource kind: '{0}'")]
pub struct UnknownKindError(pub String);

macro_rules! define_resource_kinds {
    (
        $(#[$enum_attr:meta])*
        $vis:vis enum $enum_name:ident {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident => $kind:literal, $plural:literal, $group:literal, $namespaced:literal @ $($alias:literal),*
            );* $(;)?
        }
    ) => {
        $(#[$enum_attr])*
        $vis enum $enum_name {
            $(
                $(#[$variant_attr])*
                $variant,
            )*
            /// Any kind without a dedicated record, e.g. custom resources.
            Custom,
        }

        impl $enum_name {
            /// All kinds that have a dedicated record.
            pub const BUILTIN: &'static [$enum_name] = &[$(Self::$variant),*];

            /// Returns kind name as it appears in the `kind` field of an object.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $kind,)*
                    Self::Custom => "CustomResource",
                }
            }

            /// Returns lowercase plural name of the kind.
            pub const fn plural(&self) -> &'static str {
                match self {
                    $(Self::$variant => $plural,)*
                    Self::Custom => "customresources",
                }
            }

            /// Returns API group of the kind, empty for the core group.
            pub const fn group(&self) -> &'static str {
                match self {
                    $(Self::$variant => $group,)*
                    Self::Custom => "",
                }
            }

            /// Returns `true` if resources of this kind live in a namespace.
            pub const fn is_namespaced(&self) -> bool {
                match self {
                    $(Self::$variant => $namespaced,)*
                    Self::Custom => true,
                }
            }

            /// Returns short names of the kind.
            pub const fn aliases(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($alias),*],)*
                    Self::Custom => &[],
                }
            }
        }
    };
}

define_resource_kinds! {
    /// Kubernetes resource kinds that are normalized to a dedicated record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum ResourceKind {
        Pod => "Pod", "pods", "", true @ "po";
        Deployment => "Deployment", "deployments", "apps", true @ "deploy";
        ReplicaSet => "ReplicaSet", "replicasets", "apps", true @ "rs";
        StatefulSet => "StatefulSet", "statefulsets", "apps", true @ "sts";
        DaemonSet => "DaemonSet", "daemonsets", "apps", true @ "ds";
        Job => "Job", "jobs", "batch", true @ ;
        CronJob => "CronJob", "cronjobs", "batch", true @ "cj";
        Service => "Service", "services", "", true @ "svc";
        Ingress => "Ingress", "ingresses", "networking.k8s.io", true @ "ing";
        ConfigMap => "ConfigMap", "configmaps", "", true @ "cm";
        Secret => "Secret", "secrets", "", true @ ;
        Node => "Node", "nodes", "", false @ "no";
        Namespace => "Namespace", "namespaces", "", false @ "ns";
        PersistentVolume => "PersistentVolume", "persistentvolumes", "", false @ "pv";
        PersistentVolumeClaim => "PersistentVolumeClaim", "persistentvolumeclaims", "", true @ "pvc";
        HorizontalPodAutoscaler => "HorizontalPodAutoscaler", "horizontalpodautoscalers", "autoscaling", true @ "hpa";
    }
}

impl ResourceKind {
    /// Returns kind for the `kind` and `api_version` found in an object.\
    /// **Note** that anything not in [`ResourceKind::BUILTIN`] is [`ResourceKind::Custom`].
    pub fn from_type(api_version: &str, kind: &str) -> Self {
        let (group, _) = split_api_version(api_version);
        Self::BUILTIN
            .iter()
            .find(|k| k.as_str() == kind && k.group() == group)
            .copied()
            .unwrap_or(Self::Custom)
    }

    /// Returns kind for the user provided name: kind, singular, plural or short name, case insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::BUILTIN
            .iter()
            .find(|k| {
                k.as_str().eq_ignore_ascii_case(name)
                    || k.plural().eq_ignore_ascii_case(name)
                    || k.aliases().iter().any(|a| a.eq_ignore_ascii_case(name))
            })
            .copied()
    }

    /// Returns `true` if kind has a dedicated record.
    pub fn is_builtin(&self) -> bool {
        *self != Self::Custom
    }
}

impl Display for ResourceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownKindError(s.to_owned()))
    }
}

/// Splits `api_version` to group and version, group is empty for the core API.
pub fn split_api_version(api_version: &str) -> (&str, &str) {
    match api_version.split_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    }
}
