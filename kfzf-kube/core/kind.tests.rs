use rstest::rstest;

use super::*;

#[rstest]
#[case(ResourceKind::Pod, "pod")]
#[case(ResourceKind::Pod, "pods")]
#[case(ResourceKind::Pod, "po")]
#[case(ResourceKind::Pod, "Pod")]
#[case(ResourceKind::Deployment, "deploy")]
#[case(ResourceKind::Service, "SVC")]
#[case(ResourceKind::PersistentVolumeClaim, "pvc")]
#[case(ResourceKind::HorizontalPodAutoscaler, "horizontalpodautoscalers")]
#[case(ResourceKind::Namespace, " ns ")]
fn from_name_test(#[case] expected: ResourceKind, #[case] name: &str) {
    assert_eq!(Some(expected), ResourceKind::from_name(name));
    assert_eq!(Ok(expected), name.parse::<ResourceKind>());
}

#[test]
fn from_name_unknown_test() {
    assert_eq!(None, ResourceKind::from_name("widgets"));
    assert_eq!(
        Err(UnknownKindError("widgets".to_owned())),
        "widgets".parse::<ResourceKind>()
    );
}

#[rstest]
#[case(ResourceKind::Pod, "v1", "Pod")]
#[case(ResourceKind::Deployment, "apps/v1", "Deployment")]
#[case(ResourceKind::HorizontalPodAutoscaler, "autoscaling/v1", "HorizontalPodAutoscaler")]
#[case(ResourceKind::HorizontalPodAutoscaler, "autoscaling/v2", "HorizontalPodAutoscaler")]
#[case(ResourceKind::Ingress, "networking.k8s.io/v1", "Ingress")]
#[case(ResourceKind::Custom, "example.com/v1", "Deployment")]
#[case(ResourceKind::Custom, "cert-manager.io/v1", "Certificate")]
#[case(ResourceKind::Custom, "v1", "Widget")]
fn from_type_test(#[case] expected: ResourceKind, #[case] api_version: &str, #[case] kind: &str) {
    assert_eq!(expected, ResourceKind::from_type(api_version, kind));
}

#[test]
fn kind_properties_test() {
    assert!(ResourceKind::Pod.is_namespaced());
    assert!(!ResourceKind::Node.is_namespaced());
    assert!(!ResourceKind::PersistentVolume.is_namespaced());
    assert_eq!("apps", ResourceKind::StatefulSet.group());
    assert_eq!("StatefulSet", ResourceKind::StatefulSet.to_string());
    assert!(!ResourceKind::Custom.is_builtin());
    assert!(ResourceKind::BUILTIN.iter().all(ResourceKind::is_builtin));
    assert_eq!(("apps", "v1"), split_api_version("apps/v1"));
    assert_eq!(("", "v1"), split_api_version("v1"));
}
