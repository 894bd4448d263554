use rstest::rstest;

use super::*;

#[test]
fn parse_test() {
    let args = Args::try_parse_from(["kfzf", "--cluster", "prod", "--kind", "deploy", "--typed", "a.yaml", "-"]).unwrap();

    assert_eq!(Some("prod"), args.cluster.as_deref());
    assert_eq!(Some(ResourceKind::Deployment), args.kind);
    assert!(args.typed);
    assert!(!args.verbose);
    assert_eq!(vec![PathBuf::from("a.yaml"), PathBuf::from("-")], args.files);
}

#[rstest]
#[case("po", ResourceKind::Pod)]
#[case("svc", ResourceKind::Service)]
#[case("PersistentVolumeClaim", ResourceKind::PersistentVolumeClaim)]
fn kind_test(#[case] kind: &str, #[case] expected: ResourceKind) {
    let args = Args::try_parse_from(["kfzf", "-k", kind]).unwrap();
    assert_eq!(Some(expected), args.kind);
}

#[test]
fn unknown_kind_test() {
    assert!(Args::try_parse_from(["kfzf", "--kind", "widgets"]).is_err());
}

#[test]
fn config_path_test() {
    let args = Args::try_parse_from(["kfzf", "--config", "/tmp/kfzf.yaml"]).unwrap();
    assert_eq!(PathBuf::from("/tmp/kfzf.yaml"), args.config_path());
}
