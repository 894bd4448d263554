use kfzf_kube::DEFAULT_EXCLUDED_LABELS;
use rstest::rstest;

use super::*;

fn temp_config(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("kfzf-{}-{name}.yaml", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn deserialize_test() {
    let config = serde_yaml::from_str::<Config>(
        "cluster: prod\nexcluded_labels: [team]\nextra_excluded_labels: [controller-uid]\n",
    )
    .unwrap();

    assert_eq!(Some("prod".to_owned()), config.cluster);
    assert_eq!(Some(vec!["team".to_owned()]), config.excluded_labels);
    assert_eq!(vec!["controller-uid".to_owned()], config.extra_excluded_labels);
}

#[test]
fn deserialize_empty_test() {
    assert_eq!(Config::default(), serde_yaml::from_str::<Config>("{}").unwrap());
}

#[test]
fn deserialize_partial_test() {
    let config = serde_yaml::from_str::<Config>("extra_excluded_labels: [controller-uid]\n").unwrap();

    assert_eq!(None, config.cluster);
    assert_eq!(None, config.excluded_labels);
    assert_eq!(vec!["controller-uid".to_owned()], config.extra_excluded_labels);
}

#[test]
fn default_excluded_labels_test() {
    let excluded = Config::default().excluded_labels();

    assert_eq!(DEFAULT_EXCLUDED_LABELS.len(), excluded.keys().count());
    assert!(excluded.contains("controler-uid"));
    assert!(!excluded.contains("controller-uid"));
}

#[rstest]
#[case(None, vec!["controller-uid"], vec!["pod-template-hash", "controler-uid", "controller-uid"], vec!["app"])]
#[case(Some(vec!["team"]), vec![], vec!["team"], vec!["pod-template-hash"])]
#[case(Some(vec![]), vec!["team"], vec!["team"], vec!["controler-uid"])]
fn excluded_labels_test(
    #[case] replaced: Option<Vec<&str>>,
    #[case] extra: Vec<&str>,
    #[case] hidden: Vec<&str>,
    #[case] visible: Vec<&str>,
) {
    let config = Config {
        cluster: None,
        excluded_labels: replaced.map(|keys| keys.into_iter().map(String::from).collect()),
        extra_excluded_labels: extra.into_iter().map(String::from).collect(),
    };

    let excluded = config.excluded_labels();
    assert!(hidden.iter().all(|key| excluded.contains(key)));
    assert!(visible.iter().all(|key| !excluded.contains(key)));
}

#[rstest]
#[case(Some("prod"), None, "prod")]
#[case(None, Some("staging"), "staging")]
#[case(Some("prod"), Some("staging"), "staging")]
#[case(None, None, "")]
fn ctor_config_test(#[case] from_file: Option<&str>, #[case] from_cli: Option<&str>, #[case] expected: &str) {
    let config = Config {
        cluster: from_file.map(String::from),
        ..Default::default()
    };

    assert_eq!(expected, config.ctor_config(from_cli).cluster());
}

#[tokio::test]
async fn load_test() {
    let path = temp_config("load", "cluster: prod\nextra_excluded_labels: [team]\n");

    let config = Config::load(&path).await.unwrap();
    assert_eq!(Some("prod".to_owned()), config.cluster);
    assert_eq!(Some("prod".to_owned()), Config::load_or_default(&path).await.cluster);

    std::fs::remove_file(path).unwrap();
}

#[tokio::test]
async fn load_or_default_test() {
    let missing = std::env::temp_dir().join("kfzf-missing-config-file.yaml");
    assert!(matches!(Config::load(&missing).await, Err(ConfigError::IoError(_))));
    assert_eq!(Config::default(), Config::load_or_default(&missing).await);

    let malformed = temp_config("malformed", "cluster: [unterminated\n");
    assert!(matches!(Config::load(&malformed).await, Err(ConfigError::SerializationError(_))));
    assert_eq!(Config::default(), Config::load_or_default(&malformed).await);

    std::fs::remove_file(malformed).unwrap();
}
