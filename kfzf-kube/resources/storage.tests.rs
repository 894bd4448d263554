use rstest::rstest;

use super::*;

#[rstest]
#[case("ReadWriteOnce", "RWO")]
#[case("ReadOnlyMany", "ROX")]
#[case("ReadWriteMany", "RWX")]
#[case("ReadWriteOncePod", "RWOP")]
#[case("SomethingNew", "SomethingNew")]
fn access_mode_test(#[case] mode: &str, #[case] expected: &str) {
    assert_eq!(expected, access_mode(mode));
}

#[test]
fn access_modes_test() {
    let modes = vec!["ReadWriteMany".to_owned(), "ReadOnlyMany".to_owned()];

    assert_eq!(vec!["RWX", "ROX"], access_modes(&modes));
    assert!(access_modes(&[]).is_empty());
}

#[test]
fn typed_capacity_test() {
    let capacity = BTreeMap::from([
        ("cpu".to_owned(), Quantity("2".to_owned())),
        ("storage".to_owned(), Quantity("5Gi".to_owned())),
    ]);

    assert_eq!("5Gi", typed_capacity(Some(&capacity)));
    assert_eq!("", typed_capacity(Some(&BTreeMap::new())));
    assert_eq!("", typed_capacity(None));
}
