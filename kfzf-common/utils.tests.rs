use rstest::rstest;
use std::collections::BTreeMap;

use super::*;

#[rstest]
#[case("None", "")]
#[case("web", "web")]
#[case(" ", " ")]
fn or_none_test(#[case] expected: &str, #[case] value: &str) {
    assert_eq!(expected, or_none(value));
}

#[test]
fn join_or_none_test() {
    let empty: [&str; 0] = [];
    assert_eq!("None", join_or_none(&empty, ","));
    assert_eq!("a", join_or_none(&["a"], ","));
    assert_eq!("a,b,c", join_or_none(&["a", "b", "c"], ","));
    assert_eq!("a b", join_or_none(&["a".to_owned(), "b".to_owned()], " "));
}

#[test]
fn join_pairs_test() {
    let map = BTreeMap::from([
        ("app".to_owned(), "web".to_owned()),
        ("tier".to_owned(), "front".to_owned()),
        ("hash".to_owned(), "123".to_owned()),
    ]);

    assert_eq!(
        vec!["app=web", "hash=123", "tier=front"],
        join_pairs(&map, "=", |_| false)
    );
    assert_eq!(vec!["app=web", "tier=front"], join_pairs(&map, "=", |k| k == "hash"));
    assert!(join_pairs(&map, ":", |_| true).is_empty());
}

#[test]
fn sorted_unique_test() {
    let items = vec!["b".to_owned(), "a".to_owned(), "b".to_owned()];
    assert_eq!(vec!["a", "b"], sorted_unique(items));
}
