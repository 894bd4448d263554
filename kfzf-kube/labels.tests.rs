use rstest::rstest;

use super::*;

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect()
}

#[rstest]
#[case("None", &[])]
#[case("app=foo", &[("app", "foo"), ("pod-template-hash", "abc123")])]
#[case("app=web,tier=front", &[("tier", "front"), ("app", "web")])]
#[case("None", &[("pod-template-hash", "abc123"), ("controller-revision-hash", "5d8")])]
#[case("controller-uid=1", &[("controller-uid", "1"), ("controler-uid", "2")])]
#[case("a.b=y,a=x", &[("a", "x"), ("a.b", "y")])]
fn render_test(#[case] expected: &str, #[case] pairs: &[(&str, &str)]) {
    assert_eq!(expected, ExcludedLabels::default().render(&labels(pairs)));
}

#[test]
fn render_is_order_independent_test() {
    let excluded = ExcludedLabels::default();
    let forward = [("app", "web"), ("env", "prod"), ("zone", "a"), ("pod-template-hash", "1")];
    let mut reversed = forward;
    reversed.reverse();

    let first = excluded.render(&labels(&forward));
    assert_eq!(first, excluded.render(&labels(&reversed)));
    assert_eq!(first, excluded.render(&labels(&forward)));
    assert_eq!("app=web,env=prod,zone=a", first);
}

#[test]
fn custom_exclusions_test() {
    let map = labels(&[("app", "web"), ("controller-uid", "1"), ("pod-template-hash", "2")]);

    assert_eq!(
        "app=web",
        ExcludedLabels::default().with_keys(["controller-uid"]).render(&map)
    );
    assert_eq!(
        "app=web,controller-uid=1,pod-template-hash=2",
        ExcludedLabels::empty().render(&map)
    );
    assert_eq!(
        "controller-uid=1,pod-template-hash=2",
        ExcludedLabels::from_keys(["app"]).render(&map)
    );
}

#[test]
fn filter_test() {
    let map = labels(&[("app", "web"), ("pod-template-hash", "2")]);
    let filtered = ExcludedLabels::default().filter(&map);

    assert_eq!(labels(&[("app", "web")]), filtered);
    assert!(ExcludedLabels::default().contains("controler-uid"));
    assert!(!ExcludedLabels::default().contains("controller-uid"));
    assert_eq!(7, ExcludedLabels::default().keys().count());
}

#[rstest]
#[case(false, &[("app", "web")], &[("app", "web")])]
#[case(false, &[("app", "web"), ("controller-revision-hash", "v1")], &[("app", "web"), ("controller-revision-hash", "v2")])]
#[case(false, &[("app", "web")], &[("app", "web"), ("pod-template-generation", "3")])]
#[case(true, &[("app", "web")], &[("app", "api")])]
#[case(true, &[("app", "web")], &[("app", "web"), ("tier", "front")])]
fn changed_test(#[case] expected: bool, #[case] current: &[(&str, &str)], #[case] other: &[(&str, &str)]) {
    assert_eq!(expected, ExcludedLabels::default().changed(&labels(current), &labels(other)));
}
