use rstest::rstest;

use super::*;

#[rstest]
#[case("0m", -30)]
#[case("0m", 0)]
#[case("0m", 59)]
#[case("5m", 5 * 60 + 10)]
#[case("119m", 2 * 3_600 - 1)]
#[case("2h", 2 * 3_600)]
#[case("47h", 2 * 86_400 - 1)]
#[case("2d", 2 * 86_400)]
#[case("3d", 3 * 86_400 + 7 * 3_600)]
fn format_elapsed_seconds_test(#[case] expected: &str, #[case] seconds: i64) {
    assert_eq!(expected, format_elapsed_seconds(seconds));
}

#[test]
fn format_age_test() {
    let created: Timestamp = "2024-05-01T10:00:00Z".parse().unwrap();
    let now: Timestamp = "2024-05-01T10:05:30Z".parse().unwrap();

    assert_eq!("5m", format_age(&created, &now));
    assert_eq!("5m", format_optional_age(Some(&created), &now));
    assert_eq!("n/a", format_optional_age(None, &now));
}
