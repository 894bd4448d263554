#[cfg(test)]
#[path = "./utils.tests.rs"]
mod utils_tests;

/// Text used in place of an empty value.
pub const NONE: &str = "None";

/// Returns `value` or [`NONE`] if `value` is empty.
pub fn or_none(value: &str) -> &str {
    if value.is_empty() { NONE } else { value }
}

/// Joins items with the separator or returns [`NONE`] if there is nothing to join.
pub fn join_or_none<T: AsRef<str>>(items: &[T], sep: &str) -> String {
    if items.is_empty() {
        return NONE.to_owned();
    }

    items.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(sep)
}

/// Converts key/value pairs to `key{sep}value` strings, skipping keys for which `is_excluded` returns `true`.\
/// **Note** that the output keeps the order of the input pairs.
pub fn join_pairs<'a, I, F>(pairs: I, sep: &str, is_excluded: F) -> Vec<String>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
    F: Fn(&str) -> bool,
{
    pairs
        .into_iter()
        .filter(|(key, _)| !is_excluded(key))
        .map(|(key, value)| format!("{key}{sep}{value}"))
        .collect()
}

/// Returns sorted and deduplicated list of strings.
pub fn sorted_unique(mut items: Vec<String>) -> Vec<String> {
    items.sort();
    items.dedup();
    items
}
