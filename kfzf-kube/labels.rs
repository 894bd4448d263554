use kfzf_common::{NONE, join_or_none, join_pairs};
use std::collections::{BTreeMap, BTreeSet};

#[cfg(test)]
#[path = "./labels.tests.rs"]
mod labels_tests;

/// Label keys injected by controllers that are hidden from the rendered labels by default.\
/// **Note** that `controler-uid` is spelled the way it always was, add `controller-uid` explicitly to hide it.
pub const DEFAULT_EXCLUDED_LABELS: [&str; 7] = [
    "pod-template-generation",
    "app.kubernetes.io/name",
    "controller-revision-hash",
    "app.kubernetes.io/managed-by",
    "pod-template-hash",
    "statefulset.kubernetes.io/pod-name",
    "controler-uid",
];

/// Set of label keys that are skipped when labels or selectors are rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedLabels {
    keys: BTreeSet<String>,
}

impl Default for ExcludedLabels {
    fn default() -> Self {
        Self::from_keys(DEFAULT_EXCLUDED_LABELS)
    }
}

impl ExcludedLabels {
    /// Creates new [`ExcludedLabels`] instance that does not exclude anything.
    pub fn empty() -> Self {
        Self { keys: BTreeSet::new() }
    }

    /// Creates new [`ExcludedLabels`] instance from the provided keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds more keys to the set.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `key` is excluded.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Returns iterator over excluded keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Returns copy of `labels` without the excluded keys.
    pub fn filter(&self, labels: &BTreeMap<String, String>) -> BTreeMap<String, String> {
        labels
            .iter()
            .filter(|(key, _)| !self.contains(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Returns `true` if `current` and `other` differ in anything but the excluded keys.
    pub fn changed(&self, current: &BTreeMap<String, String>, other: &BTreeMap<String, String>) -> bool {
        current != other && self.filter(current) != self.filter(other)
    }

    /// Renders `labels` as sorted `key=value` pairs joined with commas.\
    /// Returns `None` text if there are no labels or all of them are excluded.
    pub fn render(&self, labels: &BTreeMap<String, String>) -> String {
        if labels.is_empty() {
            return NONE.to_owned();
        }

        let mut pairs = join_pairs(labels, "=", |key| self.contains(key));
        pairs.sort();
        join_or_none(&pairs, ",")
    }
}
