use std::sync::Arc;

use crate::ExcludedLabels;

/// Context merged into every resource record during its construction.\
/// **Note** that it is immutable, use the `with_*` methods to build a modified copy.
#[derive(Debug, Clone, Default)]
pub struct CtorConfig {
    cluster: String,
    excluded_labels: Arc<ExcludedLabels>,
}

impl CtorConfig {
    /// Creates new [`CtorConfig`] instance for the `cluster` with default label exclusions.
    pub fn new(cluster: impl Into<String>) -> Self {
        Self {
            cluster: cluster.into(),
            excluded_labels: Arc::new(ExcludedLabels::default()),
        }
    }

    /// Sets the label keys that are hidden when records are rendered.
    pub fn with_excluded_labels(mut self, excluded_labels: ExcludedLabels) -> Self {
        self.excluded_labels = Arc::new(excluded_labels);
        self
    }

    /// Returns cluster name.
    pub fn cluster(&self) -> &str {
        &self.cluster
    }

    /// Returns label keys hidden when records are rendered.
    pub fn excluded_labels(&self) -> &Arc<ExcludedLabels> {
        &self.excluded_labels
    }
}
