use k8s_openapi::jiff;
use k8s_openapi::serde_json;

/// Possible errors when building resource record from a raw kubernetes object.\
/// **Note** that each of them aborts the construction, no partial record is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum ConstructionError {
    /// Required field is absent.
    #[error("required field '{path}' is missing")]
    MissingField { path: String },

    /// Field is present but has unexpected shape.
    #[error("field '{path}' must be {expected}, got: {value}")]
    InvalidField {
        path: String,
        expected: &'static str,
        value: String,
    },

    /// Timestamp is present but it is not in RFC3339 format.
    #[error("field '{path}' is not a valid RFC3339 timestamp: '{value}'")]
    InvalidTimestamp {
        path: String,
        value: String,
        #[source]
        source: jiff::Error,
    },

    /// Object cannot be converted between its typed and dynamic representation.
    #[error("cannot convert kubernetes object")]
    Conversion(#[from] serde_json::Error),
}

impl ConstructionError {
    /// Creates new [`ConstructionError::MissingField`] error for the `path`.
    pub fn missing(path: &[&str]) -> Self {
        Self::MissingField { path: join_path(path) }
    }

    /// Creates new [`ConstructionError::InvalidField`] error for the `path` and the offending `value`.
    pub fn invalid(path: &[&str], expected: &'static str, value: &serde_json::Value) -> Self {
        Self::InvalidField {
            path: join_path(path),
            expected,
            value: value.to_string(),
        }
    }

    /// Prefixes path of the field that caused the error with `prefix`.
    pub fn within(self, prefix: &str) -> Self {
        match self {
            Self::MissingField { path } => Self::MissingField {
                path: format!("{prefix}.{path}"),
            },
            Self::InvalidField { path, expected, value } => Self::InvalidField {
                path: format!("{prefix}.{path}"),
                expected,
                value,
            },
            Self::InvalidTimestamp { path, value, source } => Self::InvalidTimestamp {
                path: format!("{prefix}.{path}"),
                value,
                source,
            },
            Self::Conversion(error) => Self::Conversion(error),
        }
    }

    /// Returns path of the field that caused the error, if known.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::MissingField { path } | Self::InvalidField { path, .. } | Self::InvalidTimestamp { path, .. } => {
                Some(path)
            },
            Self::Conversion(_) => None,
        }
    }
}

/// Joins path segments to the dotted form used in error messages.
pub fn join_path(path: &[&str]) -> String {
    if path.is_empty() {
        "<root>".to_owned()
    } else {
        path.join(".")
    }
}
