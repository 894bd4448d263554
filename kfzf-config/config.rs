use kfzf_kube::{CtorConfig, ExcludedLabels};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::ConfigError;

#[cfg(test)]
#[path = "./config.tests.rs"]
mod config_tests;

pub const APP_NAME: &str = "kfzf";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Cluster name injected into every record, `--cluster` takes precedence.
    #[serde(default)]
    pub cluster: Option<String>,

    /// Label keys hidden from rendered lines, replaces the default set when present.
    #[serde(default)]
    pub excluded_labels: Option<Vec<String>>,

    /// Label keys hidden in addition to `excluded_labels`.
    #[serde(default)]
    pub extra_excluded_labels: Vec<String>,
}

impl Config {
    /// Returns the default configuration path: `HOME/.kfzf/config.yaml`.
    pub fn default_path() -> PathBuf {
        match std::env::home_dir() {
            Some(path) => path.join(format!(".{APP_NAME}")).join("config.yaml"),
            None => PathBuf::from("config.yaml"),
        }
    }

    /// Loads the configuration from the `path`.
    pub async fn load(path: &Path) -> Result<Config, ConfigError> {
        let mut file = File::open(path).await?;

        let mut config_str = String::new();
        file.read_to_string(&mut config_str).await?;

        Ok(serde_yaml::from_str::<Config>(&config_str)?)
    }

    /// Loads the configuration from the `path` or returns a default one if it cannot be loaded.\
    /// **Note** that a missing file is not an error, the default configuration is simply used.
    pub async fn load_or_default(path: &Path) -> Config {
        match Self::load(path).await {
            Ok(configuration) => configuration,
            Err(ConfigError::IoError(error)) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!("Config file {} not found, using defaults", path.display());
                Config::default()
            },
            Err(error) => {
                tracing::error!("Cannot load config {}: {}", path.display(), error);
                Config::default()
            },
        }
    }

    /// Returns label keys that should be hidden from rendered lines.
    pub fn excluded_labels(&self) -> ExcludedLabels {
        let excluded = match &self.excluded_labels {
            Some(keys) => ExcludedLabels::from_keys(keys.iter().map(String::as_str)),
            None => ExcludedLabels::default(),
        };

        excluded.with_keys(self.extra_excluded_labels.iter().map(String::as_str))
    }

    /// Builds [`CtorConfig`] for the resource records.\
    /// **Note** that `cluster` overrides the cluster name from the configuration file.
    pub fn ctor_config(&self, cluster: Option<&str>) -> CtorConfig {
        let cluster = cluster.or(self.cluster.as_deref()).unwrap_or_default();
        CtorConfig::new(cluster).with_excluded_labels(self.excluded_labels())
    }
}
