use clap::Parser;
use kfzf_kube::ResourceKind;
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cli.tests.rs"]
mod cli_tests;

/// kfzf normalizes kubernetes objects to single-line records for fuzzy completion.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Cluster name injected into every record (overrides the configuration file).
    #[arg(long, env = "KFZF_CLUSTER")]
    pub cluster: Option<String>,

    /// Path to the configuration file (defaults to $HOME/.kfzf/config.yaml).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Kind of all the objects (e.g. pods, deploy, svc), taken from each object if not set.
    #[arg(long, short)]
    pub kind: Option<ResourceKind>,

    /// Build records from the generated typed objects instead of the raw ones.
    #[arg(long)]
    pub typed: bool,

    /// Log benign omissions in the input objects.
    #[arg(long, short)]
    pub verbose: bool,

    /// JSON or YAML files with kubernetes objects, `-` or nothing reads the standard input.
    #[arg()]
    pub files: Vec<PathBuf>,
}

impl Args {
    /// Returns configuration file path or the default one if it is not set.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(kfzf_config::Config::default_path)
    }
}
