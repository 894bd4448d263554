/// Possible errors from configuration file manipulation.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Cannot read configuration file.
    #[error("cannot read configuration file")]
    IoError(#[from] std::io::Error),

    /// Cannot deserialize configuration.
    #[error("cannot deserialize configuration")]
    SerializationError(#[from] serde_yaml::Error),
}
