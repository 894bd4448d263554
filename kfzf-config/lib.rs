pub use self::config::{APP_NAME, APP_VERSION, Config};
pub use self::errors::ConfigError;

mod config;
mod errors;
