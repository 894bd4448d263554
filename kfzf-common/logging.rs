use anyhow::Result;
use std::path::PathBuf;
use tracing_error::ErrorLayer;
use tracing_subscriber::{Layer, filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
#[path = "./logging.tests.rs"]
mod logging_tests;

/// Initializes new logging to file and returns worker guard that will flush logs on drop.\
/// **Note** that `verbose` lowers the default level to `debug`, `RUST_LOG` still takes precedence.
pub fn initialize(app_name: &str, verbose: bool) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = match std::env::home_dir() {
        Some(path) => path.join(format!(".{app_name}")).join("logs"),
        None => PathBuf::from("logs"),
    };
    let appender = tracing_appender::rolling::daily(logs_dir, format!("{app_name}.log"));
    let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);

    let timer = time::format_description::parse("[year]-[month padding:zero]-[day padding:zero] [hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(app_name, verbose)));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .with_target(true)
        .with_thread_ids(true)
        .with_timer(timer)
        .with_ansi(false)
        .with_writer(non_blocking_appender)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .init();

    Ok(guard)
}

/// Returns default filter directives for the application crates.
pub fn default_filter(app_name: &str, verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let crate_name = app_name.replace('-', "_");

    format!("warn,{crate_name}={level},{crate_name}_kube={level},{crate_name}_config={level}")
}
