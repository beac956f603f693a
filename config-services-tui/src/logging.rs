//! Logging setup
//!
//! The terminal belongs to the UI, so everything goes to a file. Library
//! crates log through `log`; tracing-subscriber picks those records up.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::backend::AppConfig;

const DEFAULT_LOG_FILE: &str = "config-admin.log";
const DEFAULT_FILTER: &str = "info";

/// Log file for `config`: `log_file` if set, else next to `config_path`.
pub fn log_path(config: &AppConfig, config_path: &Path) -> PathBuf {
    config.log_file.clone().unwrap_or_else(|| {
        config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(DEFAULT_LOG_FILE)
    })
}

/// Filter from `--log-level`, then `RUST_LOG`, then `info`.
fn build_filter(level: Option<&str>) -> Result<EnvFilter> {
    match level {
        Some(directives) => EnvFilter::try_new(directives)
            .with_context(|| format!("invalid log filter '{directives}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Install the global subscriber. Keep the guard alive until exit so the
/// writer thread flushes.
pub fn init(config: &AppConfig, config_path: &Path, level: Option<&str>) -> Result<WorkerGuard> {
    let path = log_path(config, config_path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path has no file name: {}", path.display()))?;

    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .with(build_filter(level)?)
        .try_init()
        .context("installing log subscriber")?;

    tracing::info!("Logging to {}", Path::new(&dir).join(file_name).display());
    Ok(guard)
}
