//! File-backed `tracing` setup.
//!
//! The terminal is owned by the UI while the console runs, so log records go
//! to a file in the data directory instead of stdout/stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs::AppPaths;

/// Environment variable holding a full `EnvFilter` directive.
pub const LOG_ENV: &str = "CUTTLEFISH_LOG";

/// Where and how verbosely to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// Default directive used when [`LOG_ENV`] is unset, e.g. `info`.
    pub level: String,
    /// Destination file; `None` disables logging.
    pub file: Option<PathBuf>,
}

/// Default log file location inside the data directory.
pub fn default_log_file() -> Result<PathBuf> {
    Ok(AppPaths::resolve()?.log_file())
}

/// Parse a filter directive such as `info` or `warn,cuttlefish_api=debug`.
pub fn parse_directive(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("invalid log level directive `{level}`"))
}

/// Build the filter from [`LOG_ENV`], falling back to `level`.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => Ok(filter),
        Err(_) => parse_directive(level),
    }
}

/// Install the global subscriber. A no-op when logging is disabled.
pub fn initialize(options: &LogOptions) -> Result<()> {
    let Some(path) = options.file.as_deref() else {
        return Ok(());
    };

    let file = open_log_file(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(&options.level)?)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log_file = %path.display(), "logging initialised");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}
