use std::path::PathBuf;

use serde::Deserialize;

use cuttlefish_console::logging::{self, LogOptions};

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources};

/// `[logging]`: verbosity and destination of the log file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
    pub(super) level: Option<String>,
    pub(super) file: Option<PathBuf>,
    pub(super) enabled: Option<bool>,
}

const DEFAULT_LEVEL: &str = "info";

impl LoggingSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level.clone() {
            self.level = Some(level);
        }
        if let Some(file) = cli.log_file.clone() {
            self.file = Some(file);
            self.enabled = Some(true);
        }
        if cli.no_log {
            self.enabled = Some(false);
        }
    }

    pub(super) fn finalize(self, sources: &ConfigSources) -> Result<LogOptions, ConfigError> {
        let level = self.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string());
        if let Err(err) = logging::parse_directive(&level) {
            return Err(ConfigError::invalid(
                "logging.level",
                level,
                sources.source_for_log_level(),
                err.to_string(),
            ));
        }

        let file = if self.enabled.unwrap_or(true) {
            self.file.or_else(|| logging::default_log_file().ok())
        } else {
            None
        };

        Ok(LogOptions { level, file })
    }
}
