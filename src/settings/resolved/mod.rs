use cuttlefish_console::logging::LogOptions;
use cuttlefish_console::types::{ConsoleTab, ConsoleVariant, RequestOptions};
use cuttlefish_console::ui::style::Theme;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub variant: ConsoleVariant,
    pub base_url: String,
    /// Credential passed on the command line; overrides the stored one
    /// without being persisted.
    pub api_key: Option<String>,
    pub theme_name: String,
    pub theme: Theme,
    pub start_tab: ConsoleTab,
    pub initial_query: String,
    pub options: RequestOptions,
    pub log: LogOptions,
}

impl ResolvedConfig {
    pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
        validation::validate(self, sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
