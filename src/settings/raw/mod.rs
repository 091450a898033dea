use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod backend;
mod logging;
mod ui;

use backend::BackendSection;
use logging::LoggingSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    backend: BackendSection,
    ui: UiSection,
    logging: LoggingSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.backend.apply_cli_overrides(cli);
        self.ui.apply_cli_overrides(cli);
        self.logging.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = ConfigSources {
            variant: detect_source(
                cli.variant.is_some(),
                self.backend.variant.is_some(),
                "CUTTLEFISH__BACKEND__VARIANT",
                "--variant",
                "backend.variant",
            ),
            base_url: detect_source(
                cli.api_url.is_some(),
                self.backend.base_url.is_some(),
                "CUTTLEFISH__BACKEND__BASE_URL",
                "--api-url",
                "backend.base_url",
            ),
            theme: detect_source(
                cli.theme.is_some(),
                self.ui.theme.is_some(),
                "CUTTLEFISH__UI__THEME",
                "--theme",
                "ui.theme",
            ),
            start_tab: detect_source(
                cli.start_tab.is_some(),
                self.ui.start_tab.is_some(),
                "CUTTLEFISH__UI__START_TAB",
                "--start-tab",
                "ui.start_tab",
            ),
            log_level: detect_source(
                cli.log_level.is_some(),
                self.logging.level.is_some(),
                "CUTTLEFISH__LOGGING__LEVEL",
                "--log-level",
                "logging.level",
            ),
        };

        let backend = self.backend.finalize(&sources).map_err(Error::new)?;
        let ui = self.ui.finalize(&sources).map_err(Error::new)?;
        let log = self.logging.finalize(&sources).map_err(Error::new)?;

        let config = ResolvedConfig {
            variant: backend.variant,
            base_url: backend.base_url,
            api_key: cli.api_key.clone().filter(|key| !key.is_empty()),
            theme_name: ui.theme_name,
            theme: ui.theme,
            start_tab: ui.start_tab,
            initial_query: ui.initial_query,
            options: ui.options,
            log,
        };

        config.validate(&sources).map_err(Error::new)?;

        Ok(config)
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> Option<SettingSource> {
    if !value_present {
        return None;
    }

    if cli_present {
        return Some(SettingSource::CliFlag(cli_flag));
    }

    if env::var_os(env_var).is_some() {
        return Some(SettingSource::Environment(env_var));
    }

    Some(SettingSource::ConfigKey(key))
}
