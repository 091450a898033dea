use serde::Deserialize;

use cuttlefish_console::types::{ConsoleTab, RequestOptions};
use cuttlefish_console::ui::style::{self, Theme};

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources};

/// `[ui]`: presentation and the initial state of the input panel.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
    pub(super) start_tab: Option<String>,
    pub(super) initial_query: Option<String>,
    pub(super) user_can_wait: Option<bool>,
    pub(super) production_incident: Option<bool>,
}

pub(super) struct UiSettings {
    pub(super) theme_name: String,
    pub(super) theme: Theme,
    pub(super) start_tab: ConsoleTab,
    pub(super) initial_query: String,
    pub(super) options: RequestOptions,
}

const DEFAULT_THEME_NAME: &str = "slate";

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = cli.theme.clone() {
            self.theme = Some(theme);
        }
        if let Some(tab) = cli.start_tab {
            self.start_tab = Some(tab.as_str().to_string());
        }
        if let Some(query) = cli.initial_query.clone() {
            self.initial_query = Some(query);
        }
        if let Some(value) = cli.user_can_wait {
            self.user_can_wait = Some(value);
        }
        if let Some(value) = cli.production_incident {
            self.production_incident = Some(value);
        }
    }

    pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiSettings, ConfigError> {
        let theme_name = self
            .theme
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string());
        let theme = style::by_name(&theme_name).ok_or_else(|| {
            ConfigError::invalid(
                "ui.theme",
                theme_name.clone(),
                sources.source_for_theme(),
                format!("unknown theme; available: {}", style::names().join(", ")),
            )
        })?;

        let start_tab = match self.start_tab {
            Some(value) => value.parse::<ConsoleTab>().map_err(|reason| {
                ConfigError::invalid(
                    "ui.start_tab",
                    value.clone(),
                    sources.source_for_start_tab(),
                    reason,
                )
            })?,
            None => ConsoleTab::default(),
        };

        let defaults = RequestOptions::default();
        let options = RequestOptions {
            user_can_wait: self.user_can_wait.unwrap_or(defaults.user_can_wait),
            production_incident: self
                .production_incident
                .unwrap_or(defaults.production_incident),
            api_key: String::new(),
        };

        Ok(UiSettings {
            theme_name,
            theme,
            start_tab,
            initial_query: self.initial_query.unwrap_or_default(),
            options,
        })
    }
}
