use serde::Deserialize;

use cuttlefish_console::types::ConsoleVariant;

use crate::cli::CliArgs;
use crate::settings::resolved::{ConfigError, ConfigSources};

/// `[backend]`: where requests go and which console talks to it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct BackendSection {
    pub(super) base_url: Option<String>,
    pub(super) variant: Option<String>,
}

pub(super) struct BackendSettings {
    pub(super) variant: ConsoleVariant,
    pub(super) base_url: String,
}

impl BackendSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(variant) = cli.variant {
            self.variant = Some(variant.as_str().to_string());
        }
        if let Some(url) = cli.api_url.clone() {
            self.base_url = Some(url);
        }
    }

    pub(super) fn finalize(self, sources: &ConfigSources) -> Result<BackendSettings, ConfigError> {
        let variant = match self.variant {
            Some(value) => value.parse::<ConsoleVariant>().map_err(|reason| {
                ConfigError::invalid(
                    "backend.variant",
                    value.clone(),
                    sources.source_for_variant(),
                    reason,
                )
            })?,
            None => ConsoleVariant::default(),
        };

        let base_url = self
            .base_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| variant.default_base_url().to_string());

        Ok(BackendSettings { variant, base_url })
    }
}
