use std::fmt;

/// Where a configuration value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
    CliFlag(&'static str),
    Environment(&'static str),
    ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
            Self::Environment(var) => write!(f, "environment variable `{var}`"),
            Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
    pub(crate) variant: Option<SettingSource>,
    pub(crate) base_url: Option<SettingSource>,
    pub(crate) theme: Option<SettingSource>,
    pub(crate) start_tab: Option<SettingSource>,
    pub(crate) log_level: Option<SettingSource>,
}

impl ConfigSources {
    pub(crate) fn source_for_variant(&self) -> SettingSource {
        self.variant
            .clone()
            .unwrap_or(SettingSource::ConfigKey("backend.variant"))
    }

    pub(crate) fn source_for_base_url(&self) -> SettingSource {
        self.base_url
            .clone()
            .unwrap_or(SettingSource::ConfigKey("backend.base_url"))
    }

    pub(crate) fn source_for_theme(&self) -> SettingSource {
        self.theme.clone().unwrap_or(SettingSource::ConfigKey("ui.theme"))
    }

    pub(crate) fn source_for_start_tab(&self) -> SettingSource {
        self.start_tab
            .clone()
            .unwrap_or(SettingSource::ConfigKey("ui.start_tab"))
    }

    pub(crate) fn source_for_log_level(&self) -> SettingSource {
        self.log_level
            .clone()
            .unwrap_or(SettingSource::ConfigKey("logging.level"))
    }
}
