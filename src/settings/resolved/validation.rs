use cuttlefish_api::Url;

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    validate_base_url(&config.base_url, sources)
}

fn validate_base_url(value: &str, sources: &ConfigSources) -> Result<(), ConfigError> {
    let invalid = |reason: String| {
        ConfigError::invalid("backend.base_url", value, sources.source_for_base_url(), reason)
    };

    let url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!(
            "unsupported scheme `{}`; expected http or https",
            url.scheme()
        )));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("must not carry a query string or fragment".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use cuttlefish_console::logging::LogOptions;
    use cuttlefish_console::types::{ConsoleTab, ConsoleVariant, RequestOptions};
    use cuttlefish_console::ui::style::Theme;

    use super::super::SettingSource;
    use super::*;

    fn config_with_url(base_url: &str) -> ResolvedConfig {
        ResolvedConfig {
            variant: ConsoleVariant::MultiAgent,
            base_url: base_url.into(),
            api_key: None,
            theme_name: "slate".into(),
            theme: Theme::default(),
            start_tab: ConsoleTab::Query,
            initial_query: String::new(),
            options: RequestOptions::default(),
            log: LogOptions {
                level: "info".into(),
                file: None,
            },
        }
    }

    #[test]
    fn accepts_http_and_https_urls() {
        let sources = ConfigSources::default();
        validate(&config_with_url("http://127.0.0.1:5020"), &sources).unwrap();
        validate(&config_with_url("https://rag.example.com/api/"), &sources).unwrap();
    }

    #[test]
    fn rejects_other_schemes_naming_the_flag() {
        let sources = ConfigSources {
            base_url: Some(SettingSource::CliFlag("--api-url")),
            ..ConfigSources::default()
        };

        let err = validate(&config_with_url("ftp://files.example.com"), &sources).unwrap_err();
        assert_eq!(err.key, "backend.base_url");
        let message = err.to_string();
        assert!(message.contains("CLI flag `--api-url`"));
        assert!(message.contains("value: ftp://files.example.com"));
    }

    #[test]
    fn rejects_unparsable_urls_from_environment() {
        let sources = ConfigSources {
            base_url: Some(SettingSource::Environment("CUTTLEFISH__BACKEND__BASE_URL")),
            ..ConfigSources::default()
        };

        let err = validate(&config_with_url("localhost without scheme"), &sources).unwrap_err();
        assert!(err.to_string().contains("environment variable"));
    }

    #[test]
    fn rejects_query_strings() {
        let err = validate(
            &config_with_url("http://127.0.0.1:5020/?debug=1"),
            &ConfigSources::default(),
        )
        .unwrap_err();
        assert_eq!(err.origin, SettingSource::ConfigKey("backend.base_url"));
    }
}
