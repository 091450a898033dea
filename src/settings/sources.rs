use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use cuttlefish_console::app_dirs::AppPaths;

use crate::cli::CliArgs;

/// Prefix of the `CUTTLEFISH__SECTION__KEY` environment variables.
pub(super) const ENV_PREFIX: &str = "cuttlefish";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(paths) = AppPaths::resolve() {
        files.push(paths.config_file());
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".cuttlefish.toml"));
        files.push(current_dir.join("cuttlefish.toml"));
    }

    files
}
