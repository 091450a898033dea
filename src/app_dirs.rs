//! Where `cuttlefish` keeps its files.
//!
//! Configuration lives in the config directory; the credential store and the
//! log file live in the data directory. Both directories honour an environment
//! override before falling back to the platform layout from `directories`.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const CONFIG_DIR_ENV: &str = "CUTTLEFISH_CONFIG_DIR";
const DATA_DIR_ENV: &str = "CUTTLEFISH_DATA_DIR";

const CONFIG_FILE_NAME: &str = "config.toml";
const CREDENTIAL_FILE_NAME: &str = "storage.json";
const LOG_FILE_NAME: &str = "cuttlefish.log";

/// Resolved config and data directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl AppPaths {
    /// Resolve both directories from the process environment.
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(|name| env::var_os(name))
    }

    fn resolve_with(lookup: impl Fn(&str) -> Option<OsString>) -> Result<Self> {
        let override_dir = |name: &str| {
            lookup(name)
                .filter(|value| !value.is_empty())
                .map(PathBuf::from)
        };
        let config_dir = override_dir(CONFIG_DIR_ENV);
        let data_dir = override_dir(DATA_DIR_ENV);

        if let (Some(config_dir), Some(data_dir)) = (config_dir.clone(), data_dir.clone()) {
            return Ok(Self { config_dir, data_dir });
        }

        let project = ProjectDirs::from("io", "cuttlefish", "cuttlefish")
            .ok_or_else(|| anyhow!("no home directory to place cuttlefish files in"))?;
        Ok(Self {
            config_dir: config_dir.unwrap_or_else(|| project.config_local_dir().to_path_buf()),
            data_dir: data_dir.unwrap_or_else(|| project.data_local_dir().to_path_buf()),
        })
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// User-level `config.toml`.
    #[must_use]
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// JSON file holding the saved API key.
    #[must_use]
    pub fn credential_store(&self) -> PathBuf {
        self.data_dir.join(CREDENTIAL_FILE_NAME)
    }

    /// Log file used when none is configured.
    #[must_use]
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}
