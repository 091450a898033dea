use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use cuttlefish_console::app_dirs::AppPaths;
use cuttlefish_console::logging::LOG_ENV;

/// Version banner listing the files `cuttlefish` reads and writes.
pub(super) fn long_version() -> &'static str {
    Box::leak(version_banner(AppPaths::resolve().map_err(|err| err.to_string())).into_boxed_str())
}

fn version_banner(paths: Result<AppPaths, String>) -> String {
    let mut banner = env!("CARGO_PKG_VERSION").to_string();
    match paths {
        Ok(paths) => {
            let _ = writeln!(banner);
            let _ = writeln!(banner, "config file:      {}", paths.config_file().display());
            let _ = writeln!(banner, "saved API key:    {}", paths.credential_store().display());
            let _ = write!(
                banner,
                "log file:         {} ({LOG_ENV} sets the filter)",
                paths.log_file().display()
            );
        }
        Err(err) => {
            let _ = write!(banner, "\nfile locations unavailable: {err}");
        }
    }
    banner
}

/// Create the clap styles used for custom colour output.
pub(super) fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_credential_and_log_files() {
        let paths = AppPaths::resolve().map_err(|err| err.to_string());
        let banner = version_banner(paths.clone());
        assert!(banner.starts_with(env!("CARGO_PKG_VERSION")));
        if let Ok(paths) = paths {
            assert!(banner.contains(&paths.credential_store().display().to_string()));
            assert!(banner.contains(&paths.log_file().display().to_string()));
        }
    }

    #[test]
    fn banner_reports_missing_locations() {
        let banner = version_banner(Err("no home directory".into()));
        assert!(banner.ends_with("file locations unavailable: no home directory"));
    }
}
