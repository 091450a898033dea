mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use cuttlefish_api::Endpoint;
use cuttlefish_console::credentials::{CredentialStore, KeyValueStore};
use cuttlefish_console::{ConsoleOptions, logging, ui};
use settings::ResolvedConfig;
use workflow::QueryWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for name in ui::style::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;
    logging::initialize(&resolved.log)?;

    if cli.print_config {
        resolved.print_summary();
    }

    match cli.query.as_deref() {
        Some(query) => run_query(&cli, query, &resolved),
        None => run_console(resolved),
    }
}

/// Submit one query and print the outcome in the chosen format.
fn run_query(cli: &CliArgs, query: &str, settings: &ResolvedConfig) -> Result<()> {
    let endpoint = cli.endpoint.map(Endpoint::from);
    let workflow = QueryWorkflow::from_config(settings, query, endpoint)?;
    let endpoint = workflow.endpoint();
    let response = workflow.run()?;

    match cli.output {
        OutputFormat::Plain => print_plain(&response),
        OutputFormat::Json => print_json(endpoint, &response)?,
    }

    Ok(())
}

fn run_console(settings: ResolvedConfig) -> Result<()> {
    let credentials = match KeyValueStore::in_data_dir() {
        Ok(store) => CredentialStore::new(store),
        Err(err) => {
            tracing::warn!("credential store unavailable: {err:#}");
            CredentialStore::disabled()
        }
    };

    ui::run(ConsoleOptions {
        variant: settings.variant,
        base_url: settings.base_url,
        theme: settings.theme,
        start_tab: settings.start_tab,
        initial_query: settings.initial_query,
        options: settings.options,
        api_key_override: settings.api_key,
        credentials,
    })
}
