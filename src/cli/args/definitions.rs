use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::options::{EndpointArg, OutputFormat, TabArg, VariantArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `cuttlefish` binary.
#[derive(Parser, Debug)]
#[command(
    name = "cuttlefish",
    version,
    long_version = long_version(),
    about = "Terminal console for querying a RAG ticket search backend",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "CUTTLEFISH_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        long,
        value_enum,
        help = "Choose which console to run (default: multi-agent)"
    )]
    pub(crate) variant: Option<VariantArg>,
    #[arg(
        short = 'u',
        long = "api-url",
        value_name = "URL",
        env = "CUTTLEFISH_API_URL",
        help = "Base URL of the backend (default: depends on the console)"
    )]
    pub(crate) api_url: Option<String>,
    #[arg(
        short = 'k',
        long = "api-key",
        value_name = "KEY",
        env = "CUTTLEFISH_OPENAI_API_KEY",
        hide_env_values = true,
        help = "Credential sent by the search console; not persisted (default: stored key)"
    )]
    pub(crate) api_key: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
    #[arg(
        short = 't',
        long = "start-tab",
        value_enum,
        help = "Choose the tab shown at start-up (default: query)"
    )]
    pub(crate) start_tab: Option<TabArg>,
    #[arg(
        short = 'i',
        long = "initial-query",
        value_name = "QUERY",
        help = "Prefill the query input (default: empty)"
    )]
    pub(crate) initial_query: Option<String>,
    #[arg(
        long = "user-can-wait",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Tell the multi-agent backend the user can wait (default: enabled)"
    )]
    pub(crate) user_can_wait: Option<bool>,
    #[arg(
        long = "production-incident",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        help = "Flag the query as a production incident (default: disabled)"
    )]
    pub(crate) production_incident: Option<bool>,
    #[arg(
        long = "log-level",
        value_name = "DIRECTIVE",
        help = "Log filter directive, overridden by CUTTLEFISH_LOG (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write logs to this file (default: cuttlefish.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        long = "no-log",
        help = "Disable the log file (default: disabled)"
    )]
    pub(crate) no_log: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'q',
        long,
        value_name = "QUERY",
        help = "Submit one query, print the result and exit instead of opening the console"
    )]
    pub(crate) query: Option<String>,
    #[arg(
        short = 'e',
        long,
        value_enum,
        requires = "query",
        help = "Endpoint for --query (default: the console's primary endpoint)"
    )]
    pub(crate) endpoint: Option<EndpointArg>,
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t = OutputFormat::Plain,
        help = "Choose how to print a one-shot result"
    )]
    pub(crate) output: OutputFormat,
}
