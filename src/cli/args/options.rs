use clap::ValueEnum;

use cuttlefish_api::Endpoint;
use cuttlefish_console::types::{ConsoleTab, ConsoleVariant};

/// Console variants accepted via the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum VariantArg {
    #[clap(name = "multi-agent")]
    MultiAgent,
    Search,
}

impl VariantArg {
    /// Return the string representation consumed by configuration loading.
    pub(crate) fn as_str(self) -> &'static str {
        ConsoleVariant::from(self).as_str()
    }
}

impl From<VariantArg> for ConsoleVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::MultiAgent => ConsoleVariant::MultiAgent,
            VariantArg::Search => ConsoleVariant::Search,
        }
    }
}

/// Tabs the console can open on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum TabArg {
    Query,
    Reference,
}

impl TabArg {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            TabArg::Query => ConsoleTab::Query.as_str(),
            TabArg::Reference => ConsoleTab::Reference.as_str(),
        }
    }
}

/// Endpoints reachable from a one-shot `--query` run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum EndpointArg {
    Similar,
    Rag,
    #[clap(name = "multiagent-rag")]
    MultiAgent,
}

impl From<EndpointArg> for Endpoint {
    fn from(value: EndpointArg) -> Self {
        match value {
            EndpointArg::Similar => Endpoint::Similar,
            EndpointArg::Rag => Endpoint::Rag,
            EndpointArg::MultiAgent => Endpoint::MultiAgent,
        }
    }
}

/// Output formats supported by one-shot queries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Plain,
    Json,
}
