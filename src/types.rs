use std::fmt;
use std::str::FromStr;

use cuttlefish_api::{Endpoint, QueryRequest};

/// Which console is shown: both share the same lifecycle and renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleVariant {
    /// Single `/multiagent-rag` endpoint with urgency toggles.
    #[default]
    MultiAgent,
    /// `/similar` and `/rag` endpoints with a persisted credential.
    Search,
}

impl ConsoleVariant {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MultiAgent => "multi-agent",
            Self::Search => "search",
        }
    }

    /// Backend address used when none is configured.
    #[must_use]
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::MultiAgent => "http://127.0.0.1:5020",
            Self::Search => "http://127.0.0.1:8000",
        }
    }

    /// Endpoint fired by the keyboard shortcut.
    #[must_use]
    pub const fn primary_endpoint(self) -> Endpoint {
        match self {
            Self::MultiAgent => Endpoint::MultiAgent,
            Self::Search => Endpoint::Similar,
        }
    }

    /// Endpoints this console can submit to.
    #[must_use]
    pub const fn endpoints(self) -> &'static [Endpoint] {
        match self {
            Self::MultiAgent => &[Endpoint::MultiAgent],
            Self::Search => &[Endpoint::Similar, Endpoint::Rag],
        }
    }
}

impl fmt::Display for ConsoleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleVariant {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "multi-agent" | "multiagent" => Ok(Self::MultiAgent),
            "search" => Ok(Self::Search),
            other => Err(format!("unknown console variant `{other}`; expected `multi-agent` or `search`")),
        }
    }
}

/// Top-level screens, switched client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleTab {
    #[default]
    Query,
    Reference,
}

impl ConsoleTab {
    pub const ALL: [Self; 2] = [Self::Query, Self::Reference];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Query => "Query",
            Self::Reference => "Reference Queries",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Reference => "reference",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Query => Self::Reference,
            Self::Reference => Self::Query,
        }
    }
}

impl FromStr for ConsoleTab {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "query" => Ok(Self::Query),
            "reference" | "reference-queries" => Ok(Self::Reference),
            other => Err(format!("unknown tab `{other}`; expected `query` or `reference`")),
        }
    }
}

/// Flags sent alongside the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOptions {
    pub user_can_wait: bool,
    pub production_incident: bool,
    pub api_key: String,
}

impl RequestOptions {
    /// Build the body for `endpoint`: the endpoint decides which flags travel.
    #[must_use]
    pub fn request_for(&self, endpoint: Endpoint, query: &str) -> QueryRequest {
        match endpoint {
            Endpoint::MultiAgent => {
                QueryRequest::multi_agent(query, self.user_can_wait, self.production_incident)
            }
            Endpoint::Similar | Endpoint::Rag => QueryRequest::search(query, &self.api_key),
        }
    }
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            user_can_wait: true,
            production_incident: false,
            api_key: String::new(),
        }
    }
}
