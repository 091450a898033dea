use std::fmt;

use serde::Serialize;

/// Backend routes the console can submit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Plain vector similarity search.
    Similar,
    /// Retrieval plus a generated answer.
    Rag,
    /// Multi-agent answer with run metadata.
    MultiAgent,
}

impl Endpoint {
    /// Path segment appended to the configured base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Similar => "similar",
            Self::Rag => "rag",
            Self::MultiAgent => "multiagent-rag",
        }
    }

    /// Message shown when a failed response carries no usable error field.
    #[must_use]
    pub const fn error_fallback(self) -> &'static str {
        match self {
            Self::Similar | Self::Rag => "Unknown error",
            Self::MultiAgent => "Request failed",
        }
    }

    /// Resolve an endpoint from its path segment, ignoring a leading slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim().trim_start_matches('/') {
            "similar" => Some(Self::Similar),
            "rag" => Some(Self::Rag),
            "multiagent-rag" => Some(Self::MultiAgent),
            _ => None,
        }
    }

    /// Join the endpoint path onto `base_url`.
    #[must_use]
    pub fn url(self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.path())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Body of `POST /multiagent-rag`.
///
/// Field order is part of the wire contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MultiAgentRequest {
    pub query: String,
    pub user_can_wait: bool,
    pub production_incident: bool,
}

/// Body of `POST /similar` and `POST /rag`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub openai_api_key: String,
}

/// A request body ready to be serialized for one of the [`Endpoint`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryRequest {
    MultiAgent(MultiAgentRequest),
    Search(SearchRequest),
}

impl QueryRequest {
    /// Build a multi-agent request; the query is trimmed.
    #[must_use]
    pub fn multi_agent(query: &str, user_can_wait: bool, production_incident: bool) -> Self {
        Self::MultiAgent(MultiAgentRequest {
            query: query.trim().to_string(),
            user_can_wait,
            production_incident,
        })
    }

    /// Build a similarity/RAG request; the query is trimmed.
    #[must_use]
    pub fn search(query: &str, openai_api_key: &str) -> Self {
        Self::Search(SearchRequest {
            query: query.trim().to_string(),
            openai_api_key: openai_api_key.to_string(),
        })
    }

    /// The query text carried by the request.
    #[must_use]
    pub fn query(&self) -> &str {
        match self {
            Self::MultiAgent(request) => &request.query,
            Self::Search(request) => &request.query,
        }
    }
}
