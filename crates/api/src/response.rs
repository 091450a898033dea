//! Response shapes returned by the backend.
//!
//! The backend does not tag its payloads. [`QueryResponse::from_value`] probes
//! the decoded JSON once, in a fixed priority order, and produces a closed
//! enum so the rendering side can match exhaustively instead of checking for
//! optional fields again.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

/// Identifier of a retrieved document, as sent by the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MatchId {
    Text(String),
    Number(serde_json::Number),
}

impl MatchId {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Number(number) => Some(Self::Number(number.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// Display fields of a retrieved ticket.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Every other payload field, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatchPayload {
    fn from_value(value: Option<&Value>) -> Self {
        let Some(Value::Object(object)) = value else {
            return Self::default();
        };
        let mut extra = object.clone();
        let mut take = |field: &str| extra.remove(field).as_ref().and_then(text_of);
        let key = take("key");
        let title = take("title");
        let description = take("description");
        Self {
            key,
            title,
            description,
            extra,
        }
    }
}

/// A single retrieved document with its relevance score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Match {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<MatchId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub payload: MatchPayload,
}

impl Match {
    /// Read a match leniently: wrongly typed fields are treated as absent.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            id: value.get("id").and_then(MatchId::from_value),
            score: value.get("score").and_then(Value::as_f64),
            payload: MatchPayload::from_value(value.get("payload")),
        }
    }

    /// Short identifier shown in tables: the payload key, else the id.
    #[must_use]
    pub fn display_key(&self) -> Option<String> {
        self.payload
            .key
            .clone()
            .filter(|key| !key.is_empty())
            .or_else(|| self.id.as_ref().map(ToString::to_string))
    }
}

/// Flags the multi-agent backend echoes back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UserFlags {
    pub user_can_wait: bool,
    pub production_incident: bool,
}

/// Run metadata attached to multi-agent answers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentMetadata {
    pub agent_used: Option<String>,
    /// Seconds spent by the backend.
    pub processing_time: Option<f64>,
    pub query_type: Option<String>,
    pub user_flags: UserFlags,
}

impl AgentMetadata {
    fn from_object(object: &Map<String, Value>) -> Self {
        let flags = object.get("user_flags");
        let flag = |name: &str| {
            flags
                .and_then(|flags| flags.get(name))
                .and_then(Value::as_bool)
                .unwrap_or(false)
        };
        Self {
            agent_used: object.get("agent_used").and_then(text_of),
            processing_time: object.get("processing_time").and_then(Value::as_f64),
            query_type: object.get("query_type").and_then(text_of),
            user_flags: UserFlags {
                user_can_wait: flag("user_can_wait"),
                production_incident: flag("production_incident"),
            },
        }
    }
}

/// A resolved backend response, discriminated by shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    Similarity {
        results: Vec<Match>,
    },
    Rag {
        answer: String,
        context: Vec<Match>,
    },
    MultiAgent {
        answer: String,
        context: Vec<Match>,
        metadata: AgentMetadata,
    },
    /// Any payload that matched none of the known shapes.
    Unrecognized(Value),
}

impl QueryResponse {
    /// Discriminate a decoded response body.
    ///
    /// Probing order:
    /// 1. `results` array without `answer` is a similarity response.
    /// 2. `answer` and `context` without `metadata.agent_used` is a RAG response.
    /// 3. `answer`, `context` and `metadata.agent_used` is a multi-agent response.
    /// 4. Anything else is kept verbatim.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::Unrecognized(value);
        };

        let answer = object.get("answer");
        if answer.is_none() {
            if let Some(Value::Array(results)) = object.get("results") {
                return Self::Similarity {
                    results: matches_of(results),
                };
            }
            return Self::Unrecognized(value);
        }

        let (Some(Value::String(answer)), Some(Value::Array(context))) =
            (answer, object.get("context"))
        else {
            return Self::Unrecognized(value);
        };

        let metadata = object
            .get("metadata")
            .and_then(Value::as_object)
            .filter(|metadata| metadata.contains_key("agent_used"));

        match metadata {
            None => Self::Rag {
                answer: answer.clone(),
                context: matches_of(context),
            },
            Some(metadata) => Self::MultiAgent {
                answer: answer.clone(),
                context: matches_of(context),
                metadata: AgentMetadata::from_object(metadata),
            },
        }
    }

    /// Short name of the variant, used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Similarity { .. } => "similarity",
            Self::Rag { .. } => "rag",
            Self::MultiAgent { .. } => "multi-agent",
            Self::Unrecognized(_) => "unrecognized",
        }
    }

    /// Supporting matches, in backend order.
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        match self {
            Self::Similarity { results } => results,
            Self::Rag { context, .. } | Self::MultiAgent { context, .. } => context,
            Self::Unrecognized(_) => &[],
        }
    }
}

fn matches_of(values: &[Value]) -> Vec<Match> {
    values.iter().map(Match::from_value).collect()
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}
