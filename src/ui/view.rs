//! Display model for a settled response.
//!
//! [`ResultView`] holds the strings the renderer draws: scores and processing
//! times are already formatted and missing fields already replaced by their
//! placeholder. The terminal renderer and the plain-text printer both consume
//! it, so formatting rules live in one place.

use cuttlefish_api::{AgentMetadata, Match, QueryResponse};

/// Placeholder for missing fields in the multi-agent views.
pub const PLACEHOLDER: &str = "N/A";

/// One table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRow {
    /// Score with four decimals; `None` when the backend sent none.
    pub score: Option<String>,
    pub key: String,
    pub title: String,
    pub description: String,
}

impl MatchRow {
    /// Build a row, using `placeholder` for absent text fields.
    #[must_use]
    pub fn from_match(item: &Match, placeholder: &str) -> Self {
        let text = |value: Option<&String>| match value {
            Some(value) if !value.is_empty() => value.clone(),
            _ => placeholder.to_string(),
        };
        Self {
            score: item.score.map(format_score),
            key: item.display_key().unwrap_or_else(|| placeholder.to_string()),
            title: text(item.payload.title.as_ref()),
            description: text(item.payload.description.as_ref()),
        }
    }
}

/// The "Query Metadata" panel of a multi-agent answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataView {
    pub agent_used: String,
    pub processing_time: String,
    pub query_type: String,
    pub not_urgent: &'static str,
    pub production_issue: &'static str,
}

impl MetadataView {
    #[must_use]
    pub fn from_metadata(metadata: &AgentMetadata) -> Self {
        let text = |value: &Option<String>| {
            value
                .clone()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string())
        };
        Self {
            agent_used: text(&metadata.agent_used),
            processing_time: format_processing_time(metadata.processing_time),
            query_type: text(&metadata.query_type),
            not_urgent: yes_no(metadata.user_flags.user_can_wait),
            production_issue: yes_no(metadata.user_flags.production_incident),
        }
    }

    /// Label/value pairs in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Agent Used", &self.agent_used),
            ("Processing Time", &self.processing_time),
            ("Query Type", &self.query_type),
            ("Not Urgent", self.not_urgent),
            ("Production Issue", self.production_issue),
        ]
    }
}

/// Which columns a match table shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Score, Key, Title, Description.
    Scored,
    /// Key, Title, Description.
    Described,
    /// Key, Title.
    Compact,
}

impl TableLayout {
    #[must_use]
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Self::Scored => &["Score", "Key", "Title", "Description"],
            Self::Described => &["Key", "Title", "Description"],
            Self::Compact => &["Key", "Title"],
        }
    }

    /// Cell texts of `row` for this layout.
    #[must_use]
    pub fn cells(self, row: &MatchRow) -> Vec<String> {
        match self {
            Self::Scored => vec![
                row.score.clone().unwrap_or_default(),
                row.key.clone(),
                row.title.clone(),
                row.description.clone(),
            ],
            Self::Described => vec![
                row.key.clone(),
                row.title.clone(),
                row.description.clone(),
            ],
            Self::Compact => vec![row.key.clone(), row.title.clone()],
        }
    }
}

/// A response, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    Similarity {
        rows: Vec<MatchRow>,
    },
    Rag {
        answer: String,
        rows: Vec<MatchRow>,
    },
    MultiAgent {
        answer: String,
        rows: Vec<MatchRow>,
        metadata: MetadataView,
    },
    /// Pretty-printed JSON of a body with no known shape.
    Raw(String),
}

impl ResultView {
    #[must_use]
    pub fn from_response(response: &QueryResponse) -> Self {
        match response {
            QueryResponse::Similarity { results } => Self::Similarity {
                rows: rows_of(results, ""),
            },
            QueryResponse::Rag { answer, context } => Self::Rag {
                answer: answer.clone(),
                rows: rows_of(context, ""),
            },
            QueryResponse::MultiAgent {
                answer,
                context,
                metadata,
            } => Self::MultiAgent {
                answer: answer.clone(),
                rows: rows_of(context, PLACEHOLDER),
                metadata: MetadataView::from_metadata(metadata),
            },
            QueryResponse::Unrecognized(value) => Self::Raw(
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            ),
        }
    }

    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        match self {
            Self::Rag { answer, .. } | Self::MultiAgent { answer, .. } => Some(answer),
            Self::Similarity { .. } | Self::Raw(_) => None,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[MatchRow] {
        match self {
            Self::Similarity { rows } | Self::Rag { rows, .. } | Self::MultiAgent { rows, .. } => {
                rows
            }
            Self::Raw(_) => &[],
        }
    }

    #[must_use]
    pub fn metadata(&self) -> Option<&MetadataView> {
        match self {
            Self::MultiAgent { metadata, .. } => Some(metadata),
            _ => None,
        }
    }

    /// Title and columns of the match table, or `None` when no table is shown.
    #[must_use]
    pub fn table(&self) -> Option<(String, TableLayout)> {
        match self {
            Self::Similarity { .. } => Some(("Results".to_string(), TableLayout::Scored)),
            Self::Rag { .. } => Some(("Bugs".to_string(), TableLayout::Described)),
            Self::MultiAgent { rows, .. } if !rows.is_empty() => Some((
                format!("Related JIRA Tickets ({})", rows.len()),
                TableLayout::Compact,
            )),
            Self::MultiAgent { .. } | Self::Raw(_) => None,
        }
    }
}

fn rows_of(matches: &[Match], placeholder: &str) -> Vec<MatchRow> {
    matches
        .iter()
        .map(|item| MatchRow::from_match(item, placeholder))
        .collect()
}

/// Relevance score with four decimals, e.g. `0.8421`.
#[must_use]
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

/// Seconds with two decimals, e.g. `1.23s`, or the placeholder.
#[must_use]
pub fn format_processing_time(seconds: Option<f64>) -> String {
    match seconds {
        Some(seconds) => format!("{seconds:.2}s"),
        None => PLACEHOLDER.to_string(),
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn view(value: serde_json::Value) -> ResultView {
        ResultView::from_response(&QueryResponse::from_value(value))
    }

    #[test]
    fn similarity_scores_use_four_decimals() {
        let view = view(json!({
            "results": [{ "id": 42, "score": 0.8421374, "payload": { "key": "HBASE-1", "title": "Split fails" } }]
        }));
        let rows = view.rows();
        assert_eq!(rows[0].score.as_deref(), Some("0.8421"));
        assert_eq!(rows[0].key, "HBASE-1");
        assert_eq!(view.table().unwrap().0, "Results");
    }

    #[test]
    fn similarity_key_falls_back_to_id() {
        let view = view(json!({ "results": [{ "id": 42, "payload": {} }] }));
        let row = &view.rows()[0];
        assert_eq!(row.key, "42");
        assert_eq!(row.title, "");
        assert_eq!(row.score, None);
        assert_eq!(TableLayout::Scored.cells(row)[0], "");
    }

    #[test]
    fn rag_rows_leave_missing_titles_blank() {
        let view = view(json!({
            "answer": "Increase the heap.",
            "context": [{ "payload": { "key": "JBIDE-7", "description": "OOM on start" } }]
        }));
        assert_eq!(view.answer(), Some("Increase the heap."));
        assert_eq!(view.rows()[0].title, "");
        assert_eq!(view.table().unwrap(), ("Bugs".to_string(), TableLayout::Described));
    }

    #[test]
    fn multi_agent_view_formats_metadata() {
        let view = view(json!({
            "answer": "Raise -Xmx.",
            "context": [{ "score": 0.5, "payload": { "key": "JBIDE-1" } }],
            "metadata": {
                "agent_used": "BM25Agent",
                "processing_time": 1.234,
                "query_type": "troubleshooting",
                "user_flags": { "user_can_wait": true, "production_incident": false }
            }
        }));

        let metadata = view.metadata().unwrap();
        assert_eq!(metadata.processing_time, "1.23s");
        assert_eq!(metadata.not_urgent, "Yes");
        assert_eq!(metadata.production_issue, "No");
        assert_eq!(view.rows()[0].title, PLACEHOLDER);
        assert_eq!(view.table().unwrap().0, "Related JIRA Tickets (1)");
    }

    #[test]
    fn multi_agent_without_context_has_no_table() {
        let view = view(json!({
            "answer": "Nothing similar.",
            "context": [],
            "metadata": { "agent_used": "ContextualAgent" }
        }));
        assert!(view.table().is_none());
        let metadata = view.metadata().unwrap();
        assert_eq!(metadata.processing_time, PLACEHOLDER);
        assert_eq!(metadata.query_type, PLACEHOLDER);
    }

    #[test]
    fn unknown_shapes_are_dumped_as_json() {
        let ResultView::Raw(text) = view(json!({ "status": "queued" })) else {
            panic!("expected raw view");
        };
        assert_eq!(text, "{\n  \"status\": \"queued\"\n}");
    }

    #[test]
    fn metadata_fields_are_in_display_order() {
        let metadata = MetadataView::from_metadata(&AgentMetadata::default());
        let labels: Vec<_> = metadata.fields().iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["Agent Used", "Processing Time", "Query Type", "Not Urgent", "Production Issue"]
        );
    }
}
