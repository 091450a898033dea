use std::fmt::Write as _;

use anyhow::Result;
use cuttlefish_api::{Endpoint, QueryResponse};
use cuttlefish_console::ui::view::ResultView;
use serde_json::json;

/// Render a response as plain text, using the same view model as the
/// terminal UI.
pub(crate) fn format_plain(response: &QueryResponse) -> String {
    let view = ResultView::from_response(response);
    let mut out = String::new();

    if let ResultView::Raw(text) = &view {
        out.push_str(text);
        out.push('\n');
        return out;
    }

    if let Some(answer) = view.answer() {
        out.push_str("Answer\n");
        for line in answer.lines() {
            let _ = writeln!(out, "  {line}");
        }
        out.push('\n');
    }

    if let Some((title, layout)) = view.table() {
        let _ = writeln!(out, "{title}");
        let _ = writeln!(out, "  {}", layout.headers().join(" | "));
        if view.rows().is_empty() {
            out.push_str("  No results\n");
        }
        for row in view.rows() {
            let line = layout.cells(row).join(" | ");
            let _ = writeln!(out, "  {}", line.trim_end());
        }
        out.push('\n');
    }

    if let Some(metadata) = view.metadata() {
        out.push_str("Query Metadata\n");
        for (label, value) in metadata.fields() {
            let _ = writeln!(out, "  {label}: {value}");
        }
        out.push('\n');
    }

    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out.push('\n');
    out
}

/// Print a plain-text representation of the response.
pub(crate) fn print_plain(response: &QueryResponse) {
    print!("{}", format_plain(response));
}

/// Format the response as a JSON document tagged with its endpoint and shape.
pub(crate) fn format_response_json(endpoint: Endpoint, response: &QueryResponse) -> Result<String> {
    let payload = json!({
        "endpoint": endpoint.to_string(),
        "kind": response.kind(),
        "response": response,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the response.
pub(crate) fn print_json(endpoint: Endpoint, response: &QueryResponse) -> Result<()> {
    println!("{}", format_response_json(endpoint, response)?);
    Ok(())
}
