use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::types::ConsoleVariant;
use crate::ui::state::{Focus, InputPanel};
use crate::ui::style::Theme;

const QUERY_HEIGHT: u16 = 5;
const API_KEY_HEIGHT: u16 = 3;

/// Rows taken by the text fields plus the controls line.
pub(crate) fn input_height(variant: ConsoleVariant) -> u16 {
    match variant {
        ConsoleVariant::MultiAgent => QUERY_HEIGHT + 1,
        ConsoleVariant::Search => API_KEY_HEIGHT + QUERY_HEIGHT + 1,
    }
}

/// Render the credential field (search console), the query field and the
/// controls line beneath them.
pub(crate) fn render_input_panel(
    frame: &mut Frame,
    area: Rect,
    panel: &InputPanel<'_>,
    theme: &Theme,
    pending: bool,
) {
    let constraints = match panel.variant() {
        ConsoleVariant::MultiAgent => vec![Constraint::Min(3), Constraint::Length(1)],
        ConsoleVariant::Search => vec![
            Constraint::Length(API_KEY_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ],
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    if panel.variant() == ConsoleVariant::Search {
        frame.render_widget(panel.api_key_area(), rows[next]);
        next += 1;
    }
    frame.render_widget(panel.query_area(), rows[next]);

    let controls = Paragraph::new(Line::from(control_spans(panel, theme, pending)));
    frame.render_widget(controls, rows[next + 1]);
}

/// Toggles and buttons of the controls line, styled for focus and state.
pub(crate) fn control_spans(
    panel: &InputPanel<'_>,
    theme: &Theme,
    pending: bool,
) -> Vec<Span<'static>> {
    let focus = panel.focus();
    let style_for = |widget: Focus, enabled: bool| -> Style {
        if !enabled {
            theme.disabled_style()
        } else if focus == widget {
            theme.focus_style().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        }
    };
    let can_press = !pending && panel.can_submit();

    let mut spans = Vec::new();
    match panel.variant() {
        ConsoleVariant::MultiAgent => {
            spans.push(Span::styled(
                toggle_label("Not Urgent", panel.user_can_wait()),
                style_for(Focus::UserCanWait, !pending),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                toggle_label("Production Issue", panel.production_incident()),
                style_for(Focus::ProductionIncident, !pending),
            ));
            spans.push(Span::raw("  "));
            let label = if pending {
                "Processing..."
            } else {
                "Search JIRA Tickets"
            };
            spans.push(Span::styled(
                button_label(label),
                style_for(Focus::Submit, can_press),
            ));
        }
        ConsoleVariant::Search => {
            spans.push(Span::styled(
                button_label("Similarity"),
                style_for(Focus::Similarity, can_press),
            ));
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                button_label("RAG"),
                style_for(Focus::Rag, can_press),
            ));
        }
    }
    spans
}

fn toggle_label(label: &str, checked: bool) -> String {
    let mark = if checked { 'x' } else { ' ' };
    format!("[{mark}] {label}")
}

fn button_label(label: &str) -> String {
    format!("[ {label} ]")
}
