use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::types::{ConsoleTab, ConsoleVariant};
use crate::ui::style::Theme;

/// Rows used by the details strip, borders included.
pub(crate) const DETAILS_HEIGHT: u16 = 5;

/// The failure panel: heading plus the message of the failed submission.
pub(crate) fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.error_style())
        .title(Span::styled(
            " Error ",
            theme.error_style().add_modifier(Modifier::BOLD),
        ));
    let paragraph = Paragraph::new(message.to_string())
        .style(theme.error_style())
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Full description of the selected match.
pub(crate) fn render_details(frame: &mut Frame, area: Rect, description: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style())
        .title(Span::styled(" Description ", theme.empty_style()));
    let paragraph = Paragraph::new(description.to_string())
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(paragraph, area);
}

/// Centered muted text for an idle or pending results area.
pub(crate) fn render_notice(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    if area.height == 0 {
        return;
    }
    let middle = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let notice = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(theme.empty_style());
    frame.render_widget(notice, middle);
}

/// Key hints for the bottom row.
pub(crate) fn hint_line(tab: ConsoleTab, variant: ConsoleVariant, theme: &Theme) -> Line<'static> {
    let hints: &[(&str, &str)] = match (tab, variant) {
        (ConsoleTab::Reference, _) => &[
            ("↑/↓", "scroll"),
            ("PgUp/PgDn", "page"),
            ("F1", "query"),
            ("Esc", "quit"),
        ],
        (ConsoleTab::Query, ConsoleVariant::MultiAgent) => &[
            ("Ctrl+Enter", "submit"),
            ("Tab", "focus"),
            ("Space", "toggle"),
            ("PgUp/PgDn", "answer"),
            ("F2", "reference"),
            ("Esc", "quit"),
        ],
        (ConsoleTab::Query, ConsoleVariant::Search) => &[
            ("Ctrl+Enter", "similarity"),
            ("Tab", "focus"),
            ("PgUp/PgDn", "answer"),
            ("F2", "reference"),
            ("Esc", "quit"),
        ],
    };

    let key_style = theme.prompt_style();
    let label_style = theme.empty_style();
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (index, (key, label)) in hints.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  ", label_style));
        }
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(" {label}"), label_style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn error_panel_shows_heading_and_message() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| render_error(frame, frame.area(), "index unavailable", &theme))
            .unwrap();
        let screen = terminal.backend().to_string();
        assert!(screen.contains("Error"));
        assert!(screen.contains("index unavailable"));
    }

    #[test]
    fn hints_follow_the_active_screen() {
        let theme = Theme::default();
        let text = |line: Line<'_>| -> String {
            line.spans.iter().map(|span| span.content.as_ref()).collect()
        };
        assert!(text(hint_line(ConsoleTab::Query, ConsoleVariant::Search, &theme))
            .contains("Ctrl+Enter similarity"));
        assert!(text(hint_line(ConsoleTab::Query, ConsoleVariant::MultiAgent, &theme))
            .contains("Space toggle"));
        assert!(text(hint_line(ConsoleTab::Reference, ConsoleVariant::Search, &theme))
            .starts_with("↑/↓ scroll"));
    }
}
