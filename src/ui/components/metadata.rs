use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::ui::style::Theme;
use crate::ui::view::MetadataView;

/// Width of the metadata panel, borders included.
pub(crate) const METADATA_WIDTH: u16 = 36;

pub(crate) fn render_metadata(frame: &mut Frame, area: Rect, metadata: &MetadataView, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style())
        .title(Span::styled(
            " Query Metadata ",
            theme.header_style().add_modifier(Modifier::BOLD),
        ));
    let label_style = theme.empty_style();
    let lines: Vec<Line<'_>> = metadata
        .fields()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(format!("{label}: "), label_style),
                Span::raw(value.to_string()),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use cuttlefish_api::{AgentMetadata, UserFlags};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    #[test]
    fn lists_every_field_with_its_value() {
        let metadata = MetadataView::from_metadata(&AgentMetadata {
            agent_used: Some("BM25Agent".into()),
            processing_time: Some(1.234),
            query_type: None,
            user_flags: UserFlags {
                user_can_wait: false,
                production_incident: true,
            },
        });
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(METADATA_WIDTH, 7)).unwrap();
        terminal
            .draw(|frame| render_metadata(frame, frame.area(), &metadata, &theme))
            .unwrap();
        let screen = terminal.backend().to_string();

        assert!(screen.contains("Query Metadata"));
        assert!(screen.contains("Agent Used: BM25Agent"));
        assert!(screen.contains("Processing Time: 1.23s"));
        assert!(screen.contains("Query Type: N/A"));
        assert!(screen.contains("Not Urgent: No"));
        assert!(screen.contains("Production Issue: Yes"));
    }
}
