use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::reference::{self, BlockKind, ReferenceLine, Segment};
use crate::ui::style::Theme;

const SUBTITLE: &str = "Sample questions organized by category to help you get started";

/// Styled lines of the bundled reference document.
pub(crate) fn reference_lines(theme: &Theme) -> Vec<Line<'static>> {
    reference::parse(reference::REFERENCE_DOCUMENT)
        .iter()
        .map(|line| styled_line(line, theme))
        .collect()
}

fn styled_line(line: &ReferenceLine<'_>, theme: &Theme) -> Line<'static> {
    let base = match line.kind {
        BlockKind::Heading(1) => theme.prompt_style().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        BlockKind::Heading(2) => theme.prompt_style().add_modifier(Modifier::BOLD),
        BlockKind::Heading(_) => theme.highlight_style(),
        BlockKind::Bullet | BlockKind::Paragraph | BlockKind::Blank => Style::default(),
    };

    let mut spans = Vec::with_capacity(line.segments.len() + 1);
    if line.kind == BlockKind::Bullet {
        spans.push(Span::styled("  • ", theme.empty_style()));
    }
    spans.extend(line.segments.iter().map(|segment| match segment {
        Segment::Text(text) => Span::styled((*text).to_string(), base),
        Segment::Code(code) => Span::styled((*code).to_string(), theme.code_style()),
    }));
    Line::from(spans)
}

/// Render the reference screen. Returns the scroll offset actually applied.
pub(crate) fn render_reference(frame: &mut Frame, area: Rect, scroll: u16, theme: &Theme) -> u16 {
    let [heading, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).areas(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Reference Queries",
            theme.header_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, theme.empty_style())),
    ]);
    frame.render_widget(header, heading);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border_style());
    let inner = block.inner(body);

    let paragraph = Paragraph::new(reference_lines(theme)).wrap(Wrap { trim: false });
    let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    let scroll = scroll.min(total.saturating_sub(inner.height));
    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), body);
    scroll
}
