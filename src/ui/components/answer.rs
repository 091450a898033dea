use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::ui::style::Theme;

/// Render `text` verbatim in a titled panel: line breaks are kept and long
/// lines wrap. Returns the scroll offset actually applied.
pub(crate) fn render_answer(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    scroll: u16,
    theme: &Theme,
) -> u16 {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.answer_style())
        .title(Span::styled(
            format!(" {title} "),
            theme.answer_style().add_modifier(Modifier::BOLD),
        ));
    let inner_width = block.inner(area).width;
    let inner_height = block.inner(area).height;

    let paragraph = Paragraph::new(Text::raw(text)).wrap(Wrap { trim: false });
    let total = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
    let scroll = scroll.min(total.saturating_sub(inner_height));

    frame.render_widget(paragraph.block(block).scroll((scroll, 0)), area);
    scroll
}
