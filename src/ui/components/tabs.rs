use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::types::ConsoleTab;
use crate::ui::style::Theme;

/// Argument bundle for rendering the header row
pub(crate) struct HeaderContext<'a> {
    pub title: &'a str,
    pub tab: ConsoleTab,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Progress information for the header progress indicator
pub(crate) struct ProgressState<'a> {
    pub progress_text: &'a str,
    pub active: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the title row with tabs at the right.
pub(crate) fn render_header_with_tabs(
    frame: &mut Frame,
    header: HeaderContext<'_>,
    progress: ProgressState<'_>,
) {
    let HeaderContext {
        title,
        tab,
        area,
        theme,
    } = header;
    let tabs_width = calculate_tabs_width();

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(tabs_width)])
        .split(area);

    let title_area = horizontal[0];
    let title_widget = Paragraph::new(title.to_string())
        .style(theme.prompt_style().add_modifier(Modifier::BOLD));
    frame.render_widget(title_widget, title_area);
    render_progress(frame, title_area, progress, theme);

    let tabs_area = horizontal[1];
    let tabs_inner = Rect {
        x: tabs_area.x.saturating_add(1),
        width: tabs_area.width.saturating_sub(1),
        ..tabs_area
    };
    let selected = selected_tab_index(tab);
    let tabs = Tabs::new(build_tab_titles(theme, selected))
        .select(selected)
        .divider("")
        .padding("", " ")
        .highlight_style(theme.tab_highlight_style());

    frame.render_widget(tabs, tabs_inner);
}

fn selected_tab_index(tab: ConsoleTab) -> usize {
    ConsoleTab::ALL
        .iter()
        .position(|candidate| *candidate == tab)
        .unwrap_or(0)
}

fn build_tab_titles(theme: &Theme, selected: usize) -> Vec<Line<'static>> {
    let active = theme.header_style();
    let inactive = theme.tab_inactive_style();
    ConsoleTab::ALL
        .iter()
        .enumerate()
        .map(|(index, tab)| {
            let label = format!(" {} ", tab.label());
            let style = if index == selected { active } else { inactive };
            Line::from(label).style(style)
        })
        .collect()
}

fn calculate_tabs_width() -> u16 {
    let width: usize = ConsoleTab::ALL
        .iter()
        .map(|tab| tab.label().width() + 3)
        .sum();
    u16::try_from(width).unwrap_or(u16::MAX).max(12)
}

/// Draw the spinner and label right-aligned in `area`, keeping two columns
/// clear of whatever text is already on the row.
fn render_progress(frame: &mut Frame, area: Rect, progress: ProgressState<'_>, theme: &Theme) {
    let ProgressState {
        progress_text,
        active,
        throbber_state,
    } = progress;
    if !active || area.width == 0 || area.height == 0 || progress_text.is_empty() {
        return;
    }

    let muted_style = theme.empty_style();
    let spinner = Throbber::default()
        .style(muted_style)
        .throbber_style(muted_style);
    let line = Line::from(vec![
        spinner.to_symbol_span(throbber_state),
        Span::styled(progress_text.to_string(), muted_style),
    ]);

    let line_width = u16::try_from(line.width()).unwrap_or(u16::MAX);
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };

    let row = area.top();
    let last_char_x = (area.left()..area.right()).rev().find(|x| {
        buffer
            .cell((*x, row))
            .is_some_and(|cell| !cell.symbol().trim().is_empty())
    });
    if let Some(last_x) = last_char_x {
        start_x = start_x.max(last_x.saturating_add(3));
    }

    if start_x >= area.right() {
        return;
    }

    let max_width = area.right().saturating_sub(start_x).min(line_width);
    buffer.set_line(start_x, row, &line, max_width);
}
