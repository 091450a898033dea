use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, BorderType, Borders, Cell, HighlightSpacing, Paragraph, Row, Scrollbar,
    ScrollbarOrientation, ScrollbarState, Table, TableState,
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;
use crate::ui::view::{MatchRow, TableLayout};

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const ELLIPSIS: &str = "…";
const HEADER_AND_DIVIDER_HEIGHT: u16 = 2;

/// A titled table of matches.
pub(crate) struct TableSpec<'a> {
    pub title: &'a str,
    pub layout: TableLayout,
    pub rows: &'a [MatchRow],
}

/// Width of the score column: the widest formatted score, never narrower than
/// its header.
fn score_column_width(rows: &[MatchRow]) -> u16 {
    let widest = rows
        .iter()
        .filter_map(|row| row.score.as_deref())
        .map(UnicodeWidthStr::width)
        .fold(TableLayout::Scored.headers()[0].width(), usize::max);
    u16::try_from(widest).unwrap_or(u16::MAX)
}

fn column_constraints(layout: TableLayout, rows: &[MatchRow]) -> Vec<Constraint> {
    match layout {
        TableLayout::Scored => vec![
            Constraint::Length(score_column_width(rows)),
            Constraint::Length(14),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
        TableLayout::Described => vec![
            Constraint::Length(14),
            Constraint::Percentage(35),
            Constraint::Min(10),
        ],
        TableLayout::Compact => vec![Constraint::Length(14), Constraint::Min(10)],
    }
}

/// Render `spec` inside a rounded, titled block.
pub(crate) fn render_match_table(
    frame: &mut Frame,
    area: Rect,
    spec: TableSpec<'_>,
    table_state: &mut TableState,
    theme: &Theme,
    focused: bool,
) {
    let border_style = if focused {
        theme.focus_style()
    } else {
        theme.border_style()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", spec.title),
            theme.header_style().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let constraints = column_constraints(spec.layout, spec.rows);
    let highlight_spacing = HighlightSpacing::WhenSelected;
    let selection_width = selection_column_width(table_state, &highlight_spacing);
    let widths = resolve_column_widths(inner, &constraints, selection_width);

    let header = Row::new(spec.layout.headers().iter().copied().map(Cell::from))
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);
    let rows = spec
        .rows
        .iter()
        .map(|row| build_row(spec.layout, row, &widths, theme));

    let table = Table::new(rows, constraints)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(highlight_spacing)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, inner, table_state);
    render_header_separator(frame, inner, theme);

    if spec.rows.is_empty() {
        render_empty_message(frame, inner, theme);
        return;
    }

    let visible = usize::from(inner.height.saturating_sub(HEADER_AND_DIVIDER_HEIGHT));
    if spec.rows.len() > visible {
        let mut scrollbar_state = ScrollbarState::new(spec.rows.len())
            .position(table_state.selected().unwrap_or(0));
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .style(theme.border_style());
        frame.render_stateful_widget(
            scrollbar,
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

fn build_row<'a>(layout: TableLayout, row: &MatchRow, widths: &[u16], theme: &Theme) -> Row<'a> {
    let cells = layout
        .cells(row)
        .into_iter()
        .enumerate()
        .map(|(index, text)| {
            let width = widths.get(index).copied().map(usize::from);
            let text = single_line(&text);
            let text = match width {
                Some(width) => truncate_with_ellipsis(&text, width),
                None => text,
            };
            // Scores are the only numeric column.
            if layout == TableLayout::Scored && index == 0 {
                Cell::from(Line::from(text).alignment(Alignment::Right))
                    .style(theme.highlight_style())
            } else {
                Cell::from(text)
            }
        })
        .collect::<Vec<_>>();
    Row::new(cells)
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cut `text` to `max_width` columns, ending in an ellipsis when shortened.
pub(crate) fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let (head, _) = text.unicode_truncate(max_width - ELLIPSIS.width());
    format!("{head}{ELLIPSIS}")
}

fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height <= 1 {
        return;
    }
    let width = usize::from(area.width);
    let sep_rect = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let base_style = Style::new().bg(theme.header_bg());
    let line = if width <= 2 {
        Line::from(Span::styled(" ".repeat(width), base_style))
    } else {
        Line::from(vec![
            Span::styled(" ", base_style),
            Span::styled("─".repeat(width - 2), base_style.fg(theme.header_fg())),
            Span::styled(" ", base_style),
        ])
    };
    frame.render_widget(Paragraph::new(line), sep_rect);
}

fn render_empty_message(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height <= HEADER_AND_DIVIDER_HEIGHT {
        return;
    }
    let message_area = Rect {
        y: area.y + HEADER_AND_DIVIDER_HEIGHT,
        height: area.height - HEADER_AND_DIVIDER_HEIGHT,
        ..area
    };
    let empty = Paragraph::new("No results")
        .alignment(Alignment::Center)
        .style(theme.empty_style());
    frame.render_widget(empty, message_area);
}

fn selection_column_width(state: &TableState, spacing: &HighlightSpacing) -> u16 {
    let should_add = match spacing {
        HighlightSpacing::Always => true,
        HighlightSpacing::WhenSelected => state.selected().is_some(),
        HighlightSpacing::Never => false,
    };
    if should_add {
        u16::try_from(HIGHLIGHT_SYMBOL.width()).unwrap_or(0)
    } else {
        0
    }
}

fn resolve_column_widths(area: Rect, constraints: &[Constraint], selection_width: u16) -> Vec<u16> {
    let available = Rect {
        x: 0,
        y: 0,
        width: area.width.saturating_sub(selection_width),
        height: 1,
    };
    Layout::horizontal(constraints.iter().copied())
        .spacing(TABLE_COLUMN_SPACING)
        .split(available)
        .iter()
        .map(|column| column.width)
        .collect()
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn row(score: Option<&str>, key: &str, title: &str, description: &str) -> MatchRow {
        MatchRow {
            score: score.map(str::to_string),
            key: key.into(),
            title: title.into(),
            description: description.into(),
        }
    }

    fn render(spec: TableSpec<'_>, state: &mut TableState, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_match_table(frame, frame.area(), spec, state, &theme, false))
            .unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn truncation_adds_an_ellipsis() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("a longer description", 8), "a longe…");
        assert_eq!(truncate_with_ellipsis("anything", 0), "");
    }

    #[test]
    fn truncation_respects_wide_characters() {
        let cut = truncate_with_ellipsis("日本語のテキスト", 7);
        assert!(cut.width() <= 7);
        assert!(cut.ends_with(ELLIPSIS));
    }

    #[test]
    fn cells_are_flattened_to_one_line() {
        assert_eq!(single_line("first\n  second\tthird"), "first second third");
    }

    #[test]
    fn scored_table_shows_headers_and_scores() {
        let rows = vec![row(Some("0.8421"), "HBASE-1", "Split fails", "Region split stalls")];
        let mut state = TableState::default().with_selected(Some(0));
        let screen = render(
            TableSpec {
                title: "Results",
                layout: TableLayout::Scored,
                rows: &rows,
            },
            &mut state,
            80,
            6,
        );
        assert!(screen.contains("Results"));
        assert!(screen.contains("Score"));
        assert!(screen.contains("Description"));
        assert!(screen.contains("0.8421"));
        assert!(screen.contains("HBASE-1"));
        assert!(screen.contains(HIGHLIGHT_SYMBOL.trim()));
    }

    #[test]
    fn scores_outside_the_unit_range_are_shown_in_full() {
        let rows = vec![
            row(Some("-0.0500"), "K-1", "Negative", "Cosine below zero"),
            row(Some("12.3456"), "K-2", "Large", "Dot product score"),
        ];
        let mut state = TableState::default().with_selected(Some(0));
        let screen = render(
            TableSpec {
                title: "Results",
                layout: TableLayout::Scored,
                rows: &rows,
            },
            &mut state,
            80,
            7,
        );
        assert!(screen.contains("-0.0500"));
        assert!(screen.contains("12.3456"));
    }

    #[test]
    fn score_column_is_at_least_as_wide_as_its_header() {
        assert_eq!(score_column_width(&[]), 5);
        assert_eq!(score_column_width(&[row(Some("0.8421"), "K", "", "")]), 6);
        assert_eq!(score_column_width(&[row(Some("-123.4567"), "K", "", "")]), 9);
    }

    #[test]
    fn long_descriptions_are_cut_to_the_column() {
        let description = "word ".repeat(40);
        let rows = vec![row(None, "JBIDE-7", "OOM", &description)];
        let mut state = TableState::default();
        let screen = render(
            TableSpec {
                title: "Bugs",
                layout: TableLayout::Described,
                rows: &rows,
            },
            &mut state,
            60,
            6,
        );
        assert!(screen.contains(ELLIPSIS));
    }

    #[test]
    fn empty_table_says_so() {
        let mut state = TableState::default();
        let screen = render(
            TableSpec {
                title: "Results",
                layout: TableLayout::Scored,
                rows: &[],
            },
            &mut state,
            60,
            6,
        );
        assert!(screen.contains("No results"));
    }

    #[test]
    fn selection_column_only_counts_when_selected() {
        let spacing = HighlightSpacing::WhenSelected;
        assert_eq!(selection_column_width(&TableState::default(), &spacing), 0);
        let selected = TableState::default().with_selected(Some(0));
        assert_eq!(selection_column_width(&selected, &spacing), 2);
    }
}
