use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::LightCyan),
    empty: Style::new().fg(Color::DarkGray),
    highlight: Style::new()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(248, 113, 113)),
    answer: Style::new().fg(Color::Rgb(134, 239, 172)),
    disabled: Style::new()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM),
    code: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(51, 65, 85)),
};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(30, 41, 59))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(219, 234, 254))
        .fg(Color::Rgb(29, 78, 216)),
    prompt: Style::new().fg(Color::Rgb(37, 99, 235)),
    empty: Style::new().fg(Color::Gray),
    highlight: Style::new()
        .fg(Color::Rgb(30, 64, 175))
        .add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(185, 28, 28)),
    answer: Style::new().fg(Color::Rgb(21, 128, 61)),
    disabled: Style::new()
        .fg(Color::Gray)
        .add_modifier(Modifier::DIM),
    code: Style::new()
        .fg(Color::Rgb(31, 41, 55))
        .bg(Color::Rgb(243, 244, 246)),
};

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition::new("slate", SLATE).with_aliases(&["dark", "default"]),
    ThemeDefinition::new("light", LIGHT),
];
