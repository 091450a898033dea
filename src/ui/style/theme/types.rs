use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub highlight: Style,
    /// Error panel text and border.
    pub error: Style,
    /// Answer panel border and title.
    pub answer: Style,
    /// Widgets that cannot be used right now.
    pub disabled: Style,
    /// Inline code spans in the reference document.
    pub code: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn highlight_style(&self) -> Style {
        self.highlight
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn answer_style(&self) -> Style {
        self.answer
    }

    #[must_use]
    pub fn disabled_style(&self) -> Style {
        self.disabled
    }

    #[must_use]
    pub fn code_style(&self) -> Style {
        self.code
    }

    #[must_use]
    pub fn header_fg(&self) -> Color {
        self.header.fg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn header_bg(&self) -> Color {
        self.header.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn row_highlight_bg(&self) -> Color {
        self.row_highlight.bg.unwrap_or(Color::Reset)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::new().fg(self.header_fg())
    }

    /// Border of the widget that currently has keyboard focus.
    #[must_use]
    pub fn focus_style(&self) -> Style {
        self.prompt.add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn tab_inactive_style(&self) -> Style {
        Style::new()
            .fg(self.header_fg())
            .bg(self.row_highlight_bg())
    }

    #[must_use]
    pub fn tab_highlight_style(&self) -> Style {
        Style::new().bg(self.header_bg())
    }
}

/// Definition for a built-in theme bundled with the application.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

impl ThemeDefinition {
    pub const fn new(name: &'static str, theme: Theme) -> Self {
        Self {
            name,
            theme,
            aliases: &[],
        }
    }

    pub const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    /// Whether `name` refers to this theme, ignoring case and separators.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let wanted = normalize_name(name);
        normalize_name(self.name) == wanted
            || self.aliases.iter().any(|alias| normalize_name(alias) == wanted)
    }
}

pub(super) fn normalize_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}
