use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use tui_textarea::{CursorMove, TextArea};

use cuttlefish_api::{Endpoint, QueryRequest};

use crate::types::{ConsoleVariant, RequestOptions};
use crate::ui::style::Theme;

const MULTI_AGENT_PLACEHOLDER: &str =
    "Enter your JIRA ticket query here... (Ctrl+Enter or Ctrl+S to submit)";
const SEARCH_PLACEHOLDER: &str = "Enter your query here...";
const API_KEY_PLACEHOLDER: &str = "sk-...";
const MASK_CHAR: char = '\u{2022}';

/// Focusable widgets of the query tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    ApiKey,
    Query,
    UserCanWait,
    ProductionIncident,
    Submit,
    Similarity,
    Rag,
    Results,
}

impl Focus {
    /// Tab order for `variant`.
    pub(crate) fn order(variant: ConsoleVariant) -> &'static [Focus] {
        match variant {
            ConsoleVariant::MultiAgent => &[
                Focus::Query,
                Focus::UserCanWait,
                Focus::ProductionIncident,
                Focus::Submit,
                Focus::Results,
            ],
            ConsoleVariant::Search => &[
                Focus::ApiKey,
                Focus::Query,
                Focus::Similarity,
                Focus::Rag,
                Focus::Results,
            ],
        }
    }

    /// Endpoint fired when this widget is a button.
    pub(crate) fn endpoint(self) -> Option<Endpoint> {
        match self {
            Focus::Submit => Some(Endpoint::MultiAgent),
            Focus::Similarity => Some(Endpoint::Similar),
            Focus::Rag => Some(Endpoint::Rag),
            _ => None,
        }
    }
}

/// Which text field an edit touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edited {
    Nothing,
    Query,
    ApiKey,
}

/// Query text, option flags and focus of the query tab.
pub(crate) struct InputPanel<'a> {
    variant: ConsoleVariant,
    query: TextArea<'a>,
    api_key: TextArea<'a>,
    user_can_wait: bool,
    production_incident: bool,
    focus: Focus,
}

impl<'a> InputPanel<'a> {
    pub(crate) fn new(variant: ConsoleVariant, initial_query: &str, options: &RequestOptions) -> Self {
        let mut query = text_area(initial_query);
        query.set_placeholder_text(match variant {
            ConsoleVariant::MultiAgent => MULTI_AGENT_PLACEHOLDER,
            ConsoleVariant::Search => SEARCH_PLACEHOLDER,
        });

        let mut api_key = text_area(&options.api_key);
        api_key.set_placeholder_text(API_KEY_PLACEHOLDER);
        api_key.set_mask_char(MASK_CHAR);

        let focus = match variant {
            ConsoleVariant::Search if options.api_key.is_empty() => Focus::ApiKey,
            _ => Focus::Query,
        };

        Self {
            variant,
            query,
            api_key,
            user_can_wait: options.user_can_wait,
            production_incident: options.production_incident,
            focus,
        }
    }

    pub(crate) fn variant(&self) -> ConsoleVariant {
        self.variant
    }

    /// Raw query text, lines joined with `\n`.
    pub(crate) fn query_text(&self) -> String {
        self.query.lines().join("\n")
    }

    pub(crate) fn api_key(&self) -> String {
        self.api_key.lines().concat()
    }

    pub(crate) fn user_can_wait(&self) -> bool {
        self.user_can_wait
    }

    pub(crate) fn production_incident(&self) -> bool {
        self.production_incident
    }

    pub(crate) fn options(&self) -> RequestOptions {
        RequestOptions {
            user_can_wait: self.user_can_wait,
            production_incident: self.production_incident,
            api_key: self.api_key(),
        }
    }

    /// Whether the current input may be submitted.
    pub(crate) fn can_submit(&self) -> bool {
        let has_query = !self.query_text().trim().is_empty();
        match self.variant {
            ConsoleVariant::MultiAgent => has_query,
            ConsoleVariant::Search => has_query && !self.api_key().is_empty(),
        }
    }

    /// Request body for `endpoint`, or `None` when the input is not
    /// submittable.
    pub(crate) fn request_for(&self, endpoint: Endpoint) -> Option<QueryRequest> {
        self.can_submit()
            .then(|| self.options().request_for(endpoint, &self.query_text()))
    }

    pub(crate) fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn set_focus(&mut self, focus: Focus) {
        if Focus::order(self.variant).contains(&focus) {
            self.focus = focus;
        }
    }

    pub(crate) fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub(crate) fn focus_prev(&mut self) {
        let len = Focus::order(self.variant).len();
        self.step_focus(len - 1);
    }

    fn step_focus(&mut self, step: usize) {
        let order = Focus::order(self.variant);
        let index = order
            .iter()
            .position(|focus| *focus == self.focus)
            .unwrap_or(0);
        self.focus = order[(index + step) % order.len()];
    }

    /// Flip the focused toggle. Returns `false` when no toggle is focused.
    pub(crate) fn toggle_focused(&mut self) -> bool {
        match self.focus {
            Focus::UserCanWait => self.user_can_wait = !self.user_can_wait,
            Focus::ProductionIncident => self.production_incident = !self.production_incident,
            _ => return false,
        }
        true
    }

    /// Forward `key` to the focused text field.
    pub(crate) fn edit(&mut self, key: KeyEvent) -> Edited {
        match self.focus {
            Focus::Query => {
                if self.query.input(key) {
                    Edited::Query
                } else {
                    Edited::Nothing
                }
            }
            Focus::ApiKey => {
                // Single-line field.
                if key.code == KeyCode::Enter {
                    return Edited::Nothing;
                }
                if self.api_key.input(key) {
                    Edited::ApiKey
                } else {
                    Edited::Nothing
                }
            }
            _ => Edited::Nothing,
        }
    }

    pub(crate) fn query_area(&self) -> &TextArea<'a> {
        &self.query
    }

    pub(crate) fn api_key_area(&self) -> &TextArea<'a> {
        &self.api_key
    }

    /// Refresh borders and cursor styles for the current focus.
    pub(crate) fn apply_styles(&mut self, theme: &Theme, disabled: bool) {
        let query_focused = self.focus == Focus::Query && !disabled;
        style_text_area(&mut self.query, "Query", query_focused, disabled, theme);
        let key_focused = self.focus == Focus::ApiKey && !disabled;
        style_text_area(&mut self.api_key, "OpenAI API Key", key_focused, disabled, theme);
    }
}

fn text_area<'a>(text: &str) -> TextArea<'a> {
    let mut area = TextArea::new(text.lines().map(str::to_string).collect());
    area.move_cursor(CursorMove::Bottom);
    area.move_cursor(CursorMove::End);
    area
}

fn style_text_area(area: &mut TextArea<'_>, title: &str, focused: bool, disabled: bool, theme: &Theme) {
    let border = if focused {
        theme.focus_style()
    } else {
        theme.border_style()
    };
    area.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border)
            .title(title.to_string()),
    );
    area.set_style(if disabled {
        theme.disabled_style()
    } else {
        Style::default()
    });
    area.set_placeholder_style(theme.empty_style());
    area.set_cursor_line_style(Style::default());
    area.set_cursor_style(if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    });
}
