use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{Edited, Focus};
use crate::types::ConsoleTab;

const PAGE: u16 = 10;

impl<'a> App<'a> {
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return self.quit(),
            KeyCode::Char('c') if ctrl => return self.quit(),
            KeyCode::Char('t') if ctrl => {
                self.tab = self.tab.toggled();
                return;
            }
            KeyCode::F(1) => {
                self.tab = ConsoleTab::Query;
                return;
            }
            KeyCode::F(2) => {
                self.tab = ConsoleTab::Reference;
                return;
            }
            _ => {}
        }

        match self.tab {
            ConsoleTab::Query => self.handle_query_key(key),
            ConsoleTab::Reference => self.handle_reference_key(key),
        }
    }

    fn handle_query_key(&mut self, key: KeyEvent) {
        if is_submit_shortcut(key) {
            self.submit_primary();
            return;
        }

        match key.code {
            KeyCode::Tab => return self.input.focus_next(),
            KeyCode::BackTab => return self.input.focus_prev(),
            KeyCode::PageUp => {
                self.answer_scroll = self.answer_scroll.saturating_sub(PAGE);
                return;
            }
            KeyCode::PageDown => {
                self.answer_scroll = self.answer_scroll.saturating_add(PAGE);
                return;
            }
            _ => {}
        }

        let focus = self.input.focus();
        match focus {
            Focus::Results => match key.code {
                KeyCode::Up => self.select_previous_row(),
                KeyCode::Down => self.select_next_row(),
                KeyCode::Home => self.answer_scroll = 0,
                _ => {}
            },
            Focus::UserCanWait | Focus::ProductionIncident => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) && !self.is_pending() {
                    self.input.toggle_focused();
                }
            }
            Focus::Submit | Focus::Similarity | Focus::Rag => {
                if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter)
                    && let Some(endpoint) = focus.endpoint()
                {
                    self.submit(endpoint);
                }
            }
            Focus::Query | Focus::ApiKey => {
                if self.is_pending() {
                    return;
                }
                if focus == Focus::ApiKey && key.code == KeyCode::Enter {
                    self.input.focus_next();
                    return;
                }
                if self.input.edit(key) == Edited::ApiKey {
                    self.credential_changed();
                }
            }
        }
    }

    fn handle_reference_key(&mut self, key: KeyEvent) {
        self.reference_scroll = match key.code {
            KeyCode::Up => self.reference_scroll.saturating_sub(1),
            KeyCode::Down => self.reference_scroll.saturating_add(1),
            KeyCode::PageUp => self.reference_scroll.saturating_sub(PAGE),
            KeyCode::PageDown => self.reference_scroll.saturating_add(PAGE),
            KeyCode::Home => 0,
            _ => return,
        };
    }
}

/// Ctrl+Enter, Alt+Enter and Ctrl+S fire the primary action.
fn is_submit_shortcut(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER),
        KeyCode::Char('s') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
