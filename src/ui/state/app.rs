//! Core state container for the console.
//!
//! [`App`] owns the input panel, the submission controller and the view of
//! the last settled response. Only the UI thread touches it.

use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use cuttlefish_api::Endpoint;

use super::{InputPanel, SubmissionController, SubmissionState};
use crate::credentials::CredentialStore;
use crate::types::{ConsoleTab, ConsoleVariant, RequestOptions};
use crate::ui::style::Theme;
use crate::ui::view::ResultView;

/// Everything needed to open the console.
#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub variant: ConsoleVariant,
    pub base_url: String,
    pub theme: Theme,
    pub start_tab: ConsoleTab,
    pub initial_query: String,
    /// Initial flags; `api_key` is ignored in favour of the stored credential.
    pub options: RequestOptions,
    /// Credential for this run only; never written to the store.
    pub api_key_override: Option<String>,
    pub credentials: CredentialStore,
}

pub struct App<'a> {
    pub(crate) variant: ConsoleVariant,
    pub(crate) tab: ConsoleTab,
    pub(crate) theme: Theme,
    pub(crate) base_url: String,
    pub(crate) input: InputPanel<'a>,
    pub(crate) submission: SubmissionController,
    pub(crate) view: Option<ResultView>,
    pub(crate) table_state: TableState,
    pub(crate) answer_scroll: u16,
    pub(crate) reference_scroll: u16,
    pub(crate) throbber_state: ThrobberState,
    credentials: CredentialStore,
    persist_credential: bool,
    should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(options: ConsoleOptions, submission: SubmissionController) -> Self {
        let ConsoleOptions {
            variant,
            base_url,
            theme,
            start_tab,
            initial_query,
            options,
            api_key_override,
            credentials,
        } = options;

        let persist_credential = api_key_override.is_none();
        let api_key = match variant {
            ConsoleVariant::Search => api_key_override.unwrap_or_else(|| credentials.load()),
            ConsoleVariant::MultiAgent => String::new(),
        };
        let options = RequestOptions { api_key, ..options };

        Self {
            variant,
            tab: start_tab,
            theme,
            base_url,
            input: InputPanel::new(variant, &initial_query, &options),
            submission,
            view: None,
            table_state: TableState::default(),
            answer_scroll: 0,
            reference_scroll: 0,
            throbber_state: ThrobberState::default(),
            credentials,
            persist_credential,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.submission.is_pending()
    }

    /// Error message of the last submission, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self.submission.state() {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Submit the current input to `endpoint`. Returns `true` when a request
    /// was dispatched.
    pub(crate) fn submit(&mut self, endpoint: Endpoint) -> bool {
        if self.submission.is_pending() {
            return false;
        }
        let Some(request) = self.input.request_for(endpoint) else {
            return false;
        };

        self.view = None;
        self.table_state.select(None);
        self.answer_scroll = 0;
        self.submission.submit(endpoint, request).is_some()
    }

    /// Fire the keyboard shortcut action of the current console.
    pub(crate) fn submit_primary(&mut self) -> bool {
        self.submit(self.variant.primary_endpoint())
    }

    /// Apply finished submissions to the view.
    pub(crate) fn pump_submission(&mut self) {
        if !self.submission.pump() {
            return;
        }

        self.view = match self.submission.state() {
            SubmissionState::Succeeded(response) => Some(ResultView::from_response(response)),
            _ => None,
        };
        let has_rows = self.view.as_ref().is_some_and(|view| !view.rows().is_empty());
        self.table_state.select(has_rows.then_some(0));
        self.answer_scroll = 0;
    }

    pub(crate) fn credential_changed(&mut self) {
        if self.persist_credential {
            self.credentials.save(&self.input.api_key());
        }
    }

    pub(crate) fn select_next_row(&mut self) {
        let len = self.view.as_ref().map_or(0, |view| view.rows().len());
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(selected) if selected + 1 < len => selected + 1,
            Some(selected) => selected,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub(crate) fn select_previous_row(&mut self) {
        if let Some(selected) = self.table_state.selected()
            && selected > 0
        {
            self.table_state.select(Some(selected - 1));
        }
    }

    /// Full description of the selected row, for the details strip.
    pub(crate) fn selected_description(&self) -> Option<&str> {
        let view = self.view.as_ref()?;
        let row = view.rows().get(self.table_state.selected()?)?;
        Some(row.description.as_str()).filter(|text| !text.is_empty())
    }
}
