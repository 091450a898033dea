use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::App;
use super::components::{
    DETAILS_HEIGHT, HeaderContext, METADATA_WIDTH, ProgressState, TableSpec, hint_line,
    input_height, render_answer, render_details, render_error, render_header_with_tabs,
    render_input_panel, render_match_table, render_metadata, render_notice, render_reference,
};
use super::state::Focus;
use super::view::ResultView;
use crate::types::{ConsoleTab, ConsoleVariant};

const PROGRESS_TEXT: &str = "Processing...";
const ERROR_HEIGHT: u16 = 4;

fn title(variant: ConsoleVariant) -> &'static str {
    match variant {
        ConsoleVariant::MultiAgent => "Cuttlefish3",
        ConsoleVariant::Search => "Cuttlefish Bug Similarity Search and RAG",
    }
}

fn subtitle(variant: ConsoleVariant) -> &'static str {
    match variant {
        ConsoleVariant::MultiAgent => "Multi-Agent RAG System for Intelligent JIRA Ticket Retrieval",
        ConsoleVariant::Search => "Similarity search and retrieval-augmented answers over bug reports",
    }
}

fn idle_notice(variant: ConsoleVariant) -> &'static str {
    match variant {
        ConsoleVariant::MultiAgent => "Enter a query and press Ctrl+Enter to search",
        ConsoleVariant::Search => "Enter a query and choose Similarity or RAG",
    }
}

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let pending = self.is_pending();
        render_header_with_tabs(
            frame,
            HeaderContext {
                title: title(self.variant),
                tab: self.tab,
                area: layout[0],
                theme: &self.theme,
            },
            ProgressState {
                progress_text: PROGRESS_TEXT,
                active: pending,
                throbber_state: &self.throbber_state,
            },
        );

        match self.tab {
            ConsoleTab::Query => self.draw_query_tab(frame, layout[1]),
            ConsoleTab::Reference => {
                self.reference_scroll =
                    render_reference(frame, layout[1], self.reference_scroll, &self.theme);
            }
        }

        let hints = Paragraph::new(hint_line(self.tab, self.variant, &self.theme));
        frame.render_widget(hints, layout[2]);
    }

    fn draw_query_tab(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(input_height(self.variant)),
                Constraint::Min(3),
            ])
            .split(area);

        let subtitle_line = Line::from(vec![
            Span::styled(subtitle(self.variant), self.theme.empty_style()),
            Span::styled(format!("  {}", self.base_url), self.theme.disabled_style()),
        ]);
        frame.render_widget(Paragraph::new(subtitle_line), layout[0]);

        let pending = self.is_pending();
        self.input.apply_styles(&self.theme, pending);
        render_input_panel(frame, layout[1], &self.input, &self.theme, pending);

        let results = layout[2];
        if let Some(message) = self.error() {
            let height = ERROR_HEIGHT.min(results.height);
            let error_area = Rect { height, ..results };
            render_error(frame, error_area, message, &self.theme);
        } else if pending {
            render_notice(frame, results, PROGRESS_TEXT, &self.theme);
        } else if self.view.is_some() {
            self.draw_view(frame, results);
        } else {
            render_notice(frame, results, idle_notice(self.variant), &self.theme);
        }
    }

    fn draw_view(&mut self, frame: &mut Frame, area: Rect) {
        let results_focused = self.input.focus() == Focus::Results;
        let details = results_focused
            .then(|| self.selected_description().map(str::to_string))
            .flatten();
        let Some(view) = self.view.as_ref() else {
            return;
        };

        if let ResultView::Raw(text) = view {
            self.answer_scroll =
                render_answer(frame, area, "Response", text, self.answer_scroll, &self.theme);
            return;
        }

        let mut rest = area;
        if let Some(answer) = view.answer() {
            let split = Layout::vertical([Constraint::Percentage(45), Constraint::Min(3)]).split(area);
            self.answer_scroll =
                render_answer(frame, split[0], "Answer", answer, self.answer_scroll, &self.theme);
            rest = split[1];
        }

        let table = view.table();
        if let Some(metadata) = view.metadata() {
            if table.is_some() {
                let split = Layout::horizontal([Constraint::Min(20), Constraint::Length(METADATA_WIDTH)])
                    .split(rest);
                render_metadata(frame, split[1], metadata, &self.theme);
                rest = split[0];
            } else {
                render_metadata(frame, rest, metadata, &self.theme);
                return;
            }
        }

        let Some((title, layout)) = table else {
            return;
        };
        let mut table_area = rest;
        if let Some(description) = details.as_deref()
            && rest.height > DETAILS_HEIGHT + 3
        {
            let split = Layout::vertical([Constraint::Min(3), Constraint::Length(DETAILS_HEIGHT)])
                .split(rest);
            render_details(frame, split[1], description, &self.theme);
            table_area = split[0];
        }
        render_match_table(
            frame,
            table_area,
            TableSpec {
                title: &title,
                layout,
                rows: view.rows(),
            },
            &mut self.table_state,
            &self.theme,
            results_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Sender};

    use cuttlefish_api::{QueryResponse, RequestError};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use serde_json::json;

    use super::*;
    use crate::credentials::CredentialStore;
    use crate::systems::submission::{SubmissionCommand, SubmissionResult};
    use crate::types::RequestOptions;
    use crate::ui::state::{ConsoleOptions, SubmissionController};
    use crate::ui::style::Theme;

    fn app(
        variant: ConsoleVariant,
        query: &str,
    ) -> (
        App<'static>,
        Sender<SubmissionResult>,
        mpsc::Receiver<SubmissionCommand>,
    ) {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        let options = ConsoleOptions {
            variant,
            base_url: variant.default_base_url().to_string(),
            theme: Theme::default(),
            start_tab: ConsoleTab::Query,
            initial_query: query.to_string(),
            options: RequestOptions::default(),
            api_key_override: Some("sk-test".into()),
            credentials: CredentialStore::disabled(),
        };
        let app = App::new(options, SubmissionController::new(command_tx, result_rx));
        (app, result_tx, command_rx)
    }

    fn settle(
        app: &mut App<'_>,
        commands: &mpsc::Receiver<SubmissionCommand>,
        results: &Sender<SubmissionResult>,
        outcome: Result<QueryResponse, RequestError>,
    ) {
        assert!(app.submit_primary());
        let Ok(SubmissionCommand::Submit { id, .. }) = commands.try_recv() else {
            panic!("expected submit");
        };
        results.send(SubmissionResult { id, outcome }).unwrap();
        app.pump_submission();
    }

    fn screen(app: &mut App<'_>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn idle_console_shows_title_and_controls() {
        let (mut app, _results, _commands) = app(ConsoleVariant::MultiAgent, "");
        let screen = screen(&mut app, 100, 24);
        assert!(screen.contains("Cuttlefish3"));
        assert!(screen.contains("Multi-Agent RAG System"));
        assert!(screen.contains("[ Search JIRA Tickets ]"));
        assert!(screen.contains("Enter a query and press Ctrl+Enter"));
    }

    #[test]
    fn pending_submission_shows_progress() {
        let (mut app, _results, _commands) = app(ConsoleVariant::MultiAgent, "heap");
        assert!(app.submit_primary());
        let screen = screen(&mut app, 100, 24);
        assert!(screen.contains("[ Processing... ]"));
    }

    #[test]
    fn multi_agent_answer_renders_every_panel() {
        let (mut app, results, commands) = app(ConsoleVariant::MultiAgent, "eclipse heap");
        let response = QueryResponse::from_value(json!({
            "answer": "Raise -Xmx in eclipse.ini.",
            "context": [{ "score": 0.9, "payload": { "key": "JBIDE-1", "title": "OOM on start" } }],
            "metadata": {
                "agent_used": "BM25Agent",
                "processing_time": 1.234,
                "query_type": "troubleshooting",
                "user_flags": { "user_can_wait": true, "production_incident": false }
            }
        }));
        settle(&mut app, &commands, &results, Ok(response));

        let screen = screen(&mut app, 120, 40);
        assert!(screen.contains("Answer"));
        assert!(screen.contains("Raise -Xmx in eclipse.ini."));
        assert!(screen.contains("Related JIRA Tickets (1)"));
        assert!(screen.contains("JBIDE-1"));
        assert!(screen.contains("Processing Time: 1.23s"));
    }

    #[test]
    fn similarity_results_render_scores() {
        let (mut app, results, commands) = app(ConsoleVariant::Search, "region split");
        let response = QueryResponse::from_value(json!({
            "results": [{ "id": 7, "score": 0.8421374, "payload": { "key": "HBASE-7", "title": "Split fails" } }]
        }));
        settle(&mut app, &commands, &results, Ok(response));

        let screen = screen(&mut app, 120, 30);
        assert!(screen.contains("Results"));
        assert!(screen.contains("0.8421"));
        assert!(screen.contains("HBASE-7"));
    }

    #[test]
    fn backend_failure_shows_error_panel() {
        let (mut app, results, commands) = app(ConsoleVariant::MultiAgent, "anything");
        let error = RequestError::from_backend_body(
            500,
            br#"{"detail":"index unavailable"}"#,
            cuttlefish_api::Endpoint::MultiAgent,
        );
        settle(&mut app, &commands, &results, Err(error));

        let screen = screen(&mut app, 100, 24);
        assert!(screen.contains("Error"));
        assert!(screen.contains("index unavailable"));
    }

    #[test]
    fn unrecognized_body_is_dumped() {
        let (mut app, results, commands) = app(ConsoleVariant::MultiAgent, "anything");
        settle(
            &mut app,
            &commands,
            &results,
            Ok(QueryResponse::from_value(json!({ "status": "queued" }))),
        );

        let screen = screen(&mut app, 100, 24);
        assert!(screen.contains("Response"));
        assert!(screen.contains("\"status\": \"queued\""));
    }

    #[test]
    fn focused_results_show_the_full_description() {
        let (mut app, results, commands) = app(ConsoleVariant::Search, "region split");
        let response = QueryResponse::from_value(json!({
            "answer": "Check the split policy.",
            "context": [{ "payload": { "key": "HBASE-9", "description": "Splits stall when the WAL is full" } }]
        }));
        settle(&mut app, &commands, &results, Ok(response));
        app.input.set_focus(Focus::Results);

        let screen = screen(&mut app, 120, 40);
        assert!(screen.contains("Bugs"));
        assert!(screen.contains("Description"));
        assert!(screen.contains("Splits stall when the WAL is full"));
    }

    #[test]
    fn reference_tab_renders_document() {
        let (mut app, _results, _commands) = app(ConsoleVariant::MultiAgent, "");
        app.tab = ConsoleTab::Reference;
        let screen = screen(&mut app, 100, 24);
        assert!(screen.contains("Sample questions organized by category"));
        assert!(!screen.contains("[ Search JIRA Tickets ]"));
    }
}
