use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{
    self, Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use ratatui::crossterm::{execute, terminal};

use cuttlefish_api::BackendClient;

use super::App;
use super::state::{ConsoleOptions, SubmissionController};

/// Open the console described by `options` and run it until the user quits.
pub fn run(options: ConsoleOptions) -> Result<()> {
    let client = BackendClient::new(options.base_url.clone())
        .with_context(|| format!("invalid backend address `{}`", options.base_url))?;
    let submission = SubmissionController::spawn(client)?;
    tracing::info!(
        variant = %options.variant,
        base_url = %options.base_url,
        "starting console"
    );
    let mut app = App::new(options, submission);
    app.run()
}

impl<'a> App<'a> {
    /// Pump the terminal event loop until the user exits.
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        let enhanced_keys = push_keyboard_enhancement();

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<()> = 'event_loop: loop {
            self.pump_submission();
            if self.is_pending() {
                self.throbber_state.calc_next();
            }

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                {
                    self.handle_key(key);
                }
                if self.should_quit() {
                    break;
                }
            }

            if self.should_quit() {
                break Ok(());
            }

            thread::sleep(Duration::from_millis(16));
        };

        if enhanced_keys {
            let _ = execute!(stdout(), PopKeyboardEnhancementFlags);
        }
        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }
}

/// Ask the terminal to report modifier+Enter distinctly. Returns whether the
/// flags were pushed.
fn push_keyboard_enhancement() -> bool {
    if !matches!(terminal::supports_keyboard_enhancement(), Ok(true)) {
        return false;
    }
    let flags = KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES;
    match execute!(stdout(), PushKeyboardEnhancementFlags(flags)) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!("keyboard enhancement unavailable: {err}");
            false
        }
    }
}
