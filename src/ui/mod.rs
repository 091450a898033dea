//! Interactive terminal console.
//!
//! [`run`] opens the full-screen UI. The submodules split it the way the event
//! loop uses it: key handling, rendering, state, widgets and the display
//! model shared with the one-shot printer.

mod actions;
mod components;
mod render;
mod runtime;
mod state;
pub mod style;
pub mod view;

pub use runtime::run;
pub use state::{App, ConsoleOptions, SubmissionController, SubmissionState};
