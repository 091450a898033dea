mod app;
mod input;
mod submission;

pub use app::{App, ConsoleOptions};
pub(crate) use input::{Edited, Focus, InputPanel};
pub use submission::{SubmissionController, SubmissionState};
