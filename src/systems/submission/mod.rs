//! Background worker that performs backend requests off the UI thread.

mod commands;
mod worker;

pub(crate) use commands::{SubmissionCommand, SubmissionResult};
pub(crate) use worker::spawn;
