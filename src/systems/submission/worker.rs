use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::{Context, Result};
use cuttlefish_api::BackendClient;
use tokio::runtime::{Builder, Runtime};

use super::commands::{SubmissionCommand, SubmissionResult};

/// Launches the background submission thread and returns communication channels.
///
/// The thread owns a single-threaded runtime and handles one command at a
/// time. It exits on [`SubmissionCommand::Shutdown`] or when the UI drops its
/// sender.
pub(crate) fn spawn(
    client: BackendClient,
) -> Result<(Sender<SubmissionCommand>, Receiver<SubmissionResult>)> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build the request runtime")?;

    let (command_tx, command_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    thread::Builder::new()
        .name("cuttlefish-submit".into())
        .spawn(move || worker_loop(&runtime, &client, command_rx, result_tx))
        .context("failed to spawn the submission worker")?;

    Ok((command_tx, result_rx))
}

fn worker_loop(
    runtime: &Runtime,
    client: &BackendClient,
    command_rx: Receiver<SubmissionCommand>,
    result_tx: Sender<SubmissionResult>,
) {
    while let Ok(command) = command_rx.recv() {
        if !handle_command(runtime, client, &result_tx, command) {
            break;
        }
    }
    tracing::debug!("submission worker stopped");
}

fn handle_command(
    runtime: &Runtime,
    client: &BackendClient,
    result_tx: &Sender<SubmissionResult>,
    command: SubmissionCommand,
) -> bool {
    match command {
        SubmissionCommand::Submit {
            id,
            endpoint,
            request,
        } => {
            tracing::info!(id, %endpoint, "submitting query");
            let outcome = runtime.block_on(client.submit(endpoint, &request));
            match &outcome {
                Ok(response) => tracing::info!(id, kind = response.kind(), "query answered"),
                Err(err) => tracing::warn!(id, "query failed: {err}"),
            }
            result_tx.send(SubmissionResult { id, outcome }).is_ok()
        }
        SubmissionCommand::Shutdown => false,
    }
}
