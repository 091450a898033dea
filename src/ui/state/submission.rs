use std::sync::mpsc::{Receiver, RecvError, Sender, TryRecvError};

use cuttlefish_api::error::GENERIC_FAILURE;
use cuttlefish_api::{BackendClient, Endpoint, QueryRequest, QueryResponse};

use crate::systems::submission::{self, SubmissionCommand, SubmissionResult};

/// Lifecycle of the current submission. Exactly one state is live.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    Pending { id: u64, endpoint: Endpoint },
    Succeeded(QueryResponse),
    /// Message for the error panel.
    Failed(String),
}

/// Owns the request lifecycle and talks to the submission worker.
///
/// Every submission gets a fresh id; outcomes carrying any other id are
/// dropped, so a late answer can never overwrite a newer one.
pub struct SubmissionController {
    tx: Sender<SubmissionCommand>,
    rx: Receiver<SubmissionResult>,
    next_id: u64,
    state: SubmissionState,
}

impl SubmissionController {
    /// Start a worker bound to `client`.
    pub fn spawn(client: BackendClient) -> anyhow::Result<Self> {
        let (tx, rx) = submission::spawn(client)?;
        Ok(Self::new(tx, rx))
    }

    pub(crate) fn new(tx: Sender<SubmissionCommand>, rx: Receiver<SubmissionResult>) -> Self {
        Self {
            tx,
            rx,
            next_id: 0,
            state: SubmissionState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, SubmissionState::Pending { .. })
    }

    /// Dispatch `request`, returning its id, or `None` while another one is
    /// still pending.
    pub fn submit(&mut self, endpoint: Endpoint, request: QueryRequest) -> Option<u64> {
        if self.is_pending() {
            tracing::debug!(%endpoint, "submission rejected while another is pending");
            return None;
        }

        self.next_id = self.next_id.wrapping_add(1);
        let id = self.next_id;
        self.state = SubmissionState::Pending { id, endpoint };

        let command = SubmissionCommand::Submit {
            id,
            endpoint,
            request,
        };
        if self.tx.send(command).is_err() {
            tracing::warn!(id, "submission worker is gone");
            self.state = SubmissionState::Failed(GENERIC_FAILURE.to_string());
        }
        Some(id)
    }

    /// Apply every finished outcome. Returns `true` when the state changed.
    pub fn pump(&mut self) -> bool {
        let mut changed = false;
        loop {
            match self.rx.try_recv() {
                Ok(result) => changed |= self.apply(result),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    changed |= self.fail_if_pending();
                    break;
                }
            }
        }
        changed
    }

    /// Block until the current submission settles.
    pub fn wait(&mut self) -> &SubmissionState {
        while self.is_pending() {
            match self.rx.recv() {
                Ok(result) => {
                    self.apply(result);
                }
                Err(RecvError) => {
                    self.fail_if_pending();
                }
            }
        }
        &self.state
    }

    pub(crate) fn shutdown(&self) {
        let _ = self.tx.send(SubmissionCommand::Shutdown);
    }

    fn matches_latest(&self, result_id: u64) -> bool {
        matches!(self.state, SubmissionState::Pending { id, .. } if id == result_id)
    }

    fn apply(&mut self, result: SubmissionResult) -> bool {
        if !self.matches_latest(result.id) {
            tracing::debug!(id = result.id, "discarding stale submission outcome");
            return false;
        }

        self.state = match result.outcome {
            Ok(response) => SubmissionState::Succeeded(response),
            Err(err) => SubmissionState::Failed(err.user_message().to_string()),
        };
        true
    }

    fn fail_if_pending(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        tracing::warn!("submission worker stopped before answering");
        self.state = SubmissionState::Failed(GENERIC_FAILURE.to_string());
        true
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use cuttlefish_api::RequestError;
    use serde_json::json;

    use super::*;

    fn controller() -> (
        SubmissionController,
        Receiver<SubmissionCommand>,
        Sender<SubmissionResult>,
    ) {
        let (command_tx, command_rx) = mpsc::channel();
        let (result_tx, result_rx) = mpsc::channel();
        (
            SubmissionController::new(command_tx, result_rx),
            command_rx,
            result_tx,
        )
    }

    fn request() -> QueryRequest {
        QueryRequest::multi_agent("How do I fix OutOfMemoryError in Eclipse?", true, false)
    }

    fn similarity() -> QueryResponse {
        QueryResponse::from_value(json!({ "results": [] }))
    }

    #[test]
    fn submit_enters_pending_and_dispatches() {
        let (mut controller, commands, _results) = controller();
        let id = controller.submit(Endpoint::MultiAgent, request()).unwrap();

        assert!(controller.is_pending());
        let Ok(SubmissionCommand::Submit { id: sent, endpoint, .. }) = commands.try_recv() else {
            panic!("expected a submit command");
        };
        assert_eq!(sent, id);
        assert_eq!(endpoint, Endpoint::MultiAgent);
    }

    #[test]
    fn second_submit_is_rejected_while_pending() {
        let (mut controller, commands, _results) = controller();
        controller.submit(Endpoint::MultiAgent, request()).unwrap();
        assert_eq!(controller.submit(Endpoint::MultiAgent, request()), None);
        assert_eq!(commands.try_iter().count(), 1);
    }

    #[test]
    fn matching_outcome_settles_exactly_once() {
        let (mut controller, _commands, results) = controller();
        let id = controller.submit(Endpoint::Similar, request()).unwrap();
        results
            .send(SubmissionResult {
                id,
                outcome: Ok(similarity()),
            })
            .unwrap();

        assert!(controller.pump());
        assert_eq!(controller.state(), &SubmissionState::Succeeded(similarity()));
        assert!(!controller.pump());
    }

    #[test]
    fn backend_error_message_is_surfaced() {
        let (mut controller, _commands, results) = controller();
        let id = controller.submit(Endpoint::MultiAgent, request()).unwrap();
        results
            .send(SubmissionResult {
                id,
                outcome: Err(RequestError::from_backend_body(
                    500,
                    br#"{"detail":"index unavailable"}"#,
                    Endpoint::MultiAgent,
                )),
            })
            .unwrap();

        controller.pump();
        assert_eq!(
            controller.state(),
            &SubmissionState::Failed("index unavailable".into())
        );
    }

    #[test]
    fn stale_outcomes_are_discarded() {
        let (mut controller, _commands, results) = controller();
        let first = controller.submit(Endpoint::Similar, request()).unwrap();
        results
            .send(SubmissionResult {
                id: first,
                outcome: Err(RequestError::Network("reset".into())),
            })
            .unwrap();
        controller.pump();

        let second = controller.submit(Endpoint::Rag, request()).unwrap();
        results
            .send(SubmissionResult {
                id: first,
                outcome: Ok(similarity()),
            })
            .unwrap();
        assert!(!controller.pump());
        assert_eq!(
            controller.state(),
            &SubmissionState::Pending {
                id: second,
                endpoint: Endpoint::Rag
            }
        );
    }

    #[test]
    fn new_submission_clears_previous_error() {
        let (mut controller, _commands, results) = controller();
        let id = controller.submit(Endpoint::Similar, request()).unwrap();
        results
            .send(SubmissionResult {
                id,
                outcome: Err(RequestError::Network("refused".into())),
            })
            .unwrap();
        controller.pump();
        assert_eq!(controller.state(), &SubmissionState::Failed("Request failed".into()));

        controller.submit(Endpoint::Similar, request()).unwrap();
        assert!(controller.is_pending());
    }

    #[test]
    fn lost_worker_fails_the_pending_submission() {
        let (mut controller, commands, results) = controller();
        controller.submit(Endpoint::MultiAgent, request()).unwrap();
        drop(results);
        drop(commands);

        assert!(controller.pump());
        assert_eq!(controller.state(), &SubmissionState::Failed("Request failed".into()));
    }

    #[test]
    fn dispatch_failure_does_not_leave_pending() {
        let (mut controller, commands, _results) = controller();
        drop(commands);
        assert!(controller.submit(Endpoint::MultiAgent, request()).is_some());
        assert_eq!(controller.state(), &SubmissionState::Failed("Request failed".into()));
    }

    #[test]
    fn wait_blocks_until_settled() {
        let (mut controller, _commands, results) = controller();
        let id = controller.submit(Endpoint::Similar, request()).unwrap();
        std::thread::spawn(move || {
            results
                .send(SubmissionResult {
                    id,
                    outcome: Ok(similarity()),
                })
                .unwrap();
        });

        assert!(matches!(controller.wait(), SubmissionState::Succeeded(_)));
    }
}
