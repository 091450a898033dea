use cuttlefish_api::{Endpoint, QueryRequest, QueryResponse, RequestError};

/// Messages understood by the submission worker.
#[derive(Debug)]
pub(crate) enum SubmissionCommand {
    /// Send `request` to `endpoint`, tagging the answer with `id`.
    Submit {
        id: u64,
        endpoint: Endpoint,
        request: QueryRequest,
    },
    Shutdown,
}

/// Outcome of one submission, in the order the worker finished them.
#[derive(Debug)]
pub(crate) struct SubmissionResult {
    pub(crate) id: u64,
    pub(crate) outcome: Result<QueryResponse, RequestError>,
}
