use anyhow::{Context, Result, bail};
use cuttlefish_api::error::GENERIC_FAILURE;
use cuttlefish_api::{BackendClient, Endpoint, QueryRequest, QueryResponse};
use cuttlefish_console::credentials::{CredentialStore, KeyValueStore};
use cuttlefish_console::ui::{SubmissionController, SubmissionState};

use crate::settings::ResolvedConfig;

/// One submission run without the terminal UI.
pub(crate) struct QueryWorkflow {
    client: BackendClient,
    endpoint: Endpoint,
    request: QueryRequest,
}

impl QueryWorkflow {
    /// Build the request for `query`. `endpoint` defaults to the primary
    /// action of the configured console.
    pub(crate) fn from_config(
        config: &ResolvedConfig,
        query: &str,
        endpoint: Option<Endpoint>,
    ) -> Result<Self> {
        let endpoint = endpoint.unwrap_or_else(|| config.variant.primary_endpoint());
        if query.trim().is_empty() {
            bail!("--query must not be empty");
        }

        let mut options = config.options.clone();
        if endpoint != Endpoint::MultiAgent {
            options.api_key = config.api_key.clone().unwrap_or_else(stored_credential);
            if options.api_key.is_empty() {
                bail!("{endpoint} needs an OpenAI API key; pass --api-key or save one in the console");
            }
        }

        let client = BackendClient::new(config.base_url.clone())
            .with_context(|| format!("invalid backend address `{}`", config.base_url))?;
        Ok(Self {
            client,
            endpoint,
            request: options.request_for(endpoint, query),
        })
    }

    pub(crate) fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Submit once and wait for the outcome.
    pub(crate) fn run(self) -> Result<QueryResponse> {
        let mut controller = SubmissionController::spawn(self.client)?;
        controller
            .submit(self.endpoint, self.request)
            .context("submission was rejected")?;
        match controller.wait() {
            SubmissionState::Succeeded(response) => Ok(response.clone()),
            SubmissionState::Failed(message) => bail!("{message}"),
            SubmissionState::Idle | SubmissionState::Pending { .. } => bail!(GENERIC_FAILURE),
        }
    }
}

fn stored_credential() -> String {
    match KeyValueStore::in_data_dir() {
        Ok(store) => CredentialStore::new(store).load(),
        Err(err) => {
            tracing::warn!("credential store unavailable: {err:#}");
            String::new()
        }
    }
}
