use reqwest::Client;
use serde_json::Value;

use crate::error::RequestError;
use crate::request::{Endpoint, QueryRequest};
use crate::response::QueryResponse;

/// HTTP client bound to one backend base URL.
///
/// Requests carry no timeout: a dispatched request runs until the backend
/// answers or the transport fails.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for `base_url`, e.g. `http://127.0.0.1:5020`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RequestError> {
        let http = Client::builder()
            .user_agent(concat!("cuttlefish/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| RequestError::Network(err.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` to `endpoint` and discriminate the response body.
    pub async fn submit(
        &self,
        endpoint: Endpoint,
        request: &QueryRequest,
    ) -> Result<QueryResponse, RequestError> {
        let url = endpoint.url(&self.base_url);
        tracing::debug!(%url, "sending query");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| RequestError::Network(err.to_string()))?;

        if !status.is_success() {
            let err = RequestError::from_backend_body(status.as_u16(), &body, endpoint);
            tracing::warn!(status = status.as_u16(), %url, "backend rejected query");
            return Err(err);
        }

        let value: Value =
            serde_json::from_slice(&body).map_err(|err| RequestError::Decode(err.to_string()))?;
        let response = QueryResponse::from_value(value);
        tracing::debug!(kind = response.kind(), matches = response.matches().len(), "decoded response");
        Ok(response)
    }
}
