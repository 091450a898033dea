use serde_json::Value;
use thiserror::Error;

use crate::request::Endpoint;

/// Message shown for transport failures and unreadable success bodies.
pub const GENERIC_FAILURE: &str = "Request failed";

/// Reasons a submission can fail.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request never produced an HTTP response (connect, DNS, reset).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },

    /// A success status with a body that is not JSON.
    #[error("failed to decode response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// Build a [`RequestError::Backend`] from a failed response body.
    #[must_use]
    pub fn from_backend_body(status: u16, body: &[u8], endpoint: Endpoint) -> Self {
        let message = extract_error_message(body)
            .unwrap_or_else(|| endpoint.error_fallback().to_string());
        Self::Backend { status, message }
    }

    /// Human-readable message for the error panel.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) | Self::Decode(_) => GENERIC_FAILURE,
            Self::Backend { message, .. } => message,
        }
    }
}

/// Pull `detail`, then `error`, out of a JSON error body.
///
/// Only string values are surfaced; anything else counts as absent.
#[must_use]
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    ["detail", "error"]
        .into_iter()
        .find_map(|field| {
            value
                .get(field)
                .and_then(Value::as_str)
                .filter(|message| !message.is_empty())
        })
        .map(str::to_string)
}
