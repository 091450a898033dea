//! Backend contract for the Cuttlefish query console.
//!
//! The crate owns everything that crosses the network boundary: the request
//! bodies sent to each endpoint, the parsing of the untagged response JSON into
//! a closed [`QueryResponse`] enum, the [`RequestError`] taxonomy, and the
//! asynchronous [`BackendClient`] that ties them together.

pub mod client;
pub mod error;
pub mod request;
pub mod response;

pub use client::BackendClient;
pub use error::RequestError;
pub use request::{Endpoint, MultiAgentRequest, QueryRequest, SearchRequest};
pub use reqwest::Url;
pub use response::{AgentMetadata, Match, MatchId, MatchPayload, QueryResponse, UserFlags};
