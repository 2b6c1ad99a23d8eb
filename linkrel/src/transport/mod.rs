//! Following resolved links over HTTP.
//!
//! [`LinkClient`] resolves the single best link for a relation and hands it
//! to a [`Transport`]. At most one request is sent per resolution; when no
//! link matches, the call fails with
//! [`NoMatch`](crate::errors::LinkrelError::NoMatch) before anything is sent.

mod client;
mod config;
mod request;
mod reqwest_transport;

use async_trait::async_trait;

use crate::errors::Result;

pub use client::LinkClient;
pub use config::TransportConfig;
pub use request::{HttpMethod, LinkRequest, LinkResponse, RequestOptions};
pub use reqwest_transport::ReqwestTransport;

/// Protocol for sending link requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the response.
    ///
    /// Non-2xx statuses are responses, not errors.
    async fn send(&self, request: LinkRequest) -> Result<LinkResponse>;
}
