//! Mock transports for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::{LinkrelError, Result};
use crate::transport::{LinkRequest, LinkResponse, Transport};

/// A transport that records requests and returns a configurable response.
///
/// Clones share the recorded requests.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    requests: Arc<Mutex<Vec<LinkRequest>>>,
    response: Arc<Mutex<LinkResponse>>,
    delay: Option<Duration>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            response: Arc::new(Mutex::new(LinkResponse::new(200, ""))),
            delay: None,
        }
    }
}

impl RecordingTransport {
    /// Creates a transport answering `200` with an empty body.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response to return.
    #[must_use]
    pub fn responding_with(self, response: LinkResponse) -> Self {
        *self.response.lock() = response;
        self
    }

    /// Delays every response.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Returns all recorded requests.
    #[must_use]
    pub fn requests(&self) -> Vec<LinkRequest> {
        self.requests.lock().clone()
    }

    /// Returns the most recent request.
    #[must_use]
    pub fn last_request(&self) -> Option<LinkRequest> {
        self.requests.lock().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: LinkRequest) -> Result<LinkResponse> {
        let final_url = request.url.clone();
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let mut response = self.response.lock().clone();
        if response.final_url.is_empty() {
            response.final_url = final_url;
        }
        Ok(response)
    }
}

/// A transport that always fails.
#[derive(Debug, Clone)]
pub struct FailingTransport {
    message: String,
}

impl FailingTransport {
    /// Creates a transport failing with `message`.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Transport for FailingTransport {
    async fn send(&self, _request: LinkRequest) -> Result<LinkResponse> {
        Err(LinkrelError::Transport(self.message.clone()))
    }
}
