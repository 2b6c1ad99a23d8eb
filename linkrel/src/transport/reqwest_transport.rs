//! `reqwest`-backed transport.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use std::collections::HashMap;

use super::{HttpMethod, LinkRequest, LinkResponse, Transport, TransportConfig};
use crate::errors::{LinkrelError, Result};

/// Sends link requests with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a transport from configuration.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout()?)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| LinkrelError::Configuration(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn headers_to_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: LinkRequest) -> Result<LinkResponse> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(serde_json::to_vec(&body)?);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| LinkrelError::Transport(e.to_string()))?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers = headers_to_map(response.headers());
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response
            .text()
            .await
            .map_err(|e| LinkrelError::Transport(e.to_string()))?;

        Ok(LinkResponse {
            status_code,
            headers,
            text,
            final_url,
            content_type,
        })
    }
}
