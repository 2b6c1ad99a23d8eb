//! A client that follows links by relation.

use reqwest::Url;
use std::collections::HashMap;
use tracing::debug;

use super::{
    HttpMethod, LinkRequest, LinkResponse, RequestOptions, ReqwestTransport, Transport,
    TransportConfig,
};
use crate::errors::{LinkrelError, NoMatchError, Result};
use crate::matching::LinkResolver;
use crate::model::{Link, LinkSource};
use crate::selector::{is_wildcard_str, media_type_constraint, RelationInput};

const JSON_MEDIA_TYPE: &str = "application/json";

/// Resolves a link on a representation and sends one request to it.
///
/// The request targets the link's `href`, joined onto the configured base
/// URL when there is one. A body is sent with the link's declared `type` as
/// `Content-Type` (JSON when undeclared); a non-wildcard requested media type
/// becomes the `Accept` header.
///
/// Header names are case-insensitive. Configured headers are applied first,
/// then the generated `Accept`/`Content-Type`, then the per-call headers of
/// [`RequestOptions`]; a later header replaces an earlier one of the same name.
#[derive(Debug, Clone)]
pub struct LinkClient<T = ReqwestTransport> {
    transport: T,
    resolver: LinkResolver,
    base_url: Option<Url>,
    headers: HashMap<String, String>,
}

impl LinkClient<ReqwestTransport> {
    /// Creates a client backed by `reqwest`.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        Self::with_transport(ReqwestTransport::new(config)?, config)
    }
}

impl<T: Transport> LinkClient<T> {
    /// Creates a client using a custom transport.
    pub fn with_transport(transport: T, config: &TransportConfig) -> Result<Self> {
        config.validate()?;
        let base_url = config
            .base_url
            .as_deref()
            .map(Url::parse)
            .transpose()
            .map_err(|e| LinkrelError::Configuration(format!("invalid base_url: {e}")))?;
        Ok(Self {
            transport,
            resolver: LinkResolver::default(),
            base_url,
            headers: config.headers.clone(),
        })
    }

    /// Replaces the resolver used to pick links.
    #[must_use]
    pub fn with_resolver(mut self, resolver: LinkResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds the request for the best link without sending it.
    ///
    /// Only the headers of `options` are used here.
    pub fn prepare<S, R>(
        &self,
        method: HttpMethod,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        body: Option<serde_json::Value>,
        options: &RequestOptions<'_>,
    ) -> Result<LinkRequest>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        let relation = relation.into();
        let Some(link) = self.resolver.first(source, &relation, media_type) else {
            self.resolver.report_miss(&relation, media_type, &source.links());
            let requested = media_type_constraint(media_type);
            return Err(NoMatchError::new(
                relation.to_string(),
                requested.as_ref().map(|m| m.as_str()),
            )
            .into());
        };

        let mut request =
            LinkRequest::new(method, self.target_url(&link.href)?).with_headers(&self.headers);
        if let Some(accept) = media_type_constraint(media_type) {
            request = request.with_header("Accept", accept.as_str());
        }
        if let Some(body) = body {
            request = request
                .with_header("Content-Type", content_type_for(&link))
                .with_body(body);
        }
        let request = request.with_headers(&options.headers);

        debug!(
            method = %method,
            rel = %link.rel,
            url = %request.url,
            "following link"
        );
        Ok(request)
    }

    /// Resolves the best link and sends one request to it.
    ///
    /// A token that is already cancelled prevents the request; cancelling
    /// while the request is in flight abandons it.
    pub async fn request<S, R>(
        &self,
        method: HttpMethod,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        body: Option<serde_json::Value>,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        if let Some(token) = options.cancel {
            token.check()?;
        }
        let request = self.prepare(method, source, relation, media_type, body, &options)?;

        match options.cancel {
            Some(token) => {
                tokio::select! {
                    response = self.transport.send(request) => response,
                    () = token.cancelled() => {
                        Err(LinkrelError::Cancelled(token.reason().unwrap_or_default()))
                    }
                }
            }
            None => self.transport.send(request).await,
        }
    }

    /// GETs the best link.
    pub async fn get<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.request(HttpMethod::Get, source, relation, media_type, None, options)
            .await
    }

    /// PUTs `body` to the best link.
    pub async fn put<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        body: serde_json::Value,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.request(HttpMethod::Put, source, relation, media_type, Some(body), options)
            .await
    }

    /// POSTs `body` to the best link.
    pub async fn post<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        body: serde_json::Value,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.request(HttpMethod::Post, source, relation, media_type, Some(body), options)
            .await
    }

    /// PATCHes the best link with `body`.
    pub async fn patch<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        body: serde_json::Value,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.request(HttpMethod::Patch, source, relation, media_type, Some(body), options)
            .await
    }

    /// DELETEs the best link.
    pub async fn delete<S, R>(
        &self,
        source: &S,
        relation: R,
        media_type: Option<&str>,
        options: RequestOptions<'_>,
    ) -> Result<LinkResponse>
    where
        S: LinkSource + ?Sized,
        R: Into<RelationInput>,
    {
        self.request(HttpMethod::Delete, source, relation, media_type, None, options)
            .await
    }

    fn target_url(&self, href: &str) -> Result<String> {
        let url = match self.base_url {
            Some(ref base) => base.join(href),
            None => Url::parse(href),
        };
        url.map(|u| u.to_string())
            .map_err(|e| LinkrelError::InvalidTarget {
                href: href.to_string(),
                reason: e.to_string(),
            })
    }
}

fn content_type_for(link: &Link) -> &str {
    match link.media_type.as_deref() {
        Some(media_type) if !media_type.is_empty() && !is_wildcard_str(media_type) => media_type,
        _ => JSON_MEDIA_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::CancellationToken;
    use crate::matching::CollectingDiagnosticSink;
    use crate::model::LinkedRepresentation;
    use crate::testing::{sample_order, FailingTransport, RecordingTransport};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    fn client(transport: RecordingTransport) -> LinkClient<RecordingTransport> {
        let config = TransportConfig::new()
            .with_base_url("https://api.example.com/")
            .with_header("X-Tenant", "acme");
        LinkClient::with_transport(transport, &config).unwrap()
    }

    #[tokio::test]
    async fn test_get_follows_resolved_href() {
        let transport = RecordingTransport::new();
        let client = client(transport.clone());

        let response = client.get(&sample_order(), "self", None, RequestOptions::new()).await.unwrap();
        assert!(response.is_success());

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.example.com/orders/1");
        assert_eq!(request.header("x-tenant"), Some("acme"));
        assert_eq!(request.header("accept"), None);
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_body_uses_link_type_as_content_type() {
        let transport = RecordingTransport::new();
        let client = client(transport.clone());

        client
            .put(
                &sample_order(),
                "edit",
                Some("application/vnd.order+json"),
                serde_json::json!({ "quantity": 2 }),
                RequestOptions::new(),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.url, "https://api.example.com/orders/1/edit");
        assert_eq!(request.header("content-type"), Some("application/vnd.order+json"));
        assert_eq!(request.header("accept"), Some("application/vnd.order+json"));
        assert_eq!(request.body, Some(serde_json::json!({ "quantity": 2 })));
    }

    #[tokio::test]
    async fn test_body_without_link_type_is_json() {
        let transport = RecordingTransport::new();
        let client = client(transport.clone());

        client
            .post(&sample_order(), "payment", None, serde_json::json!({}), RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(
            transport.last_request().unwrap().header("content-type"),
            Some("application/json")
        );
    }

    #[tokio::test]
    async fn test_missing_link_is_no_match_and_sends_nothing() {
        let transport = RecordingTransport::new();
        let sink = Arc::new(CollectingDiagnosticSink::new());
        let client = client(transport.clone()).with_resolver(LinkResolver::new().with_sink(sink.clone()));

        let err = client
            .delete(&sample_order(), "cancel", Some("*/*"), RequestOptions::new())
            .await
            .unwrap_err();

        match err {
            LinkrelError::NoMatch(no_match) => {
                assert_eq!(no_match.relation, "cancel");
                assert_eq!(no_match.media_type, None);
            }
            other => panic!("expected NoMatch, got {other:?}"),
        }
        assert!(transport.requests().is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_cancelled_token_prevents_dispatch() {
        let transport = RecordingTransport::new();
        let client = client(transport.clone());
        let token = CancellationToken::new();
        token.cancel("navigated away");

        let err = client
            .get(&sample_order(), "self", None, RequestOptions::new().with_cancel(&token))
            .await
            .unwrap_err();
        assert!(matches!(err, LinkrelError::Cancelled(ref r) if r == "navigated away"));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_in_flight() {
        let transport = RecordingTransport::new().with_delay(Duration::from_secs(5));
        let client = client(transport.clone());
        let token = Arc::new(CancellationToken::new());

        let canceller = {
            let token = token.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(20)).await;
                token.cancel("timeout");
            })
        };

        let err = client
            .patch(
                &sample_order(),
                "edit",
                None,
                serde_json::json!({}),
                RequestOptions::new().with_cancel(&token),
            )
            .await
            .unwrap_err();
        canceller.await.unwrap();

        assert!(matches!(err, LinkrelError::Cancelled(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let config = TransportConfig::new().with_base_url("https://api.example.com/");
        let client = LinkClient::with_transport(FailingTransport::new("connection reset"), &config)
            .unwrap();

        let err = client.get(&sample_order(), "self", None, RequestOptions::new()).await.unwrap_err();
        assert!(matches!(err, LinkrelError::Transport(ref m) if m == "connection reset"));
    }

    #[test]
    fn test_relative_href_without_base_is_invalid() {
        let client =
            LinkClient::with_transport(RecordingTransport::new(), &TransportConfig::default())
                .unwrap();
        let rep = LinkedRepresentation::from_links(vec![Link::new("self", "/orders/1")]);

        let err = client
            .prepare(HttpMethod::Get, &rep, "self", None, None, &RequestOptions::new())
            .unwrap_err();
        assert!(matches!(err, LinkrelError::InvalidTarget { .. }));
    }

    #[test]
    fn test_absolute_href_ignores_base() {
        let client = client(RecordingTransport::new());
        let rep = LinkedRepresentation::from_links(vec![Link::new(
            "related",
            "https://other.example.org/x",
        )]);
        let request = client
            .prepare(HttpMethod::Get, &rep, "related", None, None, &RequestOptions::new())
            .unwrap();
        assert_eq!(request.url, "https://other.example.org/x");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = TransportConfig::new().with_base_url("not a url");
        let err = LinkClient::with_transport(RecordingTransport::new(), &config).unwrap_err();
        assert!(matches!(err, LinkrelError::Configuration(_)));
    }

    #[test]
    fn test_reqwest_client_builds() {
        assert!(LinkClient::new(&TransportConfig::default()).is_ok());
    }

    #[test]
    fn test_oversized_timeout_fails_to_build() {
        let config = TransportConfig::new().with_timeout(1e20);
        assert!(matches!(LinkClient::new(&config), Err(LinkrelError::Configuration(_))));
        assert!(matches!(
            LinkClient::with_transport(RecordingTransport::new(), &config),
            Err(LinkrelError::Configuration(_))
        ));
    }

    #[test]
    fn test_generated_accept_replaces_configured_header() {
        let config = TransportConfig::new()
            .with_base_url("https://api.example.com/")
            .with_header("accept", "text/plain")
            .with_header("CONTENT-TYPE", "text/plain");
        let client = LinkClient::with_transport(RecordingTransport::new(), &config).unwrap();

        let request = client
            .prepare(
                HttpMethod::Put,
                &sample_order(),
                "edit",
                Some("application/vnd.order+json"),
                Some(serde_json::json!({})),
                &RequestOptions::new(),
            )
            .unwrap();
        assert_eq!(request.headers.len(), 2);
        assert_eq!(request.header("Accept"), Some("application/vnd.order+json"));
        assert_eq!(request.header("Content-Type"), Some("application/vnd.order+json"));
    }

    #[tokio::test]
    async fn test_call_headers_override_configured_headers() {
        let transport = RecordingTransport::new();
        let client = client(transport.clone());

        client
            .get(
                &sample_order(),
                "edit",
                Some("application/vnd.order+json"),
                RequestOptions::new()
                    .with_header("x-tenant", "globex")
                    .with_header("Accept", "application/json")
                    .with_header("X-Request-Id", "42"),
            )
            .await
            .unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("X-Tenant"), Some("globex"));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("x-request-id"), Some("42"));
        assert_eq!(request.headers.len(), 3);
    }
}
