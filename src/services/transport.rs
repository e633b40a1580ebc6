use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::AppResult;

/// Outgoing JSON POST request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

/// Status and raw body of a response
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> AppResult<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// HTTP transport abstraction
///
/// The catalog fetcher and the webhook notifier only ever POST JSON, so this is
/// the one operation they need. Non-success statuses are returned, not raised;
/// callers decide whether a status is fatal.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn post_json(&self, request: TransportRequest) -> AppResult<TransportResponse>;
}

/// `reqwest`-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    http_client: HttpClient,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }

    /// Builds a client with optional TLS verification and proxy
    pub fn with_options(verify_tls: bool, proxy: Option<&str>) -> AppResult<Self> {
        let mut builder = HttpClient::builder().danger_accept_invalid_certs(!verify_tls);

        if let Some(proxy_url) = proxy.filter(|p| !p.is_empty()) {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
            tracing::debug!(proxy = %proxy_url, "Routing requests through proxy");
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, request: TransportRequest) -> AppResult<TransportResponse> {
        let mut builder = self
            .http_client
            .post(&request.url)
            .body(serde_json::to_vec(&request.body)?);

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        tracing::debug!(url = %request.url, status, "POST completed");

        Ok(TransportResponse { status, body })
    }
}
