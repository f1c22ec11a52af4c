use reqwest::{
    Client as HttpClient,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;

use crate::{
    api::{ErrorEnvelope, MessagesRequest, MessagesResponse},
    error::AnthropicError,
};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The default `reqwest` client used by every constructor that doesn't
/// receive one: 30 s timeout, Rustls TLS.  The timeout doubles as the
/// upstream-hang guard for the single catalog round trip, so custom-endpoint
/// clients must go through here too.
pub(crate) fn default_http() -> HttpClient {
    HttpClient::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("building reqwest client")
}

/// Minimal HTTP client for Anthropic’s *messages* endpoint.
///
/// * Non-streaming only (one request ▶ one response).
/// * Accepts and returns the `api` request / response structs defined in
///   this crate.
/// * Shares a single `reqwest::Client`, so cloning `AnthropicClient` is
///   cheap.
#[derive(Clone)]
pub struct AnthropicClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl AnthropicClient {
    /// Convenience constructor using [`default_http`].
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_http(api_key, default_http(), None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    /// The endpoint this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Perform a **non-streaming** message completion.
    pub async fn messages(
        &self,
        request: MessagesRequest,
    ) -> Result<MessagesResponse, AnthropicError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(&self.api_key).map_err(|_| {
                AnthropicError::Format("API key contains invalid header characters".into())
            })?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let url = format!("{}/messages", self.base);
        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(&request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AnthropicError::Api { status, body });
        }

        let bytes = resp.bytes().await?;

        // A 200 can still carry the vendor's error envelope; probe for it
        // before attempting the success shape.
        if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            if envelope.kind == "error" {
                return Err(AnthropicError::Vendor {
                    kind: envelope.error.kind,
                    message: envelope.error.message,
                });
            }
        }

        let parsed: MessagesResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }
}
