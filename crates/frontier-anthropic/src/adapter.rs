use std::{env, sync::Arc};

use frontier_core::error::{FrontierError, Result};

use crate::client::AnthropicClient;

/// Thin wrapper that wires the HTTP client [`AnthropicClient`] into a value
/// that implements [`frontier_core::TextCompletionProvider`].
///
/// Think of it as the **service locator** for the Anthropic back-end:
///
/// * stores the API key (and optionally a custom base URL),
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`AnthropicAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
///
/// The type itself purposefully exposes **no additional methods**—all
/// user-facing functionality sits behind the provider trait once the adapter
/// is plugged in.
pub struct AnthropicAdapter {
    pub(crate) client: Arc<AnthropicClient>,
}

/// Builder for [`AnthropicAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use frontier_anthropic::AnthropicAdapterBuilder;
///
/// let backend = AnthropicAdapterBuilder::new_from_env()
///     .build()
///     .expect("ANTHROPIC_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, beta headers, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct AnthropicAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl AnthropicAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `ANTHROPIC_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("ANTHROPIC_API_KEY").ok().filter(|k| !k.is_empty()),
            base_url: None,
        }
    }

    /// Supply the API key explicitly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the client at a non-default endpoint (useful for tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`FrontierError::BackendNotConfigured`] – if the API key is missing.
    pub fn build(self) -> Result<AnthropicAdapter> {
        let api_key = self.api_key.ok_or(FrontierError::BackendNotConfigured)?;

        // Custom endpoints keep the default client and its request timeout.
        let client = AnthropicClient::with_http(api_key, crate::client::default_http(), self.base_url);

        Ok(AnthropicAdapter {
            client: Arc::new(client),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_without_an_api_key_reports_missing_credentials() {
        assert!(matches!(
            AnthropicAdapterBuilder::new().build(),
            Err(FrontierError::BackendNotConfigured)
        ));
    }

    #[test]
    fn custom_base_url_is_honoured() {
        let adapter = AnthropicAdapterBuilder::new()
            .with_api_key("test-key")
            .with_base_url("http://localhost:8080/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.client.base_url(), "http://localhost:8080/v1");
    }
}
