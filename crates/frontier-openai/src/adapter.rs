use std::{env, sync::Arc};

use frontier_core::error::{FrontierError, Result};

use crate::client::OpenAiClient;

/// Thin wrapper that wires the HTTP client [`OpenAiClient`] into a value
/// that implements [`frontier_core::TextCompletionProvider`].
///
/// Secondary backend: the server only selects it when no Anthropic
/// credential is present.
pub struct OpenAiAdapter {
    pub(crate) client: Arc<OpenAiClient>,
}

/// Builder for [`OpenAiAdapter`].
///
/// ```rust,no_run
/// use frontier_openai::OpenAiAdapterBuilder;
///
/// let backend = OpenAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("OPENAI_API_KEY must be set");
/// ```
#[derive(Default)]
pub struct OpenAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl OpenAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `OPENAI_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty()),
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
    pub fn build(self) -> Result<OpenAiAdapter> {
        let api_key = self.api_key.ok_or(FrontierError::BackendNotConfigured)?;

        // Custom endpoints keep the default client and its request timeout.
        let client = OpenAiClient::with_http(api_key, crate::client::default_http(), self.base_url);

        Ok(OpenAiAdapter {
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
            OpenAiAdapterBuilder::new().build(),
            Err(FrontierError::BackendNotConfigured)
        ));
    }

    #[test]
    fn custom_base_url_is_honoured() {
        let adapter = OpenAiAdapterBuilder::new()
            .with_api_key("test-key")
            .with_base_url("http://localhost:8080/v1")
            .build()
            .unwrap();
        assert_eq!(adapter.client.base_url(), "http://localhost:8080/v1");
    }
}
