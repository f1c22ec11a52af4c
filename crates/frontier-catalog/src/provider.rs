//! The catalog provider: one prompt, one backend round trip, one normalized
//! batch.
//!
//! `fetch_catalog` is the whole §"refresh" story: build the instruction
//! prompt, send it to whichever backend was selected at startup, normalize
//! the reply into records and persist them as the new fallback.  No retry,
//! no backoff — a failed call surfaces its error and leaves the cache
//! untouched.

use frontier_core::{
    TextCompletionProvider,
    error::Result,
    model::Model,
    provider::CompleteParameters,
};
use frontier_prompt::chain::PromptChain;
use tracing::{info, warn};

use crate::{cache::CatalogCache, normalize, prompt::CatalogPrompt, record::ModelRecord};

/// Generous ceiling for a 10-14 record JSON array.
const MAX_TOKENS: u32 = 3000;

pub struct CatalogProvider {
    backend: Box<dyn TextCompletionProvider>,
    model: Model,
    cache: CatalogCache,
}

impl CatalogProvider {
    pub fn new(backend: Box<dyn TextCompletionProvider>, model: Model, cache: CatalogCache) -> Self {
        Self {
            backend,
            model,
            cache,
        }
    }

    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }

    /// Fetch a fresh catalog batch.
    ///
    /// On success the batch overwrites the fallback cache before being
    /// returned; a cache-write failure is logged and swallowed, since the
    /// fetch itself succeeded.  On any failure the cache keeps its previous
    /// contents.
    pub async fn fetch_catalog(&self) -> Result<Vec<ModelRecord>> {
        let messages = PromptChain::new().with(CatalogPrompt::new()).build();
        let params =
            CompleteParameters::new(messages, self.model.clone()).with_max_tokens(MAX_TOKENS);

        let raw = self.backend.complete(params).await?;
        let records = normalize::parse_records(&raw)?;

        if let Err(err) = self.cache.write(&records) {
            warn!(%err, path = %self.cache.path().display(), "failed to persist catalog cache");
        }

        info!(count = records.len(), "fetched model catalog");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_core::error::FrontierError;
    use frontier_core::model::AnthropicModel;
    use std::future::Future;
    use std::pin::Pin;

    /// Backend double that replays a canned reply (or failure) and records
    /// the prompt it was given.
    struct StubBackend(Result<String>);

    impl StubBackend {
        fn replying(text: &str) -> Self {
            Self(Ok(text.to_owned()))
        }

        fn failing() -> Self {
            Self(Err(FrontierError::Upstream("connection reset".into())))
        }
    }

    impl TextCompletionProvider for StubBackend {
        fn complete<'p>(
            &'p self,
            params: CompleteParameters,
        ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
            assert_eq!(params.messages.len(), 1, "catalog prompt is one message");
            assert_eq!(params.max_tokens, Some(MAX_TOKENS));
            let outcome = match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(_) => Err(FrontierError::Upstream("connection reset".into())),
            };
            Box::pin(async move { outcome })
        }
    }

    const REPLY: &str = r##"```json
    [{
        "name": "Gemini 3 Pro",
        "lab": "google",
        "date": "Jan 2026",
        "status": "released",
        "logo": "✦",
        "logoBg": "#0a1a14",
        "color": "#4285f4",
        "desc": "Long-context multimodal flagship.",
        "tags": ["multimodal", "reasoning"],
        "note": null
    }]
    ```"##;

    fn provider(backend: StubBackend, dir: &std::path::Path) -> CatalogProvider {
        CatalogProvider::new(
            Box::new(backend),
            Model::Anthropic(AnthropicModel::ClaudeSonnet4),
            CatalogCache::new(dir.join("models.json")),
        )
    }

    #[tokio::test]
    async fn successful_fetch_overwrites_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider(StubBackend::replying(REPLY), dir.path());

        let records = provider.fetch_catalog().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Gemini 3 Pro");

        // The fence-stripped batch landed on disk verbatim.
        assert_eq!(provider.cache().read().unwrap(), records);
    }

    #[tokio::test]
    async fn failed_fetch_never_touches_the_cache() {
        let dir = tempfile::tempdir().unwrap();

        let seeded = provider(StubBackend::replying(REPLY), dir.path());
        let previous = seeded.fetch_catalog().await.unwrap();

        let failing = provider(StubBackend::failing(), dir.path());
        assert!(matches!(
            failing.fetch_catalog().await,
            Err(FrontierError::Upstream(_))
        ));
        assert_eq!(failing.cache().read().unwrap(), previous);
    }

    #[tokio::test]
    async fn prose_reply_is_a_parse_failure_and_leaves_no_cache() {
        let dir = tempfile::tempdir().unwrap();
        let provider = provider(StubBackend::replying("no models today, sorry"), dir.path());

        assert!(matches!(
            provider.fetch_catalog().await,
            Err(FrontierError::MalformedReply(_))
        ));
        assert!(provider.cache().read().is_err());
    }
}
