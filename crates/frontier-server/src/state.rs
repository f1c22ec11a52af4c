//! Shared application state: the catalog provider picked at startup, the
//! fallback cache and the presenter behind a read/write lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use frontier_anthropic::AnthropicAdapterBuilder;
use frontier_catalog::cache::CatalogCache;
use frontier_catalog::provider::CatalogProvider;
use frontier_catalog::record::ModelRecord;
use frontier_core::error::{FrontierError, Result};
use frontier_core::model::{AnthropicModel, Model, OpenAiModel};
use frontier_openai::OpenAiAdapterBuilder;
use frontier_view::CatalogView;

use crate::config::{BackendChoice, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    provider: Option<Arc<CatalogProvider>>,
    cache: Arc<CatalogCache>,
    view: Arc<RwLock<CatalogView>>,
}

impl AppState {
    /// Wire up the backend selected by [`ServerConfig::from_env`].  With no
    /// credential present the state carries no provider and every fetch
    /// reports [`FrontierError::BackendNotConfigured`]; the cached page keeps
    /// working.
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let cache_path = config.cache_path();
        let provider = match config.backend {
            Some(BackendChoice::Anthropic) => {
                info!("using Anthropic backend");
                let adapter = AnthropicAdapterBuilder::new_from_env().build()?;
                Some(CatalogProvider::new(
                    Box::new(adapter),
                    Model::Anthropic(AnthropicModel::ClaudeSonnet4),
                    CatalogCache::new(&cache_path),
                ))
            }
            Some(BackendChoice::OpenAi) => {
                info!("using OpenAI backend");
                let adapter = OpenAiAdapterBuilder::new_from_env().build()?;
                Some(CatalogProvider::new(
                    Box::new(adapter),
                    Model::OpenAi(OpenAiModel::Gpt4o),
                    CatalogCache::new(&cache_path),
                ))
            }
            None => {
                warn!("no API key configured; serving cached data only");
                None
            }
        };
        Ok(Self::new(provider, CatalogCache::new(cache_path)))
    }

    pub fn new(provider: Option<CatalogProvider>, cache: CatalogCache) -> Self {
        Self {
            provider: provider.map(Arc::new),
            cache: Arc::new(cache),
            view: Arc::new(RwLock::new(CatalogView::new())),
        }
    }

    pub fn view(&self) -> &Arc<RwLock<CatalogView>> {
        &self.view
    }

    /// Startup sequence: seed the presenter from the on-disk cache, then
    /// attempt one live fetch.  A missing or corrupt cache just means an
    /// empty seed; a failed fetch leaves the seed presented as stale data.
    pub async fn load(&self) {
        match self.cache.read() {
            Ok(seed) => {
                info!(count = seed.len(), "loaded fallback cache");
                self.view.write().await.load_seed(seed);
            }
            Err(err) => {
                info!(%err, path = %self.cache.path().display(), "no usable fallback cache");
            }
        }

        if let Err(err) = self.refresh().await {
            warn!(%err, "startup fetch failed; presenting cached data");
            self.view.write().await.fall_back();
        }
    }

    /// Fetch a fresh batch and swap it into the presenter.  On failure the
    /// presenter falls back to the seed and the error propagates to the
    /// caller for the HTTP envelope.
    pub async fn refresh(&self) -> Result<Vec<ModelRecord>> {
        let provider = self
            .provider
            .as_ref()
            .ok_or(FrontierError::BackendNotConfigured)?;

        match provider.fetch_catalog().await {
            Ok(batch) => {
                self.view.write().await.adopt(batch.clone());
                Ok(batch)
            }
            Err(err) => {
                self.view.write().await.fall_back();
                Err(err)
            }
        }
    }
}
