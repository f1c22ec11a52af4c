//! Environment-driven server configuration.
//!
//! The backend is chosen once here, at startup, from whichever credential is
//! present — `ANTHROPIC_API_KEY` wins over `OPENAI_API_KEY`.  Requests never
//! re-inspect the environment.

use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATA_DIR: &str = "data";

/// Which upstream serves catalog fetches for this process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendChoice {
    Anthropic,
    OpenAi,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `None` when neither credential is set; fetches then fail per-request
    /// instead of aborting startup, so the cached page stays reachable.
    pub backend: Option<BackendChoice>,
    pub port: u16,
    pub data_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let backend = if env_key_set("ANTHROPIC_API_KEY") {
            Some(BackendChoice::Anthropic)
        } else if env_key_set("OPENAI_API_KEY") {
            Some(BackendChoice::OpenAi)
        } else {
            None
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_dir = env::var("FRONTIER_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            backend,
            port,
            data_dir,
        }
    }

    /// Location of the fallback cache, served verbatim at `/data/models.json`.
    pub fn cache_path(&self) -> PathBuf {
        self.data_dir.join("models.json")
    }
}

fn env_key_set(name: &str) -> bool {
    env::var(name).is_ok_and(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_path_lives_under_the_data_dir() {
        let config = ServerConfig {
            backend: None,
            port: DEFAULT_PORT,
            data_dir: PathBuf::from("/var/lib/frontier"),
        };
        assert_eq!(
            config.cache_path(),
            PathBuf::from("/var/lib/frontier/models.json")
        );
    }
}
