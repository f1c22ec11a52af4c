//! The on-disk fallback cache: the last successfully fetched record list,
//! persisted so the interface has data to show when the live fetch fails.
//!
//! The file doubles as the static asset served at `/data/models.json`.  The
//! write is a single whole-file overwrite with no concurrent-writer
//! protection; fine for a single instance refreshing at human frequency,
//! not for multiple refreshes racing on the same path.

use std::fs;
use std::path::{Path, PathBuf};

use frontier_core::error::Result;

use crate::record::ModelRecord;

#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the cached batch.
    ///
    /// Callers treat any error (missing file, malformed JSON) as "no
    /// fallback available", never as a hard failure.
    pub fn read(&self) -> Result<Vec<ModelRecord>> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Overwrite the cache with a fresh batch.
    pub fn write(&self, records: &[ModelRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Lab, Status};

    fn sample_batch() -> Vec<ModelRecord> {
        vec![
            ModelRecord {
                name: "Claude Sonnet 4".into(),
                lab: Lab::Anthropic,
                date: "May 2025".into(),
                status: Status::Released,
                logo: "✴️".into(),
                logo_bg: "#1a1208".into(),
                color: "#d97706".into(),
                desc: "Balanced frontier model.".into(),
                tags: vec!["coding".into(), "reasoning".into()],
                note: None,
            },
            ModelRecord {
                name: "Llama 5".into(),
                lab: Lab::Meta,
                date: "Q3 2026".into(),
                status: Status::Upcoming,
                logo: "🦙".into(),
                logo_bg: "#0a1a2a".into(),
                color: "#0668e1".into(),
                desc: "Next open-weights flagship.".into(),
                tags: vec!["open".into()],
                note: Some("Timing unconfirmed".into()),
            },
        ]
    }

    #[test]
    fn round_trip_is_field_for_field_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(dir.path().join("models.json"));

        let batch = sample_batch();
        cache.write(&batch).unwrap();
        assert_eq!(cache.read().unwrap(), batch);
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(dir.path().join("nested/data/models.json"));

        cache.write(&sample_batch()).unwrap();
        assert!(cache.path().exists());
    }

    #[test]
    fn overwrite_replaces_the_previous_batch() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(dir.path().join("models.json"));

        cache.write(&sample_batch()).unwrap();
        let smaller = vec![sample_batch().remove(0)];
        cache.write(&smaller).unwrap();
        assert_eq!(cache.read().unwrap(), smaller);
    }

    #[test]
    fn missing_file_reads_as_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let cache = CatalogCache::new(dir.path().join("absent.json"));
        assert!(cache.read().is_err());
    }
}
