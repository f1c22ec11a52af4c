//! Presenter state: the in-memory record list, the seed fallback, the data
//! source marker and the active filters — one explicit struct instead of
//! ambient globals.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use frontier_catalog::record::{ModelRecord, Status};
use frontier_core::error::Result;

use crate::filter::{FilterDimension, FilterSet};
use crate::render;

/// Where the currently presented batch came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Nothing loaded yet (no cache, no fetch).
    Empty,
    /// A live fetch succeeded at the given instant.
    Live { fetched_at: DateTime<Utc> },
    /// The live fetch failed; showing the seed cache.
    CachedFallback,
}

impl CatalogSource {
    /// Status line shown under the header and in the footer.
    pub fn status_line(&self) -> String {
        match self {
            CatalogSource::Empty => "No data loaded yet".to_owned(),
            CatalogSource::Live { fetched_at } => format!(
                "Last updated: {}",
                fetched_at.format("%I:%M %p — %b %-d, %Y")
            ),
            CatalogSource::CachedFallback => "API unavailable — showing cached data".to_owned(),
        }
    }
}

/// Aggregate stats, recomputed on every full render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub released: usize,
    /// Everything not yet released (upcoming + imminent).
    pub upcoming: usize,
    /// Number of distinct labs represented.
    pub labs: usize,
}

impl CatalogStats {
    pub fn of(records: &[ModelRecord]) -> Self {
        let released = records
            .iter()
            .filter(|r| r.status == Status::Released)
            .count();
        let labs = records.iter().map(|r| r.lab).collect::<BTreeSet<_>>().len();
        Self {
            total: records.len(),
            released,
            upcoming: records.len() - released,
            labs,
        }
    }
}

/// The presenter.  Holds the presented batch, the seed fallback and the
/// active filters; rendering and filtering are pure functions of this state.
#[derive(Debug, Clone)]
pub struct CatalogView {
    pub records: Vec<ModelRecord>,
    pub seed: Vec<ModelRecord>,
    pub source: CatalogSource,
    pub filters: FilterSet,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            seed: Vec::new(),
            source: CatalogSource::Empty,
            filters: FilterSet::default(),
        }
    }

    /// Install the startup seed read from the fallback cache.  A cache-read
    /// failure upstream simply means this is never called; the view then
    /// starts empty.
    pub fn load_seed(&mut self, seed: Vec<ModelRecord>) {
        self.seed = seed;
    }

    /// Adopt a freshly fetched batch: whole-list swap, never an in-place
    /// mutation.
    pub fn adopt(&mut self, batch: Vec<ModelRecord>) {
        self.records = batch;
        self.source = CatalogSource::Live {
            fetched_at: Utc::now(),
        };
    }

    /// The fetch failed: present the seed and mark the data as stale.
    pub fn fall_back(&mut self) {
        self.records = self.seed.clone();
        self.source = CatalogSource::CachedFallback;
    }

    /// Convenience wrapper over [`Self::adopt`] / [`Self::fall_back`]
    /// mirroring the fetch contract.
    pub fn apply_fetch(&mut self, outcome: Result<Vec<ModelRecord>>) {
        match outcome {
            Ok(batch) => self.adopt(batch),
            Err(_) => self.fall_back(),
        }
    }

    pub fn set_filter(&mut self, dimension: FilterDimension, value: &str) {
        self.filters.set(dimension, value);
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.set_search(text);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Records passing the active filters, in original order.
    pub fn visible(&self) -> Vec<&ModelRecord> {
        self.filters.visible(&self.records)
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats::of(&self.records)
    }

    /// Render the full page for the current state.
    pub fn render(&self) -> String {
        render::render_page(&self.records, &self.filters, &self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_catalog::record::Lab;
    use frontier_core::error::FrontierError;

    fn record(name: &str, lab: Lab, status: Status) -> ModelRecord {
        ModelRecord {
            name: name.into(),
            lab,
            date: "Feb 2026".into(),
            status,
            logo: "★".into(),
            logo_bg: "#111".into(),
            color: "#222".into(),
            desc: "desc".into(),
            tags: vec!["coding".into()],
            note: None,
        }
    }

    #[test]
    fn successful_fetch_swaps_the_whole_list() {
        let mut view = CatalogView::new();
        view.load_seed(vec![record("Old", Lab::Google, Status::Released)]);

        view.apply_fetch(Ok(vec![
            record("New A", Lab::OpenAi, Status::Released),
            record("New B", Lab::Meta, Status::Upcoming),
        ]));

        assert_eq!(view.records.len(), 2);
        assert!(matches!(view.source, CatalogSource::Live { .. }));
        assert!(view.source.status_line().starts_with("Last updated:"));
    }

    #[test]
    fn failed_fetch_presents_the_seed_and_marks_it_stale() {
        let mut view = CatalogView::new();
        view.load_seed(vec![record("Seeded", Lab::Google, Status::Released)]);

        view.apply_fetch(Err(FrontierError::BackendNotConfigured));

        assert_eq!(view.records.len(), 1);
        assert_eq!(view.records[0].name, "Seeded");
        assert_eq!(view.source, CatalogSource::CachedFallback);
        assert_eq!(
            view.source.status_line(),
            "API unavailable — showing cached data"
        );
    }

    #[test]
    fn failed_fetch_with_no_seed_presents_an_empty_list() {
        let mut view = CatalogView::new();
        view.apply_fetch(Err(FrontierError::BackendNotConfigured));
        assert!(view.records.is_empty());
        assert!(view.visible().is_empty());
    }

    #[test]
    fn stats_count_released_upcoming_and_distinct_labs() {
        let mut view = CatalogView::new();
        view.adopt(vec![
            record("A", Lab::OpenAi, Status::Released),
            record("B", Lab::OpenAi, Status::Imminent),
            record("C", Lab::Anthropic, Status::Upcoming),
        ]);

        let stats = view.stats();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.released, 1);
        assert_eq!(stats.upcoming, 2);
        assert_eq!(stats.labs, 2);
    }

    #[test]
    fn rendering_twice_with_the_same_state_is_identical() {
        let mut view = CatalogView::new();
        view.adopt(vec![
            record("A", Lab::OpenAi, Status::Released),
            record("B", Lab::Meta, Status::Upcoming),
        ]);
        view.set_filter(FilterDimension::Status, "released");
        view.set_search("a");

        assert_eq!(view.visible(), view.visible());
        assert_eq!(view.render(), view.render());
    }
}
