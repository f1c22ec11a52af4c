//! The composable filter: three exact-match dimensions plus free-text
//! search, recomputed in full on every change.
//!
//! Filtering runs directly over the in-memory record list before anything is
//! rendered; filter state never round-trips through rendered markup.

use std::str::FromStr;

use frontier_catalog::record::{Lab, ModelRecord, Status};

/// Sentinel accepted by [`FilterSet::set`] to disarm a dimension.
pub const ALL: &str = "all";

/// One filter dimension: either disarmed or pinned to a single category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    /// Whether `value` passes this dimension.  `All` admits everything.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(only) => only == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Status,
    Lab,
    Capability,
}

/// The full active filter state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    pub status: Selection<Status>,
    pub lab: Selection<Lab>,
    pub capability: Selection<String>,
    pub search: String,
}

impl FilterSet {
    /// Set one dimension from its raw string form.  `"all"` disarms the
    /// dimension; an unknown category is treated as a no-op filter.
    pub fn set(&mut self, dimension: FilterDimension, value: &str) {
        match dimension {
            FilterDimension::Status => self.status = parse_selection(value),
            FilterDimension::Lab => self.lab = parse_selection(value),
            FilterDimension::Capability => {
                self.capability = if value == ALL || value.is_empty() {
                    Selection::All
                } else {
                    Selection::Only(value.to_owned())
                };
            }
        }
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    /// Reset all three dimensions to `All` and empty the search text.
    pub fn clear(&mut self) {
        *self = FilterSet::default();
    }

    /// Whether anything would be filtered at all (drives the "clear
    /// filters" affordance).
    pub fn is_active(&self) -> bool {
        !(self.status.is_all()
            && self.lab.is_all()
            && self.capability.is_all()
            && self.search.is_empty())
    }

    /// The raw string form of a dimension, for rendering pill state.
    pub fn value_of(&self, dimension: FilterDimension) -> String {
        match dimension {
            FilterDimension::Status => match &self.status {
                Selection::All => ALL.to_owned(),
                Selection::Only(status) => status.as_str().to_owned(),
            },
            FilterDimension::Lab => match &self.lab {
                Selection::All => ALL.to_owned(),
                Selection::Only(lab) => lab.as_str().to_owned(),
            },
            FilterDimension::Capability => match &self.capability {
                Selection::All => ALL.to_owned(),
                Selection::Only(tag) => tag.clone(),
            },
        }
    }

    /// The §"visible" conjunction: every dimension must admit the record and
    /// the search text must match somewhere.
    pub fn matches(&self, record: &ModelRecord) -> bool {
        self.status.admits(&record.status)
            && self.lab.admits(&record.lab)
            && self.admits_capability(record)
            && self.matches_search(record)
    }

    /// Filter a record list, preserving input order.
    pub fn visible<'a>(&self, records: &'a [ModelRecord]) -> Vec<&'a ModelRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    fn admits_capability(&self, record: &ModelRecord) -> bool {
        match &self.capability {
            Selection::All => true,
            Selection::Only(tag) => record.tags.iter().any(|t| t == tag),
        }
    }

    fn matches_search(&self, record: &ModelRecord) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let q = self.search.to_lowercase();
        // Tags are searched as one space-joined string, so a term spanning a
        // tag boundary also matches.
        record.name.to_lowercase().contains(&q)
            || record.desc.to_lowercase().contains(&q)
            || record.lab.as_str().contains(&q)
            || record.tags.join(" ").to_lowercase().contains(&q)
    }
}

fn parse_selection<T: FromStr>(value: &str) -> Selection<T> {
    if value == ALL {
        return Selection::All;
    }
    value.parse().map(Selection::Only).unwrap_or(Selection::All)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, lab: Lab, status: Status, tags: &[&str], desc: &str) -> ModelRecord {
        ModelRecord {
            name: name.into(),
            lab,
            date: "Feb 2026".into(),
            status,
            logo: "★".into(),
            logo_bg: "#111".into(),
            color: "#222".into(),
            desc: desc.into(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            note: None,
        }
    }

    fn sample() -> Vec<ModelRecord> {
        vec![
            record(
                "GPT-5.2",
                Lab::OpenAi,
                Status::Released,
                &["coding", "speed"],
                "Fast coding flagship.",
            ),
            record(
                "Claude Sonnet 4",
                Lab::Anthropic,
                Status::Released,
                &["reasoning"],
                "Balanced daily driver.",
            ),
            record(
                "Llama 5",
                Lab::Meta,
                Status::Upcoming,
                &["open", "video"],
                "Open-weights flagship.",
            ),
            record(
                "Grok 4.5",
                Lab::XAi,
                Status::Imminent,
                &["agents"],
                "Leaked benchmarks only.",
            ),
        ]
    }

    #[test]
    fn default_filter_shows_everything() {
        let filters = FilterSet::default();
        assert_eq!(filters.visible(&sample()).len(), 4);
        assert!(!filters.is_active());
    }

    #[test]
    fn dimensions_compose_as_a_conjunction() {
        let records = sample();
        let mut filters = FilterSet::default();

        filters.set(FilterDimension::Status, "released");
        assert_eq!(filters.visible(&records).len(), 2);

        filters.set(FilterDimension::Lab, "openai");
        let visible = filters.visible(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "GPT-5.2");

        filters.set(FilterDimension::Capability, "reasoning");
        assert!(filters.visible(&records).is_empty());
    }

    #[test]
    fn setting_a_dimension_to_all_never_hides_a_record() {
        let records = sample();
        let mut filters = FilterSet::default();
        filters.set(FilterDimension::Lab, "meta");
        filters.set_search("open");

        let narrowed: Vec<String> = filters
            .visible(&records)
            .iter()
            .map(|r| r.name.clone())
            .collect();

        let mut widened = filters.clone();
        widened.set(FilterDimension::Lab, ALL);
        let wide_names: Vec<String> = widened
            .visible(&records)
            .iter()
            .map(|r| r.name.clone())
            .collect();

        for name in &narrowed {
            assert!(wide_names.contains(name), "`{name}` vanished when widening");
        }
    }

    #[test]
    fn capability_pill_matches_whole_tags_only() {
        let records = sample();
        let mut filters = FilterSet::default();

        filters.set(FilterDimension::Capability, "coding");
        assert_eq!(filters.visible(&records).len(), 1);

        filters.set(FilterDimension::Capability, "agents");
        let visible = filters.visible(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Grok 4.5");

        // "cod" is not a tag, only a tag prefix.
        filters.set(FilterDimension::Capability, "cod");
        assert!(filters.visible(&records).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_across_name_desc_lab_and_tags() {
        let records = sample();
        let mut filters = FilterSet::default();

        filters.set_search("COD");
        // Matches "coding" tag and "coding flagship" description.
        assert_eq!(filters.visible(&records).len(), 1);

        filters.set_search("anthropic");
        assert_eq!(filters.visible(&records).len(), 1);

        filters.set_search("LLAMA");
        assert_eq!(filters.visible(&records).len(), 1);

        filters.set_search("zzz");
        assert!(filters.visible(&records).is_empty());
    }

    #[test]
    fn search_spanning_a_tag_boundary_matches_the_joined_string() {
        let records = sample();
        let mut filters = FilterSet::default();
        // "coding speed" only exists across the tag boundary.
        filters.set_search("coding speed");
        assert_eq!(filters.visible(&records).len(), 1);
    }

    #[test]
    fn released_record_scenario_from_the_contract() {
        let records = vec![record(
            "Nova",
            Lab::Other,
            Status::Released,
            &["coding", "speed"],
            "Coding-first model.",
        )];
        let mut filters = FilterSet::default();

        filters.set(FilterDimension::Capability, "coding");
        assert_eq!(filters.visible(&records).len(), 1);

        filters.set(FilterDimension::Capability, "agents");
        assert!(filters.visible(&records).is_empty());

        filters.clear();
        filters.set_search("cod");
        assert_eq!(filters.visible(&records).len(), 1);
    }

    #[test]
    fn clear_resets_every_dimension_and_the_search() {
        let mut filters = FilterSet::default();
        filters.set(FilterDimension::Status, "imminent");
        filters.set(FilterDimension::Lab, "xai");
        filters.set(FilterDimension::Capability, "agents");
        filters.set_search("grok");
        assert!(filters.is_active());

        filters.clear();
        assert_eq!(filters, FilterSet::default());
        assert!(!filters.is_active());
    }

    #[test]
    fn unknown_categories_fall_back_to_the_no_op_filter() {
        let mut filters = FilterSet::default();
        filters.set(FilterDimension::Status, "beta");
        filters.set(FilterDimension::Lab, "acme");
        assert!(!filters.is_active());
        assert_eq!(filters.visible(&sample()).len(), 4);
    }
}
