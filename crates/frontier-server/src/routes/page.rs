use axum::extract::{Query, State};
use axum::response::Html;
use serde::Deserialize;

use frontier_view::{FilterDimension, FilterSet, render};

use crate::state::AppState;

/// Filter state carried in the query string; absent parameters leave the
/// dimension disarmed.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub status: Option<String>,
    pub lab: Option<String>,
    pub cap: Option<String>,
    pub q: Option<String>,
}

impl PageQuery {
    fn into_filters(self) -> FilterSet {
        let mut filters = FilterSet::default();
        if let Some(status) = &self.status {
            filters.set(FilterDimension::Status, status);
        }
        if let Some(lab) = &self.lab {
            filters.set(FilterDimension::Lab, lab);
        }
        if let Some(cap) = &self.cap {
            filters.set(FilterDimension::Capability, cap);
        }
        if let Some(q) = self.q {
            filters.set_search(q);
        }
        filters
    }
}

/// `GET /`: render the catalog from the in-memory batch with the requested
/// filters applied.
pub async fn catalog_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let filters = query.into_filters();
    let view = state.view().read().await;
    Html(render::render_page(&view.records, &filters, &view.source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontier_view::Selection;

    #[test]
    fn query_parameters_map_onto_filter_dimensions() {
        let query = PageQuery {
            status: Some("released".to_owned()),
            lab: Some("meta".to_owned()),
            cap: Some("coding".to_owned()),
            q: Some("llama".to_owned()),
        };

        let filters = query.into_filters();
        assert!(!filters.status.is_all());
        assert!(!filters.lab.is_all());
        assert_eq!(filters.capability, Selection::Only("coding".to_owned()));
        assert_eq!(filters.search, "llama");
    }

    #[test]
    fn absent_parameters_leave_every_dimension_disarmed() {
        let filters = PageQuery::default().into_filters();
        assert!(!filters.is_active());
    }
}
