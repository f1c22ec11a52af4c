//! HTTP surface: the rendered catalog page, the fetch endpoint and the raw
//! cache file.

pub mod catalog;
pub mod page;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: AppState, data_dir: &std::path::Path) -> Router {
    Router::new()
        .route("/", get(page::catalog_page))
        .route("/api/fetch-models", post(catalog::fetch_models))
        .nest_service("/data", ServeDir::new(data_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
