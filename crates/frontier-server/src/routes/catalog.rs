use axum::Json;
use axum::extract::State;
use tracing::error;

use frontier_catalog::record::ModelRecord;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// `POST /api/fetch-models`: one live round trip to the selected backend.
/// Returns the fresh batch, or the error envelope when the backend is
/// unconfigured (500) or the round trip / reply parse failed (502).
pub async fn fetch_models(State(state): State<AppState>) -> ApiResult<Json<Vec<ModelRecord>>> {
    match state.refresh().await {
        Ok(batch) => Ok(Json(batch)),
        Err(err) => {
            error!(%err, "catalog fetch failed");
            Err(ApiError::from(err))
        }
    }
}
