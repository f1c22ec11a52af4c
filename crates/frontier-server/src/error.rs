//! HTTP error envelope: every API failure becomes `{"error": "..."}` with a
//! status that distinguishes our misconfiguration (500) from a bad upstream
//! round trip (502).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use frontier_core::FrontierError;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<FrontierError> for ApiError {
    fn from(err: FrontierError) -> Self {
        let status = match &err {
            FrontierError::BackendNotConfigured | FrontierError::ModelNotSupported { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            FrontierError::Upstream(_)
            | FrontierError::MalformedReply(_)
            | FrontierError::Serialization(_)
            | FrontierError::Io(_) => StatusCode::BAD_GATEWAY,
        };
        let message = match &err {
            FrontierError::BackendNotConfigured => {
                "No API key configured. Set ANTHROPIC_API_KEY or OPENAI_API_KEY.".to_owned()
            }
            other => other.to_string(),
        };
        Self { status, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
