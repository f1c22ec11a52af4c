use frontier_core::error::FrontierError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum OpenAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("OpenAI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The HTTP exchange succeeded but the body carried OpenAI's structured
    /// error envelope (`{"error": {...}}`).
    #[error("OpenAI reported an error ({kind}): {message}")]
    Vendor { kind: String, message: String },

    #[error("OpenAI format error: {0}")]
    Format(String),
}

impl From<OpenAiError> for FrontierError {
    fn from(value: OpenAiError) -> Self {
        FrontierError::Upstream(Box::new(value))
    }
}
