use frontier_core::error::FrontierError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum AnthropicError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Anthropic returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// The HTTP exchange succeeded but the body carried Anthropic's
    /// structured error envelope (`{"type":"error", ...}`).
    #[error("Anthropic reported an error ({kind}): {message}")]
    Vendor { kind: String, message: String },

    #[error("Anthropic format error: {0}")]
    Format(String),
}

impl From<AnthropicError> for FrontierError {
    fn from(value: AnthropicError) -> Self {
        FrontierError::Upstream(Box::new(value))
    }
}
