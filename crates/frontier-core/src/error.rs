//! Unified error type exposed by **`frontier-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the catalog provider.  The variants map onto
//! the three failure classes the HTTP surface distinguishes: no credential
//! configured, upstream failure, malformed reply.


use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, FrontierError>;

#[derive(Debug, Error)]
pub enum FrontierError {
    /// Neither backend credential is present, so no provider could be
    /// selected at startup.
    #[error("no text-generation backend configured (set ANTHROPIC_API_KEY or OPENAI_API_KEY)")]
    BackendNotConfigured,

    /// The selected backend is present but does not recognise or support the
    /// requested `model`.
    #[error("backend does not support model `{model}`")]
    ModelNotSupported { model: String },

    /// The chosen backend's HTTP call failed, or its response body carried a
    /// vendor-reported error payload.
    #[error("upstream backend error: {0}")]
    Upstream(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The reply text, after fence stripping, was not a JSON array of
    /// catalog records.  Also covers a reply with no text segment at all.
    #[error("malformed model reply: {0}")]
    MalformedReply(String),

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the LLM provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reading or writing the on-disk fallback cache failed.
    #[error("cache i/o error: {0}")]
    Io(#[from] std::io::Error),
}
