use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericMessage, model::Model};

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider (Anthropic, OpenAI, …) and extracts the reply text.
///
/// The trait is intentionally minimal:
///
/// * **One async-ish method** – `complete`, which performs a *single*
///   non-streaming round-trip and resolves to the **first non-empty textual
///   segment** of the model's reply.  No retry, no backoff.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.  Object safety matters here: the server
/// picks one of two backends at startup and holds it behind
/// `Box<dyn TextCompletionProvider>`.
pub trait TextCompletionProvider: Send + Sync {
    /// Execute the prompt and return the model's reply text.
    ///
    /// Implementations must detect a vendor-reported error payload inside a
    /// well-formed response wrapper and surface it as
    /// [`crate::FrontierError::Upstream`] rather than returning its body as
    /// reply text.
    fn complete<'p>(
        &'p self,
        params: CompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>>;
}

#[derive(Debug, Clone)]
pub struct CompleteParameters {
    pub messages: Vec<GenericMessage>,
    pub model: Model,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f64>,
}

impl CompleteParameters {
    pub fn new(messages: Vec<GenericMessage>, model: Model) -> Self {
        Self {
            messages,
            model,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn messages(&self) -> &Vec<GenericMessage> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}
