//! Model identifiers used throughout the **frontier** workspace.
//!
//! The enum hierarchy keeps the *public* API blissfully simple while allowing
//! each provider crate to map the variants onto its own naming scheme.  As a
//! consequence you never have to type literal strings such as
//! `"claude-sonnet-4-20250514"` in application code—pick an enum variant and
//! let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. **Provider-specific enum**
//!    Add the variant to the sub-enum (`AnthropicModel`, `OpenAiModel`).
//! 2. **Mapping layer**
//!    Update the mapping function in the provider crate
//!    (`frontier_anthropic::model_map::map_model`, etc.).
//! 3. **Compile-time safety**
//!    The compiler will tell you if you forgot to handle the new variant in
//!    `From<T> for Model` or in provider match statements.

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in Anthropic models (Messages API).
    Anthropic(AnthropicModel),
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Any provider / model name not yet covered by a dedicated enum.  Use
    /// this if you run a self-hosted or beta model.
    Custom(&'static str),
}

/// Models **officially** supported by the Anthropic back-end.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnthropicModel {
    ClaudeSonnet4,
    ClaudeHaiku35,
}

/// Models **officially** supported by the OpenAI back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
    Gpt4oMini,
}

impl From<AnthropicModel> for Model {
    fn from(val: AnthropicModel) -> Self {
        Model::Anthropic(val)
    }
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}
