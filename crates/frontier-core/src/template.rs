//! Abstractions that tie a **prompt** to a **typed response**.
//!
//! A developer usually needs only two traits to go from “some string
//! fragments” to “ready-to-send payload”:
//!
//! 1. [`IntoPrompt`] – turns *any* value into a list of chat messages.
//! 2. [`PromptTemplate`] – adds the expected, strongly-typed response shape.
//!
//! The blanket constraints on `Output` (`JsonSchema + Deserialize`) let the
//! catalog provider derive a JSON Schema to embed in the prompt and parse
//! the reply without the caller naming the type twice.
//!
//! ```rust
//! use frontier_core::template::{IntoPrompt, PromptTemplate};
//! use frontier_core::generic::{GenericMessage, GenericRole};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct Hello { greeting: String }
//!
//! struct HelloPrompt;
//!
//! impl IntoPrompt for HelloPrompt {
//!     type Message = GenericMessage;
//!     fn into_prompt(self) -> Vec<Self::Message> {
//!         vec![GenericMessage::new("Say hello!".into(), GenericRole::User)]
//!     }
//! }
//!
//! impl PromptTemplate for HelloPrompt {
//!     type Output = Hello;
//! }
//! ```
use schemars::JsonSchema;
use serde::Deserialize;

/// High-level description of a prompt.
///
/// Implement this trait **in addition** to [`IntoPrompt`] to specify the
/// strongly-typed Rust value you expect back from the LLM.  Which concrete
/// model answers is decided by the caller per backend, not by the prompt.
pub trait PromptTemplate: IntoPrompt {
    /// Type produced by the LLM and returned to the caller.
    type Output: JsonSchema + for<'de> Deserialize<'de>;
}

/// Converts a value into a series of chat messages.
///
/// By making the `Message` type an **associated type** we keep the trait
/// flexible without resorting to dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// Convenience implementation so a single [`crate::generic::GenericMessage`]
/// can be passed directly to a prompt chain without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
