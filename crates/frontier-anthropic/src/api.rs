//! Request / response structs for Anthropic's *Messages* API, trimmed to the
//! non-streaming subset the catalog service uses.
//!
//! Anthropic differs from OpenAI in two ways that matter here: the system
//! prompt travels in a dedicated `system` field instead of a message, and
//! the reply is a list of typed content blocks rather than "choices".

use serde::{Deserialize, Serialize};

use frontier_core::generic::{GenericMessage, GenericRole};

#[derive(Debug, Serialize, Clone)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl MessagesRequest {
    pub fn new(model: String, max_tokens: u32, messages: Vec<AnthropicMessage>) -> Self {
        Self {
            model,
            max_tokens,
            messages,
            system: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: String) -> Self {
        self.system = Some(system);
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnthropicMessage {
    pub role: AnthropicRole,
    pub content: String,
}

/// Roles accepted inside the `messages` array.  System content is hoisted
/// into [`MessagesRequest::system`] by the adapter, so it never appears here.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnthropicRole {
    User,
    Assistant,
}

/// Split generic messages into the Messages-API shape: system fragments are
/// joined into one system string, everything else keeps its order.
pub fn convert_messages(messages: Vec<GenericMessage>) -> (Option<String>, Vec<AnthropicMessage>) {
    let mut system_parts: Vec<String> = Vec::new();
    let mut converted = Vec::new();

    for message in messages {
        match message.role {
            GenericRole::System => system_parts.push(message.content),
            GenericRole::User => converted.push(AnthropicMessage {
                role: AnthropicRole::User,
                content: message.content,
            }),
            GenericRole::Assistant => converted.push(AnthropicMessage {
                role: AnthropicRole::Assistant,
                content: message.content,
            }),
        }
    }

    let system = if system_parts.is_empty() {
        None
    } else {
        Some(system_parts.join("\n\n"))
    };
    (system, converted)
}

#[derive(Debug, Deserialize)]
pub struct MessagesResponse {
    pub id: Option<String>,
    pub content: Vec<ContentBlock>,
    pub model: Option<String>,
    pub stop_reason: Option<String>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy)]
pub struct Usage {
    pub input_tokens: i64,
    pub output_tokens: i64,
}

/// Anthropic's structured error envelope.  The API can return this inside a
/// well-formed HTTP response, so the client probes for it before parsing the
/// success shape.
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
}
