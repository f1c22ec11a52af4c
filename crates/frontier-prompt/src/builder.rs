//! Builder‐style helper for constructing **Markdown prompts**.
//!
//! Writing verbose Markdown strings inline is tedious and error‐prone.
//! `PromptBuilder` offers a fluent API that lets you focus on the *content*
//! instead of the syntax.  Every method returns `self`, enabling
//! call-chaining:
//!
//! ```rust
//! use frontier_prompt::builder::PromptBuilder;
//!
//! let md = PromptBuilder::new()
//!     .add_line("You are a release tracker.")
//!     .add_blank_line()
//!     .add_line("Rules:")
//!     .add_list_item("be accurate")
//!     .add_list_item("respond with raw JSON only")
//!     .finalize();
//!
//! assert!(md.contains("- be accurate"));
//! ```
//!
//! The builder performs **no validation** besides `expect`ing that writing to
//! the internal `String` never fails (which it shouldn’t).  It also refrains
//! from smart-formatting to stay predictable—newlines and whitespace are
//! emitted exactly as requested.

use std::fmt::{Display, Write as _};

/// Fluent helper to produce markdown fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you’re done, call [`Self::finalize`] to obtain the assembled markdown.
pub struct PromptBuilder {
    buffer: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a fresh, empty builder.
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Add a plain line of text and a trailing newline.
    pub fn add_line(mut self, line: impl Display) -> Self {
        writeln!(self.buffer, "{line}").expect("failed to write buffer");
        self
    }

    /// Add a key–value pair in **bold**:
    /// `**Key**: Value`
    pub fn add_key_value(mut self, key: impl Display, value: impl Display) -> Self {
        writeln!(self.buffer, "**{key}**: {value}").expect("failed to write buffer");
        self
    }

    /// Add a `- item` bullet line.
    pub fn add_list_item(mut self, item: impl Display) -> Self {
        writeln!(self.buffer, "- {item}").expect("failed to write buffer");
        self
    }

    /// Embed a code block fenced as `json`.
    pub fn add_text_json(self, content: impl Display) -> Self {
        self.add_line("```json").add_line(content).add_line("```")
    }

    /// Insert a single blank line.
    pub fn add_blank_line(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Retrieve the accumulated markdown and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_emitted_verbatim_in_order() {
        let md = PromptBuilder::new()
            .add_line("first")
            .add_blank_line()
            .add_key_value("Key", "value")
            .add_list_item("bullet")
            .finalize();

        assert_eq!(md, "first\n\n**Key**: value\n- bullet\n");
    }

    #[test]
    fn json_block_is_fenced() {
        let md = PromptBuilder::new().add_text_json("{\"a\":1}").finalize();
        assert_eq!(md, "```json\n{\"a\":1}\n```\n");
    }
}
