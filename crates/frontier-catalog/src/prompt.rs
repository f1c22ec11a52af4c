//! The one prompt this service sends: a deterministic instruction asking the
//! model for the current release catalog.
//!
//! The instruction embeds the current date (so "released" / "upcoming" are
//! anchored in time) and the JSON Schema derived from [`ModelRecord`], which
//! carries the exact field shape and the categorical constraints for `lab`
//! and `status`.  Everything else is the rule list: status vocabulary,
//! record counts and the raw-JSON-only reply requirement.

use chrono::{NaiveDate, Utc};

use frontier_core::{
    generic::{GenericMessage, GenericRole},
    schema_util::derive_response_schema,
    template::{IntoPrompt, PromptTemplate},
};
use frontier_prompt::builder::PromptBuilder;

use crate::record::ModelRecord;

/// Capability vocabulary the prompt offers the model for `tags`.
pub const TAG_VOCABULARY: [&str; 7] = [
    "coding",
    "reasoning",
    "multimodal",
    "agents",
    "open",
    "video",
    "speed",
];

/// Prompt fragment requesting the full model catalog.
pub struct CatalogPrompt {
    today: NaiveDate,
}

impl Default for CatalogPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPrompt {
    /// Anchor the prompt at today's (UTC) date.
    pub fn new() -> Self {
        Self::for_date(Utc::now().date_naive())
    }

    /// Anchor the prompt at a fixed date.  With the date pinned the rendered
    /// instruction is fully deterministic, which the tests rely on.
    pub fn for_date(today: NaiveDate) -> Self {
        Self { today }
    }
}

impl IntoPrompt for CatalogPrompt {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        let schema = derive_response_schema::<Vec<ModelRecord>>();

        let builder = PromptBuilder::new()
            .add_line(format!(
                "You are a real-time AI model intelligence tracker. Today is {}.",
                self.today.format("%B %-d, %Y")
            ))
            .add_blank_line()
            .add_line(
                "Return a JSON array of the most important recent and upcoming AI models. \
                 Include ALL major labs: OpenAI, Anthropic, Google, Meta, xAI, DeepSeek, \
                 Mistral, and others relevant.",
            )
            .add_blank_line()
            .add_line("Every element of the array must validate against this JSON Schema:")
            .add_text_json(format!("{schema:#}"))
            .add_blank_line()
            .add_line("Rules:")
            .add_list_item("\"imminent\" = announced/leaked and expected within ~4 weeks")
            .add_list_item("\"upcoming\" = expected in next 1-6 months")
            .add_list_item("\"released\" = launched in last ~3 months")
            .add_list_item("Include 6-8 released and 4-6 upcoming/imminent")
            .add_list_item(format!(
                "\"tags\" values come from: {}",
                TAG_VOCABULARY.join(", ")
            ))
            .add_list_item(
                "\"logo\" is a single relevant emoji; \"logoBg\" a dark hex color; \
                 \"color\" a brand-appropriate hex accent",
            )
            .add_list_item("Be accurate and specific about benchmarks/capabilities")
            .add_list_item("Respond with ONLY the raw JSON array, no markdown, no explanation");

        vec![GenericMessage::new(builder.finalize(), GenericRole::User)]
    }
}

impl PromptTemplate for CatalogPrompt {
    type Output = Vec<ModelRecord>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(prompt: CatalogPrompt) -> String {
        let mut messages = prompt.into_prompt();
        assert_eq!(messages.len(), 1);
        let message = messages.remove(0);
        assert_eq!(message.role, GenericRole::User);
        message.content
    }

    #[test]
    fn prompt_is_deterministic_for_a_fixed_date() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        let first = render(CatalogPrompt::for_date(date));
        let second = render(CatalogPrompt::for_date(date));
        assert_eq!(first, second);
        assert!(first.contains("Today is February 7, 2026."));
    }

    #[test]
    fn prompt_embeds_schema_and_status_vocabulary() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 7).unwrap();
        let content = render(CatalogPrompt::for_date(date));

        assert!(content.contains("```json"));
        assert!(content.contains("logoBg"));
        // Categorical constraints for `status` come through the schema.
        for status in ["released", "upcoming", "imminent"] {
            assert!(content.contains(status), "missing status `{status}`");
        }
        assert!(content.contains("ONLY the raw JSON array"));
    }
}
