//! The catalog's one entity: a model release record.
//!
//! A batch of records is created wholesale by the provider (replacing any
//! prior batch) or loaded once at startup from the fallback cache; records
//! are never individually mutated.
//!
//! The serde shape matches the wire/cache format the prompt asks the LLM
//! for: camelCase field names and an explicit `null` for an absent note.

use std::fmt::Display;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One catalog entry describing an AI model's status, provenance and
/// capabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModelRecord {
    /// Display name, e.g. `"Claude Sonnet 4"`.
    pub name: String,
    /// Organization that produced the model.
    pub lab: Lab,
    /// Free-form short date label, e.g. `"Feb 2026"` or `"Q2 2026"`.
    pub date: String,
    /// Lifecycle stage.
    pub status: Status,
    /// Single glyph (emoji) shown as the logo.
    pub logo: String,
    /// Dark hex color behind the logo glyph.
    pub logo_bg: String,
    /// Brand-appropriate hex accent color.
    pub color: String,
    /// 2-3 sentence description of capabilities and positioning.
    pub desc: String,
    /// Capability labels; order is irrelevant for matching but preserved for
    /// display.
    pub tags: Vec<String>,
    /// Optional short warning / note, `null` when absent.
    pub note: Option<String>,
}

/// The organization that produced a model; a fixed enumerated set plus an
/// overflow category.
///
/// Unknown wire values fold into [`Lab::Other`] instead of failing the whole
/// batch, so vendor drift degrades into the overflow pill rather than into a
/// parse error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Lab {
    OpenAi,
    Anthropic,
    Google,
    Meta,
    XAi,
    DeepSeek,
    Mistral,
    #[serde(other)]
    Other,
}

impl Lab {
    /// Canonical lowercase wire name, also used for filter matching.
    pub fn as_str(&self) -> &'static str {
        match self {
            Lab::OpenAi => "openai",
            Lab::Anthropic => "anthropic",
            Lab::Google => "google",
            Lab::Meta => "meta",
            Lab::XAi => "xai",
            Lab::DeepSeek => "deepseek",
            Lab::Mistral => "mistral",
            Lab::Other => "other",
        }
    }

    /// Every lab, in pill display order.
    pub const ALL: [Lab; 8] = [
        Lab::OpenAi,
        Lab::Anthropic,
        Lab::Google,
        Lab::Meta,
        Lab::XAi,
        Lab::DeepSeek,
        Lab::Mistral,
        Lab::Other,
    ];
}

impl Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lab {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lab::ALL
            .into_iter()
            .find(|lab| lab.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// Lifecycle stage of a model.
///
/// Deliberately strict: a status outside the vocabulary fails the batch
/// parse, surfacing vendor drift instead of silently rendering cards no
/// filter can reach.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Launched in the last ~3 months.
    Released,
    /// Expected in the next 1-6 months.
    Upcoming,
    /// Announced or leaked, expected within ~4 weeks.
    Imminent,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Released => "released",
            Status::Upcoming => "upcoming",
            Status::Imminent => "imminent",
        }
    }

    /// Human label shown on the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Released => "Released",
            Status::Upcoming => "Expected",
            Status::Imminent => "Imminent",
        }
    }

    /// Every status, in pill display order.
    pub const ALL: [Status; 3] = [Status::Released, Status::Imminent, Status::Upcoming];
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r##"{
            "name": "Claude Sonnet 4",
            "lab": "anthropic",
            "date": "May 2025",
            "status": "released",
            "logo": "✴️",
            "logoBg": "#1a1208",
            "color": "#d97706",
            "desc": "Balanced frontier model.",
            "tags": ["coding", "reasoning"],
            "note": null
        }"##
    }

    #[test]
    fn wire_shape_uses_camel_case_and_nullable_note() {
        let record: ModelRecord = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(record.lab, Lab::Anthropic);
        assert_eq!(record.status, Status::Released);
        assert_eq!(record.note, None);

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["logoBg"], "#1a1208");
        assert!(json["note"].is_null());
    }

    #[test]
    fn unknown_lab_folds_into_other() {
        let json = sample_json().replace("\"anthropic\"", "\"some-startup\"");
        let record: ModelRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record.lab, Lab::Other);
    }

    #[test]
    fn unknown_status_fails_the_parse() {
        let json = sample_json().replace("\"released\"", "\"beta\"");
        assert!(serde_json::from_str::<ModelRecord>(&json).is_err());
    }

    #[test]
    fn category_round_trip_through_from_str() {
        for lab in Lab::ALL {
            assert_eq!(lab.as_str().parse::<Lab>().unwrap(), lab);
        }
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
        }
        assert!("frontier".parse::<Status>().is_err());
    }
}
