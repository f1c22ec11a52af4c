//! Reply normalization: the pipeline between raw model text and typed
//! records.
//!
//! Models routinely wrap JSON in Markdown code fences even when told not to,
//! so the pipeline is: trim → strip a leading/trailing fence pair (with or
//! without a `json` language tag, any case) → parse as a JSON array of
//! [`ModelRecord`].  Anything that survives fence stripping but is not such
//! an array is a [`FrontierError::MalformedReply`].

use frontier_core::error::{FrontierError, Result};

use crate::record::ModelRecord;

/// Remove leading/trailing code-fence markers and surrounding whitespace.
///
/// A bare reply passes through untouched, so fenced and unfenced variants of
/// the same payload normalize to the identical string.
pub fn strip_fences(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop an optional language tag ("json", "JSON", …) up to the first
        // line break.
        text = match rest.split_once('\n') {
            Some((tag, body)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => body,
            _ => rest,
        };
    }

    let trimmed = text.trim_end();
    if let Some(rest) = trimmed.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

/// Normalize `raw` and parse it into a record batch.
pub fn parse_records(raw: &str) -> Result<Vec<ModelRecord>> {
    let clean = strip_fences(raw);
    if clean.is_empty() {
        return Err(FrontierError::MalformedReply("reply text was empty".into()));
    }

    serde_json::from_str(clean).map_err(|e| {
        FrontierError::MalformedReply(format!(
            "reply is not a JSON array of model records: {e}. Content: {}",
            clean.chars().take(200).collect::<String>()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Lab, Status};

    const BARE: &str = r##"[{
        "name": "GPT-5.2",
        "lab": "openai",
        "date": "Dec 2025",
        "status": "released",
        "logo": "🌀",
        "logoBg": "#0a1628",
        "color": "#10a37f",
        "desc": "Flagship reasoning model.",
        "tags": ["coding", "reasoning"],
        "note": null
    }]"##;

    #[test]
    fn fenced_and_bare_replies_parse_identically() {
        let fenced = format!("```json\n{BARE}\n```");
        let upper = format!("```JSON\n{BARE}\n```");
        let untagged = format!("```\n{BARE}\n```");

        let expected = parse_records(BARE).unwrap();
        assert_eq!(parse_records(&fenced).unwrap(), expected);
        assert_eq!(parse_records(&upper).unwrap(), expected);
        assert_eq!(parse_records(&untagged).unwrap(), expected);

        assert_eq!(expected.len(), 1);
        assert_eq!(expected[0].lab, Lab::OpenAi);
        assert_eq!(expected[0].status, Status::Released);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let padded = format!("\n\n  ```json\n{BARE}\n```  \n");
        assert_eq!(parse_records(&padded).unwrap(), parse_records(BARE).unwrap());
    }

    #[test]
    fn empty_reply_is_malformed() {
        for raw in ["", "   \n", "```json\n```"] {
            match parse_records(raw) {
                Err(FrontierError::MalformedReply(msg)) => {
                    assert!(msg.contains("empty"), "unexpected message: {msg}")
                }
                other => panic!("expected MalformedReply, got {other:?}"),
            }
        }
    }

    #[test]
    fn prose_reply_is_malformed_with_content_preview() {
        let raw = "I'm sorry, I can't browse the web.";
        match parse_records(raw) {
            Err(FrontierError::MalformedReply(msg)) => {
                assert!(msg.contains("I'm sorry"), "unexpected message: {msg}")
            }
            other => panic!("expected MalformedReply, got {other:?}"),
        }
    }

    #[test]
    fn object_instead_of_array_is_malformed() {
        assert!(parse_records(r#"{"models": []}"#).is_err());
    }
}
