use std::borrow::Cow;

use frontier_core::model::{AnthropicModel, Model};

pub const CLAUDE_SONNET_4: &str = "claude-sonnet-4-20250514";
pub const CLAUDE_HAIKU_3_5: &str = "claude-3-5-haiku-20241022";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    if let Model::Custom(custom) = model {
        return Some(Cow::Borrowed(custom));
    }

    let Model::Anthropic(anthropic_model) = model else {
        return None;
    };

    match anthropic_model {
        AnthropicModel::ClaudeSonnet4 => Some(CLAUDE_SONNET_4.into()),
        AnthropicModel::ClaudeHaiku35 => Some(CLAUDE_HAIKU_3_5.into()),
    }
}
