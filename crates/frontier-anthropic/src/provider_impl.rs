use std::{future::Future, pin::Pin, sync::Arc};

use frontier_core::{
    error::{FrontierError, Result},
    provider::{CompleteParameters, TextCompletionProvider},
};
use tracing::debug;

use crate::{
    AnthropicAdapter,
    api::{MessagesRequest, convert_messages},
    model_map::map_model,
};

/// Anthropic always requires `max_tokens`; this floor only applies when the
/// caller didn't set one.
const FALLBACK_MAX_TOKENS: u32 = 1024;

impl TextCompletionProvider for AnthropicAdapter {
    fn complete<'p>(
        &'p self,
        params: CompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model).ok_or(FrontierError::ModelNotSupported {
                model: format!("{:?}", params.model),
            })?;

            let (system, messages) = convert_messages(params.messages);
            let mut request = MessagesRequest::new(
                model.into_owned(),
                params.max_tokens.unwrap_or(FALLBACK_MAX_TOKENS),
                messages,
            );
            if let Some(system) = system {
                request = request.with_system(system);
            }
            if let Some(temperature) = params.temperature {
                request = request.with_temperature(temperature);
            }

            let response = client.messages(request).await?;
            debug!(
                stop_reason = response.stop_reason.as_deref().unwrap_or("none"),
                blocks = response.content.len(),
                "anthropic reply received"
            );

            // First non-empty text block wins; thinking or other block kinds
            // are skipped.
            response
                .content
                .into_iter()
                .filter(|block| block.kind == "text")
                .filter_map(|block| block.text)
                .find(|text| !text.trim().is_empty())
                .ok_or_else(|| {
                    FrontierError::MalformedReply("reply contained no text segment".into())
                })
        })
    }
}
