use std::{future::Future, pin::Pin, sync::Arc};

use frontier_core::{
    error::{FrontierError, Result},
    provider::{CompleteParameters, TextCompletionProvider},
};
use tracing::debug;

use crate::{OpenAiAdapter, api::ChatCompletionRequest, model_map::map_model};

impl TextCompletionProvider for OpenAiAdapter {
    fn complete<'p>(
        &'p self,
        params: CompleteParameters,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'p>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let model = map_model(&params.model).ok_or(FrontierError::ModelNotSupported {
                model: format!("{:?}", params.model),
            })?;

            let messages = params.messages.into_iter().map(Into::into).collect();
            let mut request = ChatCompletionRequest::new(model.into_owned(), messages);
            if let Some(max_tokens) = params.max_tokens {
                request = request.with_max_tokens(max_tokens);
            }
            if let Some(temperature) = params.temperature {
                request = request.with_temperature(temperature);
            }

            let mut response = client.chat_completion(request).await?;
            debug!(choices = response.choices.len(), "openai reply received");

            let Some(first_choice) = (!response.choices.is_empty())
                .then(|| response.choices.remove(0))
            else {
                return Err(FrontierError::MalformedReply(
                    "reply contained no choices".into(),
                ));
            };

            first_choice
                .message
                .content
                .filter(|text| !text.trim().is_empty())
                .ok_or_else(|| {
                    FrontierError::MalformedReply("reply contained no text segment".into())
                })
        })
    }
}
