use tracing::{debug, instrument};

use crate::client::{ChatCompletionRequest, ChatMessage, ChatMessageRole, DynLlmClient};
use crate::config::ModelSettings;
use crate::error::LlmError;

/// Sends `prompt` as a single user turn and returns the completion text.
/// No retries: failures go straight back to the caller.
#[instrument(skip_all, fields(model = %models.model))]
pub async fn complete(
    client: &DynLlmClient,
    models: &ModelSettings,
    prompt: &str,
) -> Result<String, LlmError> {
    let request = ChatCompletionRequest {
        model: models.model.clone(),
        messages: vec![ChatMessage {
            role: ChatMessageRole::User,
            content: prompt.to_string(),
        }],
        max_tokens: Some(models.max_tokens),
        temperature: Some(models.temperature),
        stop: models.stop.clone(),
    };

    let response = client.chat_completion(request).await?;

    let Some(choice) = response.choices.into_iter().next() else {
        return Err(LlmError::MalformedResponse(
            "response contained no choices".to_string(),
        ));
    };

    if let Some(reason) = &choice.finish_reason {
        debug!(finish_reason = %reason, "completion finished");
    }

    choice
        .message
        .content
        .ok_or_else(|| LlmError::MalformedResponse("completion had no content".to_string()))
}
