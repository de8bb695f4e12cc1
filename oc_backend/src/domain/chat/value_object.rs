use crate::domain::model::value_object::GenerationOptions;
use crate::error::{ErrorBackend, Result};
use oc_core::server::default_config::DEFAULT_SESSION_ID;
use oc_core::server::payload::chat_request::ChatRequest;

/// A validated chat request, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCommand {
    pub message: String,
    pub model_id: String,
    pub options: GenerationOptions,
    pub session_id: String,
    pub images: Vec<String>,
}

impl ChatCommand {
    /// Fails with `MissingRequiredFields` when `message` or `modelId` is
    /// absent or empty.
    pub fn from_request(req: ChatRequest, images: Vec<String>) -> Result<Self> {
        let message = non_empty(req.message).ok_or(ErrorBackend::MissingRequiredFields)?;
        let model_id = non_empty(req.model_id).ok_or(ErrorBackend::MissingRequiredFields)?;
        let session_id =
            non_empty(req.session_id).unwrap_or_else(|| DEFAULT_SESSION_ID.to_string());

        Ok(ChatCommand {
            message,
            model_id,
            options: GenerationOptions::resolve(req.temperature, req.top_p, req.max_tokens),
            session_id,
            images,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
