use serde::{Deserialize, Serialize};

/// Body of the text chat endpoint.
///
/// Every field is optional on the wire so that a missing `message` or
/// `modelId` is reported as a validation error rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Multipart field names shared by the server and the CLI.
pub mod multipart_field {
    pub const MESSAGE: &str = "message";
    pub const MODEL_ID: &str = "modelId";
    pub const TEMPERATURE: &str = "temperature";
    pub const TOP_P: &str = "topP";
    pub const MAX_TOKENS: &str = "maxTokens";
    pub const SESSION_ID: &str = "sessionId";
    pub const FILES: &str = "files";
}
