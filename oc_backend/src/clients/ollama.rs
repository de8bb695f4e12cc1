use crate::domain::model::backend::{FragmentStream, ModelBackend};
use crate::domain::model::value_object::ModelConnection;
use crate::error::{ErrorBackend, Result};
use crate::utils::ndjson_lines::ndjson_lines;
use async_trait::async_trait;
use futures::{StreamExt, stream};
use oc_core::types::turn::Turn;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct OllamaChatRequest {
    model: String,
    messages: Vec<OllamaMessage>,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Debug, Serialize)]
struct OllamaMessage {
    role: &'static str,
    content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    images: Vec<String>,
}

#[derive(Debug, Serialize)]
struct OllamaOptions {
    temperature: f64,
    top_p: f64,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct OllamaChatChunk {
    #[serde(default)]
    message: Option<OllamaChunkMessage>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OllamaChunkMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct OllamaTagsResponse {
    #[serde(default)]
    models: Vec<OllamaTag>,
}

#[derive(Debug, Deserialize)]
struct OllamaTag {
    name: String,
}

impl OllamaChatRequest {
    /// Images ride on the final message, the prompt being answered.
    fn new(connection: &ModelConnection, messages: Vec<Turn>) -> Self {
        let last = messages.len().saturating_sub(1);
        let messages = messages
            .into_iter()
            .enumerate()
            .map(|(i, turn)| OllamaMessage {
                role: turn.role.as_str(),
                content: turn.content,
                images: if i == last {
                    connection.images.clone()
                } else {
                    Vec::new()
                },
            })
            .collect();

        OllamaChatRequest {
            model: connection.model_id.clone(),
            messages,
            stream: true,
            options: OllamaOptions {
                temperature: connection.options.temperature,
                top_p: connection.options.top_p,
                num_predict: connection.options.max_tokens,
            },
        }
    }
}

impl OllamaChatChunk {
    fn decode(line: &str) -> Result<Self> {
        let chunk: OllamaChatChunk = serde_json::from_str(line)?;
        if let Some(error) = chunk.error {
            return Err(ErrorBackend::Ollama(error));
        }
        Ok(chunk)
    }

    fn fragment(self) -> Option<String> {
        self.message
            .map(|m| m.content)
            .filter(|content| !content.is_empty())
    }
}

/// HTTP client for an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        OllamaClient {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<Response> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => {
                return Err(ErrorBackend::ConnectionRefused(self.base_url.clone()));
            }
            Err(e) => return Err(ErrorBackend::Http(e)),
        };

        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<OllamaChatChunk>(&body)
            .ok()
            .and_then(|chunk| chunk.error)
            .unwrap_or(body);
        Err(ErrorBackend::OllamaStatus {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl ModelBackend for OllamaClient {
    async fn list_models(&self) -> Result<Vec<String>> {
        let url = format!("{}/api/tags", self.base_url);
        let result = self.client.get(&url).send().await;
        let response = self.handle_response(result).await?;
        let tags: OllamaTagsResponse = serde_json::from_slice(&response.bytes().await?)?;
        Ok(tags.models.into_iter().map(|tag| tag.name).collect())
    }

    async fn stream(
        &self,
        connection: &ModelConnection,
        messages: Vec<Turn>,
    ) -> Result<FragmentStream> {
        let url = format!("{}/api/chat", self.base_url);
        let payload = OllamaChatRequest::new(connection, messages);
        info!(
            model = %connection.model_id,
            messages = payload.messages.len(),
            images = connection.images.len(),
            "opening generation"
        );

        let result = self.client.post(&url).json(&payload).send().await;
        let response = self.handle_response(result).await?;
        let lines = Box::pin(ndjson_lines(response.bytes_stream()));

        let fragments = stream::unfold(Some(lines), |lines| async move {
            let mut lines = match lines {
                Some(lines) => lines,
                None => return None,
            };
            loop {
                let line = match lines.next().await {
                    Some(Ok(line)) => line,
                    Some(Err(e)) => return Some((Err(e), None)),
                    None => return None,
                };
                let chunk = match OllamaChatChunk::decode(&line) {
                    Ok(chunk) => chunk,
                    Err(e) => return Some((Err(e), None)),
                };
                if chunk.done {
                    debug!("generation done");
                    return chunk.fragment().map(|text| (Ok(text), None));
                }
                if let Some(text) = chunk.fragment() {
                    return Some((Ok(text), Some(lines)));
                }
            }
        });

        Ok(Box::pin(fragments))
    }
}
