use crate::error::{ErrorCli, Result};
use crate::utils::image_file::ImageFile;
use oc_core::error::ErrorCore;
use oc_core::server::payload::chat_request::{ChatRequest, multipart_field};
use oc_core::server::payload::clear_history_request::ClearHistoryRequest;
use oc_core::server::payload::clear_history_response::ClearHistoryResponse;
use oc_core::server::payload::list_models_response::ListModelsResponse;
use oc_core::server::routes::{API_PREFIX, BackendApiChat, BackendApiHistory, BackendApiModel};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::new();
        CliClient {
            client,
            base_url_api: format!("{}{}", base_url.trim_end_matches('/'), API_PREFIX),
        }
    }

    /// Passes successful responses through; turns failures into a readable
    /// error carrying the server's message.
    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<Response> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => {
                return Err(ErrorCli::ConnectionRefused(self.base_url_api.clone()));
            }
            Err(e) => return Err(ErrorCli::Http(e)),
        };
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);
        Err(ErrorCli::Server {
            status: status.as_u16(),
            message,
        })
    }

    pub async fn list_models(&self) -> Result<ListModelsResponse> {
        let url = format!("{}{}", self.base_url_api, BackendApiModel::List.path().as_str());
        let result = self.client.get(&url).send().await;
        let text = self.handle_response(result).await?.text().await?;
        Ok(serde_json::from_str(&text).map_err(ErrorCore::from)?)
    }

    /// Returns the open streaming response.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<Response> {
        let url = format!("{}{}", self.base_url_api, BackendApiChat::Text.path().as_str());
        let result = self.client.post(&url).json(request).send().await;
        self.handle_response(result).await
    }

    /// Returns the open streaming response.
    pub async fn send_chat_multimodal(
        &self,
        request: &ChatRequest,
        images: Vec<ImageFile>,
    ) -> Result<Response> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiChat::Multimodal.path().as_str()
        );

        let mut form = Form::new();
        let fields = [
            (multipart_field::MESSAGE, request.message.clone()),
            (multipart_field::MODEL_ID, request.model_id.clone()),
            (multipart_field::SESSION_ID, request.session_id.clone()),
            (
                multipart_field::TEMPERATURE,
                request.temperature.map(|v| v.to_string()),
            ),
            (multipart_field::TOP_P, request.top_p.map(|v| v.to_string())),
            (
                multipart_field::MAX_TOKENS,
                request.max_tokens.map(|v| v.to_string()),
            ),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                form = form.text(name, value);
            }
        }
        for image in images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime_type)?;
            form = form.part(multipart_field::FILES, part);
        }

        let result = self.client.post(&url).multipart(form).send().await;
        self.handle_response(result).await
    }

    pub async fn clear_history(&self, session_id: &str) -> Result<ClearHistoryResponse> {
        let url = format!(
            "{}{}",
            self.base_url_api,
            BackendApiHistory::Clear.path(None).as_str()
        );
        let request = ClearHistoryRequest {
            session_id: Some(session_id.to_string()),
        };
        let result = self.client.post(&url).json(&request).send().await;
        let text = self.handle_response(result).await?.text().await?;
        Ok(serde_json::from_str(&text).map_err(ErrorCore::from)?)
    }
}
