use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oc_core::error::ErrorCore;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{error, warn};

pub type ResultAPIStream = std::result::Result<Response, ErrorPlainText>;
pub type ResultAPI = std::result::Result<Json<Value>, ErrorBackend>;
pub type Result<T> = std::result::Result<T, ErrorBackend>;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to Ollama at {0}, is it running?")]
    ConnectionRefused(String),

    #[error("Ollama answered {status}: {message}")]
    OllamaStatus { status: u16, message: String },

    #[error("Ollama reported an error: {0}")]
    Ollama(String),

    #[error("Failed to parse JSON {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    #[error(transparent)]
    MultipartRejection(#[from] MultipartRejection),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Model ID is required")]
    ModelIdRequired,

    #[error("Session ID required")]
    SessionIdRequired,

    #[error("Failed to fetch models from Ollama")]
    FailedToFetchModels(#[source] Box<ErrorBackend>),

    #[error("Failed to build streaming response: {0}")]
    FailedBuildStreamResponse(String),
}

impl ErrorBackend {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorBackend::MissingRequiredFields
            | ErrorBackend::ModelIdRequired
            | ErrorBackend::SessionIdRequired => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text shown to the client. Internal failures never leak their detail.
    pub fn public_message(&self) -> String {
        match self {
            ErrorBackend::MissingRequiredFields | ErrorBackend::ModelIdRequired => {
                ErrorBackend::MissingRequiredFields.to_string()
            }
            ErrorBackend::SessionIdRequired | ErrorBackend::FailedToFetchModels(_) => {
                self.to_string()
            }
            _ => INTERNAL_SERVER_ERROR.to_string(),
        }
    }

    fn log(&self) {
        if self.status().is_server_error() {
            match self {
                ErrorBackend::FailedToFetchModels(source) => error!("{self}: {source}"),
                _ => error!("Error occurred: {self}"),
            }
        } else {
            warn!("Rejected request: {self}");
        }
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        self.log();
        let body = Json(json!({
            "error": self.public_message(),
        }));

        (self.status(), body).into_response()
    }
}

/// Renders an [`ErrorBackend`] as a `text/plain` body, as the chat endpoints
/// answer with plain text.
#[derive(Debug)]
pub struct ErrorPlainText(pub ErrorBackend);

impl<E> From<E> for ErrorPlainText
where
    E: Into<ErrorBackend>,
{
    fn from(err: E) -> Self {
        ErrorPlainText(err.into())
    }
}

impl IntoResponse for ErrorPlainText {
    fn into_response(self) -> Response {
        self.0.log();
        (self.0.status(), self.0.public_message()).into_response()
    }
}
