#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use futures::stream;
use oc_core::types::turn::Turn;
use ollama_chat::domain::history::store::HistoryStore;
use ollama_chat::domain::model::backend::{FragmentStream, ModelBackend};
use ollama_chat::domain::model::value_object::ModelConnection;
use ollama_chat::error::{ErrorBackend, Result};
use ollama_chat::server::app_state::AppState;
use ollama_chat::server::http_server::router;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// What the scripted backend answers to the next generation call.
#[derive(Debug, Clone)]
pub enum Reply {
    Fragments(Vec<&'static str>),
    FailToOpen(&'static str),
    FailAfter(Vec<&'static str>, &'static str),
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub connection: ModelConnection,
    pub messages: Vec<Turn>,
}

/// A `ModelBackend` that replays queued replies and records every call.
#[derive(Debug, Default)]
pub struct ScriptedBackend {
    models: Mutex<Option<Vec<String>>>,
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_models(models: &[&str]) -> Arc<Self> {
        let backend = Self::default();
        *backend.models.lock().unwrap() = Some(models.iter().map(|m| m.to_string()).collect());
        Arc::new(backend)
    }

    pub fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelBackend for ScriptedBackend {
    async fn list_models(&self) -> Result<Vec<String>> {
        self.models
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ErrorBackend::ConnectionRefused("http://localhost:11434".into()))
    }

    async fn stream(
        &self,
        connection: &ModelConnection,
        messages: Vec<Turn>,
    ) -> Result<FragmentStream> {
        self.calls.lock().unwrap().push(RecordedCall {
            connection: connection.clone(),
            messages,
        });
        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Reply::Fragments(vec!["ok"]));

        let items: Vec<Result<String>> = match reply {
            Reply::FailToOpen(message) => return Err(ErrorBackend::Ollama(message.into())),
            Reply::Fragments(fragments) => fragments.into_iter().map(|f| Ok(f.into())).collect(),
            Reply::FailAfter(fragments, message) => fragments
                .into_iter()
                .map(|f| Ok(f.into()))
                .chain(std::iter::once(Err(ErrorBackend::Ollama(message.into()))))
                .collect(),
        };
        Ok(Box::pin(stream::iter(items)))
    }
}

pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub backend: Arc<ScriptedBackend>,
}

impl TestApp {
    pub fn new(backend: Arc<ScriptedBackend>) -> Self {
        let state = Arc::new(AppState::new(backend.clone(), Arc::new(HistoryStore::new())));
        TestApp {
            router: router(state.clone()),
            state,
            backend,
        }
    }

    pub fn history(&self, session_id: &str) -> Vec<Turn> {
        self.state.history.get(session_id)
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_multipart(&self, uri: &str, form: MultipartBody) -> Response<Body> {
        self.send(
            Request::post(uri)
                .header(header::CONTENT_TYPE, form.content_type())
                .body(Body::from(form.finish()))
                .unwrap(),
        )
        .await
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

const BOUNDARY: &str = "X-OLLAMA-CHAT-TEST-BOUNDARY";

/// Hand-built `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    pub fn content_type(&self) -> String {
        format!("multipart/form-data; boundary={BOUNDARY}")
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}
