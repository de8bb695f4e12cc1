use crate::interfaces::chat::controller::{chat_handler, chat_multimodal_handler};
use crate::server::app_state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use oc_core::server::routes::BackendApiChat;
use std::sync::Arc;

const MULTIMODAL_BODY_LIMIT: usize = 32 * 1024 * 1024;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(BackendApiChat::Text.path().as_str(), post(chat_handler))
        .route(
            BackendApiChat::Multimodal.path().as_str(),
            post(chat_multimodal_handler).layer(DefaultBodyLimit::max(MULTIMODAL_BODY_LIMIT)),
        )
}
