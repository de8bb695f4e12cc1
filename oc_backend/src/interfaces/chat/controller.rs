use crate::domain::chat::value_object::ChatCommand;
use crate::error::ResultAPIStream;
use crate::server::app_state::AppState;
use crate::utils::attachment::encode_images;
use crate::utils::multipart_form::MultimodalForm;
use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use oc_core::server::payload::chat_request::ChatRequest;
use std::sync::Arc;
use tracing::debug;

pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<ChatRequest>, JsonRejection>,
) -> ResultAPIStream {
    let req = req?.0;
    let command = ChatCommand::from_request(req, vec![])?;
    let relay = state.service_chat.chat(command).await?;
    Ok(relay.build()?)
}

/// Same contract as [`chat_handler`]; image parts are bound to the call and
/// the flow is text-only when there are none.
pub async fn chat_multimodal_handler(
    State(state): State<Arc<AppState>>,
    multipart: std::result::Result<Multipart, MultipartRejection>,
) -> ResultAPIStream {
    let form = MultimodalForm::read(multipart?).await?;
    let images = encode_images(&form.attachments);
    debug!(
        attachments = form.attachments.len(),
        images = images.len(),
        "multimodal form read"
    );
    let command = ChatCommand::from_request(form.request, images)?;
    let relay = state.service_chat.chat(command).await?;
    Ok(relay.build()?)
}
