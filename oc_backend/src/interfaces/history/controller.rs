use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use oc_core::server::payload::clear_history_request::ClearHistoryRequest;
use oc_core::server::payload::clear_history_response::ClearHistoryResponse;
use serde_json::json;
use std::sync::Arc;

pub async fn clear_history_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<ClearHistoryRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    state.service_history.clear(req)?;
    Ok(Json(json!(ClearHistoryResponse { success: true })))
}

pub async fn get_history_handler(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> ResultAPI {
    let history = state.service_history.get(session_id);
    Ok(Json(json!(history)))
}
