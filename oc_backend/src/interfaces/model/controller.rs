use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::json;
use std::sync::Arc;

pub async fn list_models_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let models = state.service_model.list_models().await?;
    Ok(Json(json!(models)))
}
