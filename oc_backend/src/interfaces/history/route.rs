use crate::interfaces::history::controller::{clear_history_handler, get_history_handler};
use crate::server::app_state::AppState;
use axum::routing::{get, post};
use oc_core::server::routes::BackendApiHistory;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiHistory::Clear.path(None).as_str(),
            post(clear_history_handler),
        )
        .route(
            BackendApiHistory::Get.path(None).as_str(),
            get(get_history_handler),
        )
}
