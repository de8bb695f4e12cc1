use crate::interfaces::model::controller::list_models_handler;
use crate::server::app_state::AppState;
use axum::routing::get;
use oc_core::server::routes::BackendApiModel;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiModel::List.path().as_str(),
        get(list_models_handler),
    )
}
