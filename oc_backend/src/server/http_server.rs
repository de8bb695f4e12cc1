use crate::clients::ollama::OllamaClient;
use crate::domain::history::store::HistoryStore;
use crate::error::Result;
use crate::interfaces::{chat, history, model};
use crate::server::app_state::AppState;
use crate::server::config::BackendConfig;
use axum::http::StatusCode;
use oc_core::server::routes::{API_PREFIX, print_all_backend_api_paths};
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Builds the full router: every API route under `/api`, request tracing and
/// the 404 fallback.
pub fn router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(chat::route::routes())
        .merge(history::route::routes())
        .merge(model::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest(API_PREFIX, routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server in front of the Ollama server named by `config`.
///
/// # Behavior
/// - Creates the shared history store and the Ollama client.
/// - Binds to the configured host/port and serves until Ctrl-C.
pub async fn http_server_backend(config: BackendConfig) -> Result<()> {
    let backend = Arc::new(OllamaClient::new(&config.ollama_base_url));
    info!("Using Ollama at {}", backend.base_url());
    let app_state = Arc::new(AppState::new(backend, Arc::new(HistoryStore::new())));

    print_all_backend_api_paths();
    let router = router(app_state);

    let bind_address = config.bind_address();
    let listener = match tokio::net::TcpListener::bind(&bind_address).await {
        Ok(listener) => {
            info!(
                "Starting HTTP server on {}://{}",
                config.protocol, bind_address
            );
            listener
        }
        Err(err) => {
            error!("Failed to bind to {bind_address}. {}", err);
            return Err(err.into());
        }
    };
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}
