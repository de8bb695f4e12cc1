use oc_core::logger::init_logger;
use ollama_chat::server::config::BackendConfig;
use ollama_chat::server::http_server::http_server_backend;
use tracing::error;

#[tokio::main]
async fn main() {
    init_logger();
    let config = BackendConfig::from_env();

    if let Err(err) = http_server_backend(config).await {
        error!("{err}");
        std::process::exit(1);
    }
}
