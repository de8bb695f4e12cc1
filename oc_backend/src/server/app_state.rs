use crate::application::chat::service::ChatService;
use crate::application::history::service::HistoryService;
use crate::application::model::service::ModelService;
use crate::domain::history::store::HistoryStore;
use crate::domain::model::backend::ModelBackend;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct AppState {
    /// The store the services share. Exposed so embedders and integration
    /// tests can inspect sessions without going through HTTP.
    pub history: Arc<HistoryStore>,
    pub service_chat: Arc<ChatService>,
    pub service_history: Arc<HistoryService>,
    pub service_model: Arc<ModelService>,
}

impl AppState {
    pub fn new(backend: Arc<dyn ModelBackend>, history: Arc<HistoryStore>) -> Self {
        AppState {
            service_chat: Arc::new(ChatService::new(backend.clone(), history.clone())),
            service_history: Arc::new(HistoryService::new(history.clone())),
            service_model: Arc::new(ModelService::new(backend)),
            history,
        }
    }
}
