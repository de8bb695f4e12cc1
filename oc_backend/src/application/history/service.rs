use crate::domain::history::store::HistoryStore;
use crate::error::{ErrorBackend, Result};
use oc_core::server::payload::clear_history_request::ClearHistoryRequest;
use oc_core::server::payload::history_response::HistoryResponse;
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct HistoryService {
    history: Arc<HistoryStore>,
}

impl HistoryService {
    pub fn new(history: Arc<HistoryStore>) -> Self {
        Self { history }
    }

    pub fn clear(&self, req: ClearHistoryRequest) -> Result<()> {
        let session_id = req
            .session_id
            .filter(|id| !id.is_empty())
            .ok_or(ErrorBackend::SessionIdRequired)?;
        let existed = self.history.delete(&session_id);
        info!(session_id = %session_id, existed, "history cleared");
        Ok(())
    }

    pub fn get(&self, session_id: String) -> HistoryResponse {
        let turns = self.history.get(&session_id);
        HistoryResponse { session_id, turns }
    }
}
