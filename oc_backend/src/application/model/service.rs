use crate::domain::model::backend::ModelBackend;
use crate::error::{ErrorBackend, Result};
use oc_core::server::payload::list_models_response::ListModelsResponse;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct ModelService {
    backend: Arc<dyn ModelBackend>,
}

impl ModelService {
    pub fn new(backend: Arc<dyn ModelBackend>) -> Self {
        Self { backend }
    }

    pub async fn list_models(&self) -> Result<ListModelsResponse> {
        let models = self
            .backend
            .list_models()
            .await
            .map_err(|e| ErrorBackend::FailedToFetchModels(Box::new(e)))?;
        Ok(models.into())
    }
}
