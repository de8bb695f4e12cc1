use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FoundationModel {
    pub model_id: String,
    pub model_name: String,
}

impl FoundationModel {
    /// The display name is the id up to its first `:`, so `llama3:8b` lists as
    /// `llama3`.
    pub fn from_model_id(model_id: impl Into<String>) -> Self {
        let model_id = model_id.into();
        let model_name = model_id
            .split(':')
            .next()
            .unwrap_or(model_id.as_str())
            .to_string();
        FoundationModel {
            model_id,
            model_name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListModelsResponse {
    pub foundation_models: Vec<FoundationModel>,
}

impl From<Vec<String>> for ListModelsResponse {
    fn from(model_ids: Vec<String>) -> Self {
        ListModelsResponse {
            foundation_models: model_ids
                .into_iter()
                .map(FoundationModel::from_model_id)
                .collect(),
        }
    }
}
