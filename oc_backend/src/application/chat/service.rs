use crate::domain::chat::value_object::ChatCommand;
use crate::domain::history::store::HistoryStore;
use crate::domain::model::backend::ModelBackend;
use crate::domain::model::value_object::ModelConnection;
use crate::error::Result;
use crate::utils::stream_relay::StreamRelay;
use oc_core::types::turn::Turn;
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug)]
pub struct ChatService {
    backend: Arc<dyn ModelBackend>,
    history: Arc<HistoryStore>,
}

impl ChatService {
    pub fn new(backend: Arc<dyn ModelBackend>, history: Arc<HistoryStore>) -> Self {
        Self { backend, history }
    }

    /// Opens a generation for `command` against the session's prior turns.
    ///
    /// The user turn is committed as soon as the backend accepted the call;
    /// the returned relay commits the assistant turn when the stream
    /// completes. If opening fails nothing is committed.
    pub async fn chat(&self, command: ChatCommand) -> Result<StreamRelay> {
        let ChatCommand {
            message,
            model_id,
            options,
            session_id,
            images,
        } = command;

        let connection = ModelConnection::configure(&model_id, options, Some(images))?;

        let mut messages = self.history.get(&session_id);
        messages.push(Turn::user(message.clone()));
        info!(
            session_id = %session_id,
            model = %model_id,
            prior_turns = messages.len() - 1,
            multimodal = connection.is_multimodal(),
            "chat request"
        );

        let fragments = self.backend.stream(&connection, messages).await?;

        self.history.append(&session_id, Turn::user(message));

        Ok(StreamRelay::new(self.history.clone(), session_id, fragments))
    }
}
