use crate::domain::model::value_object::ModelConnection;
use crate::error::Result;
use async_trait::async_trait;
use futures::Stream;
use oc_core::types::turn::Turn;
use std::fmt::Debug;
use std::pin::Pin;

/// Incremental pieces of generated text, finite and single-use.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// The language-model server generation is delegated to.
#[async_trait]
pub trait ModelBackend: Send + Sync + Debug {
    /// Ids of the models the backend can serve.
    async fn list_models(&self) -> Result<Vec<String>>;

    /// Opens a fresh generation over `messages`.
    ///
    /// Errors returned here happen before any fragment exists. Errors inside
    /// the stream happen after generation started. Dropping the stream
    /// cancels the generation.
    async fn stream(
        &self,
        connection: &ModelConnection,
        messages: Vec<Turn>,
    ) -> Result<FragmentStream>;
}
