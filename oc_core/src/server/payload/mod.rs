pub mod chat_request;
pub mod clear_history_request;
pub mod clear_history_response;
pub mod history_response;
pub mod list_models_response;
