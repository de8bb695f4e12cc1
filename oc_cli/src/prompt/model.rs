use crate::client::CliClient;
use crate::error::{ErrorCli, Result};
use inquire::Select;

/// Lets the user pick one of the models the server lists.
pub async fn prompt_model(cli_client: &CliClient) -> Result<String> {
    let response = cli_client.list_models().await?;
    let options: Vec<String> = response
        .foundation_models
        .into_iter()
        .map(|model| model.model_id)
        .collect();
    if options.is_empty() {
        return Err(ErrorCli::NoModelAvailable);
    }

    Ok(Select::new("Choose a model", options).prompt()?)
}
