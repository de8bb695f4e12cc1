use crate::cli::ChatArgs;
use crate::client::CliClient;
use crate::error::Result;
use crate::prompt::model::prompt_model;
use crate::prompt::prompt::chat_prompt;
use crate::utils::session_id::new_session_id;

pub async fn handle(cli_client: &CliClient, args: ChatArgs) -> Result<()> {
    let model_id = match args.model {
        Some(model) => model,
        None => prompt_model(cli_client).await?,
    };
    let session_id = args.session.unwrap_or_else(new_session_id);

    chat_prompt(cli_client, &model_id, &session_id, &args.sampling).await
}
