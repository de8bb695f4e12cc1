use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient) -> Result<()> {
    let response = cli_client.list_models().await?;
    match response.foundation_models.len() {
        0 => {
            println!("No models installed found.");
        }
        _ => {
            println!("{:<40} name\n{:=<40} ======", "id", "");
            for model in response.foundation_models {
                println!("{:<40} {}", model.model_id, model.model_name);
            }
        }
    };
    Ok(())
}
