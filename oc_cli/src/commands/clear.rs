use crate::client::CliClient;
use crate::error::Result;

pub async fn handle(cli_client: &CliClient, session_id: &str) -> Result<()> {
    cli_client.clear_history(session_id).await?;
    println!("History of session {session_id} cleared.");
    Ok(())
}
