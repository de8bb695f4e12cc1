use crate::cli::{Cli, Commands, ModelCommands};
use crate::client::CliClient;
use crate::error::Result;
use clap::Parser;
mod cli;
mod client;
mod commands;
mod error;
mod prompt;
mod utils;

#[tokio::main]
async fn main() {
    if let Err(err) = try_main().await {
        eprintln!("❌ Error: {}", err);
        std::process::exit(1);
    }
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let cli_client = CliClient::new(&cli.server);

    match cli.command {
        Commands::Model(model_commands) => match model_commands {
            ModelCommands::List => commands::model::list::handle(&cli_client).await?,
        },
        Commands::Chat(args) => commands::chat::handle(&cli_client, args).await?,
        Commands::Ask(args) => commands::ask::handle(&cli_client, args).await?,
        Commands::Clear { session } => commands::clear::handle(&cli_client, &session).await?,
    }

    Ok(())
}
