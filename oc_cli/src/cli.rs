use clap::Args;
use clap::Parser;
use clap::Subcommand;
use oc_core::server::default_config::DEFAULT_CLI_SERVER_URL;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the chat server.
    #[arg(long, global = true, default_value = DEFAULT_CLI_SERVER_URL)]
    pub server: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(subcommand)]
    Model(ModelCommands),
    /// Interactive chat session.
    Chat(ChatArgs),
    /// Send a single prompt, optionally with images.
    Ask(AskArgs),
    /// Forget the history of a session.
    Clear {
        #[arg(short, long)]
        session: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModelCommands {
    List,
}

#[derive(Args, Debug, Clone)]
pub struct SamplingArgs {
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub top_p: Option<f64>,
    #[arg(long)]
    pub max_tokens: Option<u32>,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    #[arg(short, long)]
    pub model: Option<String>,
    #[arg(short, long)]
    pub session: Option<String>,
    #[command(flatten)]
    pub sampling: SamplingArgs,
}

#[derive(Args, Debug)]
pub struct AskArgs {
    #[arg()]
    pub message: String,
    #[arg(short, long)]
    pub model: String,
    #[arg(short, long)]
    pub session: Option<String>,
    #[arg(short, long = "image")]
    pub images: Vec<PathBuf>,
    #[command(flatten)]
    pub sampling: SamplingArgs,
}
