use crate::cli::SamplingArgs;
use crate::client::CliClient;
use crate::error::Result;
use crate::utils::stream_text::print_stream;
use oc_core::server::payload::chat_request::ChatRequest;
use std::io;
use std::io::Write;

pub async fn chat_prompt(
    cli_client: &CliClient,
    model_id: &str,
    session_id: &str,
    sampling: &SamplingArgs,
) -> Result<()> {
    println!(
        "Chatting with {} (session {})\nType your prompt, '/clear' to forget the conversation, or 'exit' to quit:",
        model_id, session_id
    );

    let stdin = io::stdin();
    loop {
        print!("> ");
        // Flush stdout to ensure the prompt is visible
        io::stdout().flush()?;

        let mut input = String::new();
        match stdin.read_line(&mut input) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                println!("Failed to read input. Try again.");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            println!("Exiting prompt.");
            break;
        }
        if input == "/clear" {
            cli_client.clear_history(session_id).await?;
            println!("Conversation cleared.");
            continue;
        }

        let request = ChatRequest {
            message: Some(input.to_string()),
            model_id: Some(model_id.to_string()),
            temperature: sampling.temperature,
            top_p: sampling.top_p,
            max_tokens: sampling.max_tokens,
            session_id: Some(session_id.to_string()),
        };
        let response = match cli_client.send_chat(&request).await {
            Ok(response) => response,
            Err(err) => {
                eprintln!("❌ Error: {}", err);
                continue;
            }
        };
        if let Err(err) = print_stream(response).await {
            println!();
            eprintln!("❌ Response interrupted: {}", err);
            continue;
        }
        println!(); // Print a newline after the response
    }
    Ok(())
}
