use crate::cli::AskArgs;
use crate::client::CliClient;
use crate::error::Result;
use crate::utils::image_file::ImageFile;
use crate::utils::session_id::new_session_id;
use crate::utils::stream_text::print_stream;
use oc_core::server::payload::chat_request::ChatRequest;

pub async fn handle(cli_client: &CliClient, args: AskArgs) -> Result<()> {
    let request = ChatRequest {
        message: Some(args.message),
        model_id: Some(args.model),
        temperature: args.sampling.temperature,
        top_p: args.sampling.top_p,
        max_tokens: args.sampling.max_tokens,
        session_id: Some(args.session.unwrap_or_else(new_session_id)),
    };

    let response = if args.images.is_empty() {
        cli_client.send_chat(&request).await?
    } else {
        let mut images = Vec::with_capacity(args.images.len());
        for path in &args.images {
            images.push(ImageFile::read(path).await?);
        }
        cli_client.send_chat_multimodal(&request, images).await?
    };

    print_stream(response).await?;
    println!();
    Ok(())
}
