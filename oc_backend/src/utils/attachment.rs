use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use bytes::Bytes;
use tracing::debug;

/// A file part uploaded alongside a multimodal prompt.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("image/"))
    }
}

/// Base64-encodes the image attachments; anything else is dropped.
pub fn encode_images(attachments: &[Attachment]) -> Vec<String> {
    attachments
        .iter()
        .filter(|attachment| {
            let keep = attachment.is_image();
            if !keep {
                debug!(
                    file_name = attachment.file_name.as_deref().unwrap_or("<unnamed>"),
                    content_type = attachment.content_type.as_deref().unwrap_or("<none>"),
                    "ignoring non-image attachment"
                );
            }
            keep
        })
        .map(|attachment| BASE64_STANDARD.encode(&attachment.bytes))
        .collect()
}
