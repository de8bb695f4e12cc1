use crate::error::Result;
use crate::utils::attachment::Attachment;
use axum::extract::Multipart;
use oc_core::server::payload::chat_request::{ChatRequest, multipart_field};
use tracing::debug;

/// Fields of a multimodal chat form.
#[derive(Debug, Default)]
pub struct MultimodalForm {
    pub request: ChatRequest,
    pub attachments: Vec<Attachment>,
}

impl MultimodalForm {
    /// Reads every part of the form. Numeric fields that are absent or do not
    /// parse are left unset so the defaults apply; unknown fields are skipped.
    pub async fn read(mut multipart: Multipart) -> Result<Self> {
        let mut form = MultimodalForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                multipart_field::FILES => {
                    let file_name = field.file_name().map(String::from);
                    let content_type = field.content_type().map(String::from);
                    let bytes = field.bytes().await?;
                    form.attachments.push(Attachment {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
                multipart_field::MESSAGE => form.request.message = Some(field.text().await?),
                multipart_field::MODEL_ID => form.request.model_id = Some(field.text().await?),
                multipart_field::SESSION_ID => form.request.session_id = Some(field.text().await?),
                multipart_field::TEMPERATURE => {
                    form.request.temperature = parse_float(&field.text().await?)
                }
                multipart_field::TOP_P => form.request.top_p = parse_float(&field.text().await?),
                multipart_field::MAX_TOKENS => {
                    form.request.max_tokens = parse_count(&field.text().await?)
                }
                other => debug!(field = other, "ignoring unknown form field"),
            }
        }

        Ok(form)
    }
}

fn parse_float(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_count(value: &str) -> Option<u32> {
    let value = value.trim();
    value.parse::<u32>().ok().or_else(|| {
        parse_float(value)
            .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
            .map(|v| v.trunc() as u32)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_fall_back_when_unparsable() {
        assert_eq!(parse_float(" 0.7 "), Some(0.7));
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("warm"), None);
        assert_eq!(parse_float("NaN"), None);

        assert_eq!(parse_count("512"), Some(512));
        assert_eq!(parse_count("512.9"), Some(512));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("many"), None);
    }
}
