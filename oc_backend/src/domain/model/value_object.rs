use crate::error::{ErrorBackend, Result};
use oc_core::server::default_config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P};

/// Sampling parameters sent with every generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f64,
    pub top_p: f64,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        GenerationOptions {
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationOptions {
    /// Absent values take the defaults.
    pub fn resolve(temperature: Option<f64>, top_p: Option<f64>, max_tokens: Option<u32>) -> Self {
        let defaults = GenerationOptions::default();
        GenerationOptions {
            temperature: temperature.unwrap_or(defaults.temperature),
            top_p: top_p.unwrap_or(defaults.top_p),
            max_tokens: max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}

/// A configured handle for one generation call against the model backend.
///
/// The model id is not checked against the backend here; an unknown model
/// surfaces as an error from the generation call itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConnection {
    pub model_id: String,
    pub options: GenerationOptions,
    /// Base64 image payloads bound to the call.
    pub images: Vec<String>,
}

impl ModelConnection {
    pub fn configure(
        model_id: &str,
        options: GenerationOptions,
        images: Option<Vec<String>>,
    ) -> Result<Self> {
        if model_id.is_empty() {
            return Err(ErrorBackend::ModelIdRequired);
        }
        Ok(ModelConnection {
            model_id: model_id.to_string(),
            options,
            images: images.unwrap_or_default(),
        })
    }

    pub fn is_multimodal(&self) -> bool {
        !self.images.is_empty()
    }
}
