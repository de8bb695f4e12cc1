use oc_core::server::default_config::{
    DEFAULT_OLLAMA_BASE_URL, DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT,
    DEFAULT_SERVER_BACKEND_PROTOCOL,
};
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub host: String,
    pub port: String,
    pub protocol: String,
    pub ollama_base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        BackendConfig {
            host: String::from(DEFAULT_SERVER_BACKEND_HOST),
            port: String::from(DEFAULT_SERVER_BACKEND_PORT),
            protocol: String::from(DEFAULT_SERVER_BACKEND_PROTOCOL),
            ollama_base_url: String::from(DEFAULT_OLLAMA_BASE_URL),
        }
    }
}

impl BackendConfig {
    /// Reads `SERVER_BACKEND_HOST`, `SERVER_BACKEND_PORT`,
    /// `SERVER_BACKEND_PROTOCOL` and `OLLAMA_BASE_URL`, keeping the default
    /// for any that is unset.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = BackendConfig::default();
        BackendConfig {
            host: lookup("SERVER_BACKEND_HOST").unwrap_or(defaults.host),
            port: lookup("SERVER_BACKEND_PORT").unwrap_or(defaults.port),
            protocol: lookup("SERVER_BACKEND_PROTOCOL").unwrap_or(defaults.protocol),
            ollama_base_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
