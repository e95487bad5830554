//! Text-generation providers used to draft test cases.

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use crate::cli::ProviderKind;
use crate::config::{Config, ProviderSettings};

/// Upper bound on generated tokens for every provider
pub const MAX_TOKENS: u32 = 2000;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No AI provider API key configured")]
    MissingCredentials,

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{provider} API request failed with status {status}: {body}")]
    ApiError {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("{0} returned no text content")]
    EmptyResponse(&'static str),
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// A service that turns one prompt into one block of text
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Send the prompt and return the raw text of the reply
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// Factory function to pick the provider for this run.
///
/// The preferred provider wins when its key is configured, otherwise the
/// other one is used.
pub fn create_provider(config: &Config) -> Result<Box<dyn TextProvider>> {
    let order = match config.preferred_provider {
        ProviderKind::Anthropic => [ProviderKind::Anthropic, ProviderKind::OpenAi],
        ProviderKind::OpenAi => [ProviderKind::OpenAi, ProviderKind::Anthropic],
    };

    for kind in order {
        let settings = settings_for(config, kind);
        if let Some(api_key) = &settings.api_key {
            debug!("Using {:?} provider with model {}", kind, settings.model);
            let provider: Box<dyn TextProvider> = match kind {
                ProviderKind::Anthropic => Box::new(AnthropicProvider::new(api_key, settings)),
                ProviderKind::OpenAi => Box::new(OpenAiProvider::new(api_key, settings)),
            };
            return Ok(provider);
        }
    }

    Err(ProviderError::MissingCredentials)
}

fn settings_for(config: &Config, kind: ProviderKind) -> &ProviderSettings {
    match kind {
        ProviderKind::Anthropic => &config.anthropic,
        ProviderKind::OpenAi => &config.openai,
    }
}

/// Join a base URL and an API path without doubling the slash
pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
