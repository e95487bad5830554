use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{endpoint_url, ProviderError, Result, TextProvider, MAX_TOKENS};
use crate::config::ProviderSettings;

/// Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    url: String,
    model: String,
}

impl AnthropicProvider {
    pub fn new(api_key: &str, settings: &ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            url: endpoint_url(&settings.base_url, "/v1/messages"),
            model: settings.model.clone(),
        }
    }
}

#[async_trait]
impl TextProvider for AnthropicProvider {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request_body = json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = self
            .client
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError {
                provider: self.name(),
                status,
                body,
            });
        }

        let api_response: AnthropicResponse = response.json().await?;

        api_response
            .content
            .into_iter()
            .find(|block| block.kind == "text")
            .and_then(|block| block.text)
            .ok_or(ProviderError::EmptyResponse(self.name()))
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: Option<String>,
}
