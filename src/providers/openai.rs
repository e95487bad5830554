use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{endpoint_url, ProviderError, Result, TextProvider, MAX_TOKENS};
use crate::config::ProviderSettings;

const TEMPERATURE: f32 = 0.7;

/// OpenAI Chat Completions provider
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, settings: &ProviderSettings) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            url: endpoint_url(&settings.base_url, "/v1/chat/completions"),
            model: settings.model.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        "openai"
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
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

        let chat_response: ChatResponse = response.json().await?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse(self.name()))
    }
}
