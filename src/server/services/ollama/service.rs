use crate::server::services::ollama::types::*;
use anyhow::{anyhow, Result};
use reqwest::Client;

pub struct OllamaService {
    config: OllamaConfig,
    client: Client,
}

impl OllamaService {
    pub fn new() -> Self {
        Self {
            config: OllamaConfig::default(),
            client: Client::new(),
        }
    }

    pub fn with_config(base_url: &str, model: &str) -> Self {
        Self {
            config: OllamaConfig {
                base_url: base_url.to_string(),
                model: model.to_string(),
            },
            client: Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Sends the full conversation and returns the reply text.
    ///
    /// Every call re-sends the whole message list; there is no caching and
    /// no timeout beyond what the transport imposes.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.config.base_url))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("Ollama request failed with status: {}", status),
            };
            return Err(anyhow!(error));
        }

        let chat_response: ChatResponse = response.json().await?;
        Ok(chat_response.message.content)
    }
}

impl Default for OllamaService {
    fn default() -> Self {
        Self::new()
    }
}
