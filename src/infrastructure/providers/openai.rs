//! OpenAI-compatible chat-completions client
//!
//! Works with the OpenAI API and any compatible endpoint (configurable
//! base URL). The HTTP client carries its own timeout from configuration;
//! the pipeline above imposes none of its own.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use super::{AdviceProvider, CompletionRequest, CompletionResponse};
use crate::config::LlmConfig;
use crate::domain::ProviderError;

pub struct OpenAiProvider {
    client: Client,
    config: LlmConfig,
}

impl OpenAiProvider {
    /// Build from configuration. Constructible without a credential; each
    /// call checks the key so a misconfigured server degrades per-request
    /// instead of failing startup.
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .unwrap_or_else(|e| {
                error!(error = %e, "Failed to build HTTP client with custom timeout, using default client");
                Client::new()
            });

        Self { client, config }
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ProviderError::Configuration("API key not set".to_string()))
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    fn to_wire_request(&self, request: &CompletionRequest) -> WireRequest {
        WireRequest {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| self.config.model.clone()),
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str().to_string(),
                    content: Some(m.content.clone()),
                })
                .collect(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

#[async_trait]
impl AdviceProvider for OpenAiProvider {
    fn id(&self) -> &'static str {
        "openai"
    }

    fn is_configured(&self) -> bool {
        self.api_key().is_ok()
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let api_key = self.api_key()?;
        let url = self.chat_url();
        let wire_request = self.to_wire_request(&request);

        debug!(model = %wire_request.model, "Sending advice request to OpenAI-compatible API");

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&wire_request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(match status.as_u16() {
                429 => ProviderError::RateLimited {
                    retry_after: None,
                    message: text,
                },
                401 | 403 => ProviderError::Authentication(text),
                code if code >= 500 => ProviderError::ServiceUnavailable(text),
                code => {
                    error!(status = code, "Advice API error: {}", text);
                    ProviderError::InvalidResponse(format!("API error {}: {}", status, text))
                }
            });
        }

        let wire_response: WireResponse = response.json().await?;

        let content = wire_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: wire_response.id,
            model: wire_response.model,
            content,
        })
    }
}

// === Wire types ===

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMessage {
    role: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    id: String,
    model: String,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: Option<WireMessage>,
}
