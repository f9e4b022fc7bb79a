//! The OpenAI-compatible provider implementation.

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};
use reqwest::Client;
use tracing::{debug, warn};

use crate::api_types::{ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::OpenAiProviderConfig;

/// A provider client for OpenAI-compatible chat completion endpoints.
///
/// The request timeout is set on the underlying HTTP client; there is no
/// retry - a failed call surfaces as [`ProviderError`] and the gateway
/// degrades to its canned fallback.
pub struct OpenAiProvider {
    client: Client,
    config: OpenAiProviderConfig,
    name: String,
}

impl OpenAiProvider {
    /// Create a provider client with the given display name.
    ///
    /// The name shows up in logs to distinguish upstreams sharing this
    /// implementation ("openai", "openrouter", "anthropic").
    pub fn new(
        name: impl Into<String>,
        config: OpenAiProviderConfig,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            config,
            name: name.into(),
        })
    }

    /// Create a client for OpenAI from environment variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new("openai", OpenAiProviderConfig::from_env()?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &OpenAiProviderConfig {
        &self.config
    }

    /// Build the messages array for a chat completion request.
    fn build_messages(request: &CompletionRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::with_capacity(request.turns.len() + 1);

        if let Some(system_prompt) = &request.system_prompt {
            messages.push(ChatMessage::system(system_prompt.clone()));
        }

        for turn in &request.turns {
            messages.push(ChatMessage::with_role(turn.role.as_str(), &turn.content));
        }

        messages
    }
}

#[async_trait]
impl Provider for OpenAiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let url = format!("{}/v1/chat/completions", self.config.api_url);

        let body = ChatCompletionRequest {
            model: request.model.clone(),
            messages: Self::build_messages(&request),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        debug!(
            "Sending {} messages to {} (model: {})",
            body.messages.len(),
            self.name,
            body.model
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Network(format!("Request to {} timed out: {}", self.name, e))
                } else {
                    ProviderError::Network(format!("Failed to reach {}: {}", self.name, e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try the structured error body first.
            let message = match serde_json::from_str::<ApiErrorBody>(&error_text) {
                Ok(parsed) => parsed.error.message,
                Err(_) => error_text,
            };

            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::Network(format!("Failed to parse {} response: {}", self.name, e))
        })?;

        if let Some(usage) = &completion.usage {
            debug!(
                "Token usage - prompt: {}, completion: {}, total: {}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let text = completion
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.is_empty());

        match text {
            Some(text) => Ok(text),
            None => {
                warn!("No content in {} response", self.name);
                Err(ProviderError::EmptyResponse)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
