//! The provider trait and its request type.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::turn::Turn;

/// The outbound request a dispatch builds for a provider.
///
/// The final entry in `turns` is the new user message; earlier entries are
/// replayed history when the target has memory enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// System prompt from the resolved persona or agent, if any.
    pub system_prompt: Option<String>,
    /// Conversation turns, oldest first.
    pub turns: Vec<Turn>,
    /// Model identifier to run against.
    pub model: String,
}

impl CompletionRequest {
    /// Create a request with a system prompt.
    pub fn new(
        system_prompt: impl Into<String>,
        turns: Vec<Turn>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            system_prompt: Some(system_prompt.into()),
            turns,
            model: model.into(),
        }
    }

    /// Create a request without a system prompt.
    pub fn bare(turns: Vec<Turn>, model: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            turns,
            model: model.into(),
        }
    }

    /// The content of the final user turn, if present.
    pub fn last_user_text(&self) -> Option<&str> {
        self.turns
            .iter()
            .rev()
            .find(|turn| turn.role == crate::Role::User)
            .map(|turn| turn.content.as_str())
    }
}

/// Trait for AI provider clients.
///
/// Implementations forward a conversation to a hosted model and return the
/// assistant's reply text. The provider API itself is opaque to the rest of
/// the system: send messages, receive text.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Forward the request to the provider and return the assistant text.
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;

    /// Human-readable provider name, used in logs.
    fn name(&self) -> &str;

    /// Whether the provider is ready to accept requests.
    async fn is_ready(&self) -> bool {
        true
    }
}
