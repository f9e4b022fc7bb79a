//! Canned provider - always returns a fixed reply.

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};

/// A provider that answers every request with the same text.
#[derive(Debug, Clone)]
pub struct CannedProvider {
    reply: String,
}

impl CannedProvider {
    /// Create a provider that always answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl Provider for CannedProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "CannedProvider"
    }
}
