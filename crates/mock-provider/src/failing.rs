//! Failing provider - always errors.

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};

/// A provider that fails every request.
///
/// Used to exercise the gateway's fallback path in tests.
#[derive(Debug, Clone)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    /// Create a provider that fails with a generic network error.
    pub fn new() -> Self {
        Self::with_message("simulated provider outage")
    }

    /// Create a provider that fails with a custom error message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Provider for FailingProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
        Err(ProviderError::Network(self.message.clone()))
    }

    fn name(&self) -> &str {
        "FailingProvider"
    }

    async fn is_ready(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Turn;

    #[tokio::test]
    async fn test_always_fails() {
        let provider = FailingProvider::new();
        let request = CompletionRequest::bare(vec![Turn::user("hi")], "m");

        let result = provider.complete(request).await;
        assert!(matches!(result, Err(ProviderError::Network(_))));
        assert!(!provider.is_ready().await);
    }
}
