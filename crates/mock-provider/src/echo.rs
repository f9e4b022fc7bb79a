//! Echo provider - replies with the last user message.

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};

/// A provider that echoes the final user message back.
///
/// Useful for exercising the dispatch flow without any AI processing.
#[derive(Debug, Clone, Default)]
pub struct EchoProvider {
    /// Optional prefix added before the echo.
    prefix: Option<String>,
}

impl EchoProvider {
    /// Create an EchoProvider with no prefix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an EchoProvider with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

#[async_trait]
impl Provider for EchoProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        let text = request.last_user_text().unwrap_or_default();
        Ok(match &self.prefix {
            Some(prefix) => format!("{}{}", prefix, text),
            None => text.to_string(),
        })
    }

    fn name(&self) -> &str {
        "EchoProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Turn;

    #[tokio::test]
    async fn test_echo_no_prefix() {
        let provider = EchoProvider::new();
        let request = CompletionRequest::bare(vec![Turn::user("Hello!")], "m");

        let text = provider.complete(request).await.unwrap();
        assert_eq!(text, "Hello!");
    }

    #[tokio::test]
    async fn test_echo_with_prefix() {
        let provider = EchoProvider::with_prefix("Echo: ");
        let request = CompletionRequest::bare(vec![Turn::user("Hello!")], "m");

        let text = provider.complete(request).await.unwrap();
        assert_eq!(text, "Echo: Hello!");
    }

    #[tokio::test]
    async fn test_echo_last_user_turn() {
        let provider = EchoProvider::new();
        let request = CompletionRequest::bare(
            vec![
                Turn::user("first"),
                Turn::assistant("reply"),
                Turn::user("second"),
            ],
            "m",
        );

        let text = provider.complete(request).await.unwrap();
        assert_eq!(text, "second");
    }

    #[tokio::test]
    async fn test_provider_name() {
        let provider = EchoProvider::new();
        assert_eq!(provider.name(), "EchoProvider");
        assert!(provider.is_ready().await);
    }
}
