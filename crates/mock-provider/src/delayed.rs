//! Delayed provider - wraps another provider with artificial delay.

use std::time::Duration;

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};
use tokio::time::sleep;

/// A provider that wraps another provider and adds artificial delay.
///
/// Useful for testing timeout handling and simulating provider latency.
pub struct DelayedProvider<P: Provider> {
    inner: P,
    delay: Duration,
}

impl<P: Provider> DelayedProvider<P> {
    /// Wrap `inner` with the specified delay.
    pub fn new(inner: P, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Wrap `inner` with a delay in milliseconds.
    pub fn with_millis(inner: P, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }
}

#[async_trait]
impl<P: Provider> Provider for DelayedProvider<P> {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        sleep(self.delay).await;
        self.inner.complete(request).await
    }

    fn name(&self) -> &str {
        "DelayedProvider"
    }

    async fn is_ready(&self) -> bool {
        self.inner.is_ready().await
    }
}
