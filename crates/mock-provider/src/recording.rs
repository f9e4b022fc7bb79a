//! Recording provider - captures requests for assertions.

use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};
use tokio::sync::Mutex;

/// A provider that records every request it receives and answers with a
/// fixed reply.
///
/// Lets tests assert what a dispatch actually sent: system prompt, replayed
/// history, and model selection.
pub struct RecordingProvider {
    reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl RecordingProvider {
    /// Create a recorder that answers with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// All requests received so far, in order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// The most recent request, if any.
    pub async fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().await.last().cloned()
    }
}

#[async_trait]
impl Provider for RecordingProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError> {
        self.requests.lock().await.push(request);
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "RecordingProvider"
    }
}
