//! Error types for provider operations.

use thiserror::Error;

/// Errors that can occur while calling an AI provider.
///
/// These never reach end users directly: the dispatch gateway recovers from
/// them with a canned fallback response and logs the cause.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Provider client is misconfigured (missing key, bad URL).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Network-level failure, including timeouts.
    #[error("network error: {0}")]
    Network(String),

    /// The provider returned a non-success status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The provider answered but produced no usable content.
    #[error("provider returned an empty response")]
    EmptyResponse,
}
