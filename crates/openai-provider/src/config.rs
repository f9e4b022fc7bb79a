//! Configuration for the OpenAI-compatible provider client.

use std::env;
use std::time::Duration;

use agent_core::ProviderError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for an [`OpenAiProvider`](crate::OpenAiProvider).
///
/// One config per upstream endpoint. The env-prefixed constructor lets the
/// binary build clients for several upstreams (`OPENAI_*`, `OPENROUTER_*`,
/// `ANTHROPIC_*`) from one crate.
#[derive(Debug, Clone)]
pub struct OpenAiProviderConfig {
    /// Base API URL, without the `/v1/chat/completions` suffix.
    pub api_url: String,

    /// API key for bearer authentication.
    pub api_key: String,

    /// Request timeout. The gateway has no retry; a timed-out call falls
    /// back to the canned response path.
    pub timeout: Duration,

    /// Maximum tokens for the response.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (0.0 - 2.0).
    pub temperature: Option<f32>,
}

impl Default for OpenAiProviderConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com".to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_tokens: Some(1024),
            temperature: Some(0.7),
        }
    }
}

impl OpenAiProviderConfig {
    /// Create a configuration with the required fields.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Create configuration from `OPENAI_*` environment variables.
    ///
    /// Required: `OPENAI_API_KEY`. Optional: `OPENAI_API_URL`,
    /// `OPENAI_TIMEOUT_SECS`, `OPENAI_MAX_TOKENS`, `OPENAI_TEMPERATURE`.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_env_prefixed("OPENAI", "https://api.openai.com")
    }

    /// Create configuration from `{PREFIX}_*` environment variables.
    ///
    /// Required: `{PREFIX}_API_KEY`. Optional: `{PREFIX}_API_URL` (falls
    /// back to `default_url`), `{PREFIX}_TIMEOUT_SECS`,
    /// `{PREFIX}_MAX_TOKENS`, `{PREFIX}_TEMPERATURE`.
    pub fn from_env_prefixed(prefix: &str, default_url: &str) -> Result<Self, ProviderError> {
        let api_key = env::var(format!("{}_API_KEY", prefix))
            .map_err(|_| ProviderError::Configuration(format!("{}_API_KEY not set", prefix)))?;

        let api_url =
            env::var(format!("{}_API_URL", prefix)).unwrap_or_else(|_| default_url.to_string());

        let timeout = env::var(format!("{}_TIMEOUT_SECS", prefix))
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let max_tokens = env::var(format!("{}_MAX_TOKENS", prefix))
            .ok()
            .and_then(|s| s.parse().ok());

        let temperature = env::var(format!("{}_TEMPERATURE", prefix))
            .ok()
            .and_then(|s| s.parse().ok());

        Ok(Self {
            api_url,
            api_key,
            timeout,
            max_tokens: max_tokens.or(Some(1024)),
            temperature: temperature.or(Some(0.7)),
        })
    }

    /// Set the base API URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpenAiProviderConfig::new("test-key");
        assert_eq!(config.api_url, "https://api.openai.com");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_tokens, Some(1024));
    }

    #[test]
    fn test_builder_methods() {
        let config = OpenAiProviderConfig::new("test-key")
            .with_api_url("https://openrouter.ai/api")
            .with_timeout(Duration::from_secs(5))
            .with_max_tokens(256)
            .with_temperature(0.2);

        assert_eq!(config.api_url, "https://openrouter.ai/api");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_tokens, Some(256));
        assert_eq!(config.temperature, Some(0.2));
    }
}
