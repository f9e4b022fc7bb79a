//! Provider identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The hosted AI providers the gateway can route to.
///
/// A closed enum with a declared default case, so callers never branch on
/// raw provider strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// OpenAI's hosted API.
    OpenAi,
    /// OpenRouter's aggregation API (OpenAI-compatible).
    OpenRouter,
    /// Anthropic-compatible endpoints.
    Anthropic,
}

impl ProviderKind {
    /// Stable wire/config name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::OpenRouter => "openrouter",
            ProviderKind::Anthropic => "anthropic",
        }
    }

    /// Parse a provider name, falling back to [`ProviderKind::OpenRouter`]
    /// for anything unrecognized. OpenRouter is the default because it can
    /// route to models from every other provider.
    pub fn parse_or_default(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "openai" => ProviderKind::OpenAi,
            "anthropic" => ProviderKind::Anthropic,
            _ => ProviderKind::OpenRouter,
        }
    }

    /// All provider kinds, in declared order.
    pub fn all() -> [ProviderKind; 3] {
        [
            ProviderKind::OpenAi,
            ProviderKind::OpenRouter,
            ProviderKind::Anthropic,
        ]
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for ProviderKind {
    fn default() -> Self {
        ProviderKind::OpenRouter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        assert_eq!(ProviderKind::parse_or_default("openai"), ProviderKind::OpenAi);
        assert_eq!(
            ProviderKind::parse_or_default("OpenRouter"),
            ProviderKind::OpenRouter
        );
        assert_eq!(
            ProviderKind::parse_or_default(" anthropic "),
            ProviderKind::Anthropic
        );
    }

    #[test]
    fn test_parse_unknown_falls_back() {
        assert_eq!(
            ProviderKind::parse_or_default("mystery-cloud"),
            ProviderKind::OpenRouter
        );
        assert_eq!(ProviderKind::parse_or_default(""), ProviderKind::OpenRouter);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ProviderKind::OpenAi).unwrap();
        assert_eq!(json, "\"openai\"");

        let kind: ProviderKind = serde_json::from_str("\"openrouter\"").unwrap();
        assert_eq!(kind, ProviderKind::OpenRouter);
    }
}
