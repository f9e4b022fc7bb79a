//! OpenAI-compatible chat completion client.
//!
//! One client covers every provider the gateway routes to: OpenAI itself,
//! OpenRouter, and Anthropic-compatible gateways all speak the same
//! `/v1/chat/completions` wire shape, differing only in base URL and key.
//! Configure one [`OpenAiProvider`] per upstream.

mod api_types;
mod config;
mod provider;

pub use api_types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
pub use config::OpenAiProviderConfig;
pub use provider::OpenAiProvider;
