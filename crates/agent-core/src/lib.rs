//! Core trait and types for AI provider integrations.
//!
//! This crate provides the shared interface the FrankX gateway uses to talk
//! to hosted language-model providers. It defines:
//!
//! - [`Provider`] - The trait every provider client implements
//! - [`Turn`] / [`Role`] - Role-tagged conversation messages
//! - [`CompletionRequest`] - The outbound request a dispatch builds
//! - [`ProviderError`] - Error types for provider operations
//! - [`FallbackTable`] - The canned-response table used when a provider is down
//!
//! # Example
//!
//! ```rust
//! use agent_core::{async_trait, CompletionRequest, Provider, ProviderError};
//!
//! struct MyProvider;
//!
//! #[async_trait]
//! impl Provider for MyProvider {
//!     async fn complete(&self, _request: CompletionRequest) -> Result<String, ProviderError> {
//!         Ok("Hello!".to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyProvider"
//!     }
//! }
//! ```

mod error;
mod fallback;
mod prompt;
mod provider;
mod turn;

pub use error::ProviderError;
pub use fallback::{FallbackRule, FallbackTable};
pub use prompt::hash_prompt;
pub use provider::{CompletionRequest, Provider};
pub use turn::{Role, Turn};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
