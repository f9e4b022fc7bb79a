//! Mock provider implementations for testing gateway dispatch.
//!
//! This crate provides mock implementations of the `Provider` trait:
//! - `EchoProvider` - echoes the last user message back
//! - `CannedProvider` - always returns a fixed reply
//! - `FailingProvider` - always fails, for exercising the fallback path
//! - `DelayedProvider` - wraps another provider with artificial delay
//! - `RecordingProvider` - captures requests for asserting dispatch behavior
//!
//! For production traffic, use the `openai-provider` crate instead.

mod canned;
mod delayed;
mod echo;
mod failing;
mod recording;

pub use canned::CannedProvider;
pub use delayed::DelayedProvider;
pub use echo::EchoProvider;
pub use failing::FailingProvider;
pub use recording::RecordingProvider;
