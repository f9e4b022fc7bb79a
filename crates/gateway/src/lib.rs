//! Dispatch gateway for the FrankX AI backend.
//!
//! This crate coordinates the pieces the HTTP layer exposes:
//!
//! - [`DispatchGateway`] - resolves a persona/agent, builds the provider
//!   request, and degrades to a canned fallback when the provider fails
//! - [`ConversationService`] - session-backed conversations (create, send,
//!   clear) and the single-turn persona exchange
//! - [`RecommendationEngine`] - deterministic profile-to-catalog ranking
//!
//! # Architecture
//!
//! ```text
//! HTTP request (api crate)
//!          |
//!          v
//! ConversationService ----> SessionManager (turn log, per-session lock)
//!          |
//!          v
//! DispatchGateway --------> AgentRegistry / PersonaRegistry (resolve)
//!          |
//!          v
//! Provider client (openai-provider) --- on error ---> FallbackTable
//! ```

mod conversation;
mod error;
mod gateway;
mod recommend;
mod resources;

pub use conversation::{ConversationOpened, ConversationService, MessageSent};
pub use error::GatewayError;
pub use gateway::{DispatchGateway, DispatchOutcome, DispatchTarget};
pub use recommend::{ClientProfile, RecommendationEngine};
pub use resources::{resource_catalog, Resource, ResourceKind};
