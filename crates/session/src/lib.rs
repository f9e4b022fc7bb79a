//! Conversation session bookkeeping.
//!
//! A session is the durable record of turns exchanged between one user and
//! one agent. This crate provides:
//!
//! - [`ConversationSession`] - the session record (id, association, turns)
//! - [`SessionStore`] - storage interface with an in-memory default
//! - [`SessionManager`] - append-only turn log with monotonic timestamps,
//!   idempotent clear, and a per-session lock for same-session requests
//!
//! Sessions are never silently deleted: clearing empties the turn sequence
//! but keeps the session identity and its agent/user association.

mod error;
mod manager;
mod session;
mod store;

pub use error::SessionError;
pub use manager::{AppendedExchange, SessionManager};
pub use session::ConversationSession;
pub use store::{InMemorySessionStore, SessionStore};
