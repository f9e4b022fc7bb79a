//! Persona and agent registries.
//!
//! Two registries back the gateway's dispatch targets:
//!
//! - [`PersonaRegistry`] - named system-prompt + model configurations.
//!   Built-in personas are constructed at process start and read-only;
//!   custom personas live in an injected [`PersonaStore`].
//! - [`AgentRegistry`] - agent configurations oriented toward multi-turn
//!   task completion, with capability tags and a memory flag.
//!
//! The default store is in-memory (process lifetime, non-durable). The
//! `storage` crate provides a SQLite-backed store for durable deployments.

mod agent;
mod builtin;
mod error;
mod persona;
mod registry;
mod slug;
mod store;

pub use agent::{AgentConfig, AgentRegistry};
pub use builtin::{built_in_agents, built_in_personas};
pub use error::RegistryError;
pub use persona::{NewPersona, Persona, PersonaUpdate};
pub use registry::PersonaRegistry;
pub use slug::slugify;
pub use store::{InMemoryPersonaStore, PersonaStore};
