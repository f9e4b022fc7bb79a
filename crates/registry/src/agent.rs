//! Agent configuration types and registry.

use indexmap::IndexMap;
use model_catalog::ProviderKind;
use serde::{Deserialize, Serialize};

use crate::builtin::built_in_agents;

/// Configuration for an autonomous conversational agent.
///
/// Agents are a superset of personas oriented toward multi-turn task
/// completion: they carry capability tags and a memory flag that controls
/// whether prior turns are replayed to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description for listings.
    pub description: String,
    /// System prompt sent with every dispatch.
    pub system_prompt: String,
    /// Capability tags, used by recommendations and listings.
    pub capabilities: Vec<String>,
    /// Default model identifier.
    pub default_model: String,
    /// Which provider serves this agent by default.
    pub provider: ProviderKind,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether prior turns are retained and replayed on dispatch.
    pub memory_enabled: bool,
}

impl AgentConfig {
    /// Whether this agent carries the given capability tag.
    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.iter().any(|c| c == tag)
    }
}

/// Catalog of built-in agents.
///
/// The HTTP surface exposes no agent creation, so the registry is read-only
/// over static data, in declared order.
#[derive(Debug, Clone)]
pub struct AgentRegistry {
    agents: IndexMap<String, AgentConfig>,
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentRegistry {
    /// Build the registry from the built-in agent set.
    pub fn new() -> Self {
        Self::with_agents(built_in_agents())
    }

    /// Build a registry from explicit agents, for tests.
    pub fn with_agents(agents: Vec<AgentConfig>) -> Self {
        let agents = agents
            .into_iter()
            .map(|agent| (agent.id.clone(), agent))
            .collect();
        Self { agents }
    }

    /// All agents, in declared order.
    pub fn list(&self) -> Vec<AgentConfig> {
        self.agents.values().cloned().collect()
    }

    /// Look up an agent by identifier.
    pub fn get(&self, id: &str) -> Option<&AgentConfig> {
        self.agents.get(id)
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
