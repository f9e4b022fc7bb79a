//! Model descriptor type.

use serde::{Deserialize, Serialize};

use crate::provider_kind::ProviderKind;

/// A language model the gateway knows how to dispatch to.
///
/// Descriptors are immutable: loaded at process start, never mutated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Globally unique identifier, `provider-namespace/model-name`.
    pub id: String,
    /// Human-readable name.
    pub display_name: String,
    /// Which provider client serves this model.
    pub provider: ProviderKind,
    /// Context window size in tokens.
    pub context_window: u32,
    /// Blended cost per 1K tokens, in USD.
    pub cost_per_1k_tokens: f64,
    /// Capability tags used by `best_for` selection.
    pub capabilities: Vec<String>,
    /// Short description for catalog listings.
    pub description: String,
}

impl ModelDescriptor {
    /// Whether this model carries the given capability tag.
    pub fn has_capability(&self, tag: &str) -> bool {
        self.capabilities.iter().any(|c| c == tag)
    }
}
