//! Static catalog of the language models the gateway can dispatch to.
//!
//! The catalog is pure data: built once at process start, never mutated.
//! Personas and agents reference models by identifier; the catalog also
//! backs task-tag selection (`best_for`) with a designated default so model
//! choice never fails.

mod descriptor;
mod provider_kind;

pub use descriptor::ModelDescriptor;
pub use provider_kind::ProviderKind;

/// Catalog of available model descriptors.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
    default_index: usize,
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelCatalog {
    /// Build the standard catalog.
    ///
    /// The designated default is the cheapest general-purpose chat model.
    pub fn new() -> Self {
        let models = vec![
            ModelDescriptor {
                id: "openai/gpt-4o".to_string(),
                display_name: "GPT-4o".to_string(),
                provider: ProviderKind::OpenAi,
                context_window: 128_000,
                cost_per_1k_tokens: 0.005,
                capabilities: tags(&["chat", "reasoning", "vision", "strategy"]),
                description: "Flagship multimodal model for deep strategy and analysis work."
                    .to_string(),
            },
            ModelDescriptor {
                id: "openai/gpt-4o-mini".to_string(),
                display_name: "GPT-4o mini".to_string(),
                provider: ProviderKind::OpenAi,
                context_window: 128_000,
                cost_per_1k_tokens: 0.000_15,
                capabilities: tags(&["chat", "quick"]),
                description: "Fast, inexpensive default for conversational traffic.".to_string(),
            },
            ModelDescriptor {
                id: "openrouter/anthropic/claude-3.5-sonnet".to_string(),
                display_name: "Claude 3.5 Sonnet".to_string(),
                provider: ProviderKind::OpenRouter,
                context_window: 200_000,
                cost_per_1k_tokens: 0.003,
                capabilities: tags(&["chat", "writing", "reasoning", "creative"]),
                description: "Long-context model routed through OpenRouter, strongest for \
                              long-form writing."
                    .to_string(),
            },
            ModelDescriptor {
                id: "openrouter/meta-llama/llama-3.1-70b".to_string(),
                display_name: "Llama 3.1 70B".to_string(),
                provider: ProviderKind::OpenRouter,
                context_window: 131_072,
                cost_per_1k_tokens: 0.000_9,
                capabilities: tags(&["chat", "open-weights"]),
                description: "Open-weights option for cost-sensitive workloads.".to_string(),
            },
            ModelDescriptor {
                id: "anthropic/claude-3-haiku".to_string(),
                display_name: "Claude 3 Haiku".to_string(),
                provider: ProviderKind::Anthropic,
                context_window: 200_000,
                cost_per_1k_tokens: 0.000_25,
                capabilities: tags(&["chat", "quick", "summarization"]),
                description: "Low-latency model for short exchanges and summaries.".to_string(),
            },
        ];

        let default_index = models
            .iter()
            .position(|m| m.id == "openai/gpt-4o-mini")
            .unwrap_or(0);

        Self {
            models,
            default_index,
        }
    }

    /// All models, in declared order.
    pub fn list(&self) -> &[ModelDescriptor] {
        &self.models
    }

    /// Look up a model by identifier.
    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    /// The designated default model.
    pub fn default_model(&self) -> &ModelDescriptor {
        &self.models[self.default_index]
    }

    /// Select the best model for a task tag.
    ///
    /// Returns the first model carrying the tag, in declared order, or the
    /// default when nothing matches. Never fails.
    pub fn best_for(&self, task_tag: &str) -> &ModelDescriptor {
        let tag = task_tag.to_lowercase();
        self.models
            .iter()
            .find(|m| m.capabilities.iter().any(|c| c == &tag))
            .unwrap_or_else(|| self.default_model())
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
