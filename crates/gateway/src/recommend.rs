//! Profile-based agent and resource recommendations.

use std::sync::Arc;

use registry::{AgentConfig, AgentRegistry};
use serde::Deserialize;

use crate::resources::{resource_catalog, Resource};

/// A coarse client profile used as ranking input.
///
/// Every field is optional; absent fields are simply ignored as ranking
/// criteria. An empty profile yields the default-ordered catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientProfile {
    /// Industry the client operates in.
    #[serde(default)]
    pub industry: Option<String>,
    /// AI maturity stage, free-form.
    #[serde(default)]
    pub maturity: Option<String>,
    /// What the client wants to achieve.
    #[serde(default)]
    pub goals: Vec<String>,
    /// What is currently in the way.
    #[serde(default)]
    pub challenges: Vec<String>,
}

impl ClientProfile {
    /// Lowercased ranking terms drawn from every populated field.
    fn terms(&self) -> Vec<String> {
        let mut terms: Vec<String> = Vec::new();
        terms.extend(self.goals.iter().map(|g| g.trim().to_lowercase()));
        terms.extend(self.challenges.iter().map(|c| c.trim().to_lowercase()));
        if let Some(industry) = &self.industry {
            terms.push(industry.trim().to_lowercase());
        }
        if let Some(maturity) = &self.maturity {
            terms.push(maturity.trim().to_lowercase());
        }
        terms.retain(|t| !t.is_empty());
        terms
    }

    /// Whether the profile carries no ranking criteria at all.
    pub fn is_empty(&self) -> bool {
        self.terms().is_empty()
    }
}

/// Deterministic profile-to-catalog ranking.
///
/// Items whose tag set intersects the profile's terms rank above items
/// with no overlap; ties keep catalog order (stable sort). No randomness,
/// no hidden state: identical input produces identical output.
pub struct RecommendationEngine {
    agents: Arc<AgentRegistry>,
    resources: Vec<Resource>,
}

impl RecommendationEngine {
    /// Create an engine over the agent registry and the standard resource
    /// catalog.
    pub fn new(agents: Arc<AgentRegistry>) -> Self {
        Self {
            agents,
            resources: resource_catalog(),
        }
    }

    /// Rank agents for a profile.
    pub fn recommend_agents(&self, profile: &ClientProfile) -> Vec<AgentConfig> {
        let terms = profile.terms();
        let mut agents = self.agents.list();
        rank_by_overlap(&mut agents, &terms, |agent| &agent.capabilities);
        agents
    }

    /// Rank resources for a profile.
    pub fn recommend_resources(&self, profile: &ClientProfile) -> Vec<Resource> {
        let terms = profile.terms();
        let mut resources = self.resources.clone();
        rank_by_overlap(&mut resources, &terms, |resource| &resource.tags);
        resources
    }
}

/// Stable-sort items descending by tag/term overlap.
fn rank_by_overlap<T>(items: &mut [T], terms: &[String], tags_of: impl Fn(&T) -> &Vec<String>) {
    if terms.is_empty() {
        return;
    }
    items.sort_by_key(|item| {
        let overlap = tags_of(item)
            .iter()
            .filter(|tag| terms.contains(&tag.to_lowercase()))
            .count();
        std::cmp::Reverse(overlap)
    });
}
