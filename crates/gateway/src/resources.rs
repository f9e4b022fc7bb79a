//! Static resource catalog for recommendations.

use serde::{Deserialize, Serialize};

/// The kind of a recommended resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Guide,
    Template,
    Course,
    Playbook,
}

/// A recommendable resource: a guide, template, course, or playbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// What kind of resource this is.
    pub kind: ResourceKind,
    /// Tags matched against profile terms.
    pub tags: Vec<String>,
    /// Where the resource lives.
    pub url: String,
    /// One-line description.
    pub description: String,
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// The resource catalog, in declared (default ranking) order.
pub fn resource_catalog() -> Vec<Resource> {
    vec![
        Resource {
            id: "ai-readiness-guide".to_string(),
            title: "AI Readiness Guide".to_string(),
            kind: ResourceKind::Guide,
            tags: tags(&["strategy", "maturity", "assessment"]),
            url: "/resources/ai-readiness-guide".to_string(),
            description: "Figure out which stage of AI adoption you are actually in."
                .to_string(),
        },
        Resource {
            id: "center-of-excellence-playbook".to_string(),
            title: "Center of Excellence Playbook".to_string(),
            kind: ResourceKind::Playbook,
            tags: tags(&["strategy", "operations", "enterprise"]),
            url: "/resources/center-of-excellence-playbook".to_string(),
            description: "Stand up a small AI center of excellence without a big budget."
                .to_string(),
        },
        Resource {
            id: "content-engine-template".to_string(),
            title: "Content Engine Template".to_string(),
            kind: ResourceKind::Template,
            tags: tags(&["content", "writing", "marketing"]),
            url: "/resources/content-engine-template".to_string(),
            description: "A reusable pipeline from topic list to published article."
                .to_string(),
        },
        Resource {
            id: "automation-starter-course".to_string(),
            title: "Automation Starter Course".to_string(),
            kind: ResourceKind::Course,
            tags: tags(&["automation", "operations"]),
            url: "/resources/automation-starter-course".to_string(),
            description: "Build your first three AI-assisted automations in a week."
                .to_string(),
        },
        Resource {
            id: "ai-music-guide".to_string(),
            title: "AI Music Production Guide".to_string(),
            kind: ResourceKind::Guide,
            tags: tags(&["music", "creative"]),
            url: "/resources/ai-music-guide".to_string(),
            description: "From first prompt to finished track with AI music tools."
                .to_string(),
        },
    ]
}
