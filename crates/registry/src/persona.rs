//! Persona types.

use model_catalog::ProviderKind;
use serde::{Deserialize, Serialize};

use crate::error::{RegistryError, Result};
use crate::slug::slugify;

/// A named system-prompt + model configuration.
///
/// Usable in single-turn exchanges (`/ai/conversation`) or as a dispatch
/// target. Built-in personas are read-only; custom personas are end-user
/// records with full CRUD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Persona {
    /// Identifier derived from the name (slug).
    pub id: String,
    /// Display name.
    pub name: String,
    /// System prompt. Always non-empty.
    pub system_prompt: String,
    /// Model identifier. Usually a catalog id, but unknown ids pass through
    /// to the provider opaquely.
    pub model: String,
    /// Which provider serves this persona.
    pub provider: ProviderKind,
    /// Optional blurb shown in listings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Whether this is an end-user record (true) or built-in (false).
    #[serde(default)]
    pub is_custom: bool,
    /// Opaque identifier of the creating user, for custom personas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Request payload for creating a custom persona.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPersona {
    /// Display name. Required.
    #[serde(default)]
    pub name: String,
    /// System prompt. Required.
    #[serde(default)]
    pub system_prompt: String,
    /// Model id; defaults to the catalog default when omitted.
    #[serde(default)]
    pub model: Option<String>,
    /// Provider name; unknown values fall back to the default provider.
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Marks the request as a deliberate custom record.
    #[serde(default)]
    pub is_custom: Option<bool>,
    #[serde(default)]
    pub created_by: Option<String>,
}

impl NewPersona {
    /// Validate required fields.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RegistryError::Validation { field: "name" });
        }
        if self.system_prompt.trim().is_empty() {
            return Err(RegistryError::Validation {
                field: "systemPrompt",
            });
        }
        Ok(())
    }

    /// The identifier this persona would be created under.
    pub fn derived_id(&self) -> String {
        slugify(&self.name)
    }
}

/// Partial update for a custom persona. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl PersonaUpdate {
    /// Apply this patch to a persona, validating updated fields.
    ///
    /// The identifier is stable: renaming does not re-slug.
    pub fn apply(self, persona: &mut Persona) -> Result<()> {
        if let Some(system_prompt) = &self.system_prompt {
            if system_prompt.trim().is_empty() {
                return Err(RegistryError::Validation {
                    field: "systemPrompt",
                });
            }
        }
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(RegistryError::Validation { field: "name" });
            }
        }

        if let Some(name) = self.name {
            persona.name = name;
        }
        if let Some(system_prompt) = self.system_prompt {
            persona.system_prompt = system_prompt;
        }
        if let Some(model) = self.model {
            persona.model = model;
        }
        if let Some(provider) = self.provider {
            persona.provider = ProviderKind::parse_or_default(&provider);
        }
        if let Some(description) = self.description {
            persona.description = Some(description);
        }
        if let Some(avatar_url) = self.avatar_url {
            persona.avatar_url = Some(avatar_url);
        }
        Ok(())
    }
}
