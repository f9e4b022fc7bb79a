//! The persona registry.

use std::sync::Arc;

use agent_core::hash_prompt;
use indexmap::IndexMap;
use model_catalog::ProviderKind;
use tracing::{debug, info};

use crate::builtin::built_in_personas;
use crate::error::{RegistryError, Result};
use crate::persona::{NewPersona, Persona, PersonaUpdate};
use crate::store::PersonaStore;

/// Registry merging the read-only built-in personas with a store of
/// end-user custom personas.
///
/// Listing order is built-ins first (declared order), then custom records
/// in creation order. Built-in ids can never be updated or deleted.
pub struct PersonaRegistry {
    built_ins: IndexMap<String, Persona>,
    store: Arc<dyn PersonaStore>,
    default_model: String,
}

impl PersonaRegistry {
    /// Create a registry over the standard built-in set.
    ///
    /// `default_model` is assigned to custom personas created without an
    /// explicit model.
    pub fn new(store: Arc<dyn PersonaStore>, default_model: impl Into<String>) -> Self {
        Self::with_built_ins(built_in_personas(), store, default_model)
    }

    /// Create a registry with an explicit built-in set, for tests.
    pub fn with_built_ins(
        built_ins: Vec<Persona>,
        store: Arc<dyn PersonaStore>,
        default_model: impl Into<String>,
    ) -> Self {
        let built_ins = built_ins
            .into_iter()
            .map(|persona| (persona.id.clone(), persona))
            .collect();
        Self {
            built_ins,
            store,
            default_model: default_model.into(),
        }
    }

    /// Whether an id names a built-in persona.
    pub fn is_built_in(&self, id: &str) -> bool {
        self.built_ins.contains_key(id)
    }

    /// All personas: built-ins first, then custom in creation order.
    pub async fn list(&self) -> Result<Vec<Persona>> {
        let mut personas: Vec<Persona> = self.built_ins.values().cloned().collect();
        personas.extend(self.store.list().await?);
        Ok(personas)
    }

    /// Look up a persona by id. Built-ins take precedence.
    pub async fn get(&self, id: &str) -> Result<Persona> {
        if let Some(persona) = self.built_ins.get(id) {
            return Ok(persona.clone());
        }
        self.store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::persona_not_found(id))
    }

    /// Create a custom persona.
    ///
    /// Fails with `Validation` when required fields are missing, and with
    /// `Conflict` when the derived id collides with a built-in (unless the
    /// request is explicitly marked custom) or with an existing custom
    /// record.
    pub async fn create(&self, new: NewPersona) -> Result<Persona> {
        new.validate()?;

        let id = new.derived_id();
        if id.is_empty() {
            return Err(RegistryError::Validation { field: "name" });
        }

        let marked_custom = new.is_custom.unwrap_or(false);
        if self.is_built_in(&id) && !marked_custom {
            return Err(RegistryError::Conflict { id });
        }

        let persona = Persona {
            id: id.clone(),
            name: new.name,
            system_prompt: new.system_prompt,
            model: new.model.unwrap_or_else(|| self.default_model.clone()),
            provider: new
                .provider
                .as_deref()
                .map(ProviderKind::parse_or_default)
                .unwrap_or_default(),
            description: new.description,
            avatar_url: new.avatar_url,
            // The flag mirrors what the caller passed; being a custom
            // record is a property of where it lives, not of this field.
            is_custom: marked_custom,
            created_by: new.created_by,
        };

        self.store.insert(persona.clone()).await?;

        info!(
            "Created persona {} (model: {}, prompt fingerprint: {})",
            persona.id,
            persona.model,
            hash_prompt(&persona.system_prompt)
        );
        Ok(persona)
    }

    /// Apply a partial update to a custom persona.
    ///
    /// Built-in ids fail with `Forbidden`; unknown ids with `NotFound`.
    /// The merge is validated before anything is written, so a rejected
    /// patch has no effect.
    pub async fn update(&self, id: &str, patch: PersonaUpdate) -> Result<Persona> {
        if self.is_built_in(id) {
            return Err(RegistryError::Forbidden { id: id.to_string() });
        }

        let mut persona = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| RegistryError::persona_not_found(id))?;

        patch.apply(&mut persona)?;
        self.store.update(persona.clone()).await?;

        debug!(
            "Updated persona {} (prompt fingerprint: {})",
            persona.id,
            hash_prompt(&persona.system_prompt)
        );
        Ok(persona)
    }

    /// Delete a custom persona. Same `Forbidden`/`NotFound` rules as update.
    pub async fn delete(&self, id: &str) -> Result<()> {
        if self.is_built_in(id) {
            return Err(RegistryError::Forbidden { id: id.to_string() });
        }
        self.store.delete(id).await?;
        info!("Deleted persona {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryPersonaStore;

    fn registry() -> PersonaRegistry {
        PersonaRegistry::new(Arc::new(InMemoryPersonaStore::new()), "openai/gpt-4o-mini")
    }

    fn new_persona(name: &str) -> NewPersona {
        NewPersona {
            name: name.to_string(),
            system_prompt: "You are helpful.".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let registry = registry();
        let created = registry.create(new_persona("Test Bot")).await.unwrap();

        assert_eq!(created.id, "test-bot");
        // isCustom stays false unless explicitly passed.
        assert!(!created.is_custom);
        assert_eq!(created.model, "openai/gpt-4o-mini");

        let fetched = registry.get("test-bot").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_missing_fields() {
        let registry = registry();
        let result = registry
            .create(NewPersona {
                name: "No Prompt".to_string(),
                ..Default::default()
            })
            .await;
        assert!(matches!(result, Err(RegistryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_built_in_collision() {
        let registry = registry();
        let result = registry.create(new_persona("Frank")).await;
        assert!(matches!(result, Err(RegistryError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_built_in_collision_marked_custom() {
        let registry = registry();
        let mut new = new_persona("Frank");
        new.is_custom = Some(true);

        // Allowed when explicitly marked custom; reads still resolve the
        // built-in first.
        let created = registry.create(new).await.unwrap();
        assert_eq!(created.id, "frank");
        assert!(!registry.get("frank").await.unwrap().is_custom);
    }

    #[tokio::test]
    async fn test_create_duplicate_custom() {
        let registry = registry();
        registry.create(new_persona("Test Bot")).await.unwrap();

        let result = registry.create(new_persona("Test Bot")).await;
        assert!(matches!(result, Err(RegistryError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_list_order() {
        let registry = registry();
        registry.create(new_persona("Zeta")).await.unwrap();
        registry.create(new_persona("Alpha")).await.unwrap();

        let ids: Vec<_> = registry
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();

        // Built-ins first in declared order, then custom in creation order.
        assert_eq!(
            ids,
            vec!["frank", "starlight", "the-architect", "zeta", "alpha"]
        );
    }

    #[tokio::test]
    async fn test_built_in_immutable() {
        let registry = registry();
        let before = registry.get("frank").await.unwrap();

        let update = registry
            .update(
                "frank",
                PersonaUpdate {
                    description: Some("hijacked".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(update, Err(RegistryError::Forbidden { .. })));

        let delete = registry.delete("frank").await;
        assert!(matches!(delete, Err(RegistryError::Forbidden { .. })));

        assert_eq!(registry.get("frank").await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let registry = registry();
        registry.create(new_persona("Test Bot")).await.unwrap();

        let updated = registry
            .update(
                "test-bot",
                PersonaUpdate {
                    system_prompt: Some("Updated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.system_prompt, "Updated");
        assert_eq!(updated.name, "Test Bot");
        assert_eq!(registry.get("test-bot").await.unwrap().system_prompt, "Updated");
    }

    #[tokio::test]
    async fn test_rejected_update_has_no_effect() {
        let registry = registry();
        registry.create(new_persona("Test Bot")).await.unwrap();

        let result = registry
            .update(
                "test-bot",
                PersonaUpdate {
                    system_prompt: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(RegistryError::Validation { .. })));
        assert_eq!(
            registry.get("test-bot").await.unwrap().system_prompt,
            "You are helpful."
        );
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let registry = registry();
        registry.create(new_persona("Test Bot")).await.unwrap();
        registry.delete("test-bot").await.unwrap();

        let result = registry.get("test-bot").await;
        assert!(matches!(result, Err(RegistryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_unknown_custom() {
        let registry = registry();
        let result = registry.update("ghost", PersonaUpdate::default()).await;
        assert!(matches!(result, Err(RegistryError::NotFound { .. })));
    }
}
