//! Custom-persona storage.
//!
//! The registry talks to storage through [`PersonaStore`] so tests run on
//! the in-memory implementation and production can swap in a durable one
//! (see the `storage` crate) without touching registry logic.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::error::{RegistryError, Result};
use crate::persona::Persona;

/// Storage interface for custom personas.
///
/// Implementations must preserve creation order in `list` and keep each
/// mutation atomic: a failed insert/update/delete leaves no partial state
/// visible to subsequent reads.
#[async_trait]
pub trait PersonaStore: Send + Sync {
    /// All custom personas, in creation order.
    async fn list(&self) -> Result<Vec<Persona>>;

    /// Look up a custom persona by id.
    async fn get(&self, id: &str) -> Result<Option<Persona>>;

    /// Insert a new record. Fails with `Conflict` when the id exists.
    async fn insert(&self, persona: Persona) -> Result<()>;

    /// Replace an existing record. Fails with `NotFound` when absent.
    async fn update(&self, persona: Persona) -> Result<()>;

    /// Delete a record. Fails with `NotFound` when absent.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Default in-memory store.
///
/// Process-lifetime only: records are lost on restart. Uses an `IndexMap`
/// so iteration order is creation order.
#[derive(Debug, Default)]
pub struct InMemoryPersonaStore {
    personas: RwLock<IndexMap<String, Persona>>,
}

impl InMemoryPersonaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonaStore for InMemoryPersonaStore {
    async fn list(&self) -> Result<Vec<Persona>> {
        let personas = self.personas.read().await;
        Ok(personas.values().cloned().collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Persona>> {
        let personas = self.personas.read().await;
        Ok(personas.get(id).cloned())
    }

    async fn insert(&self, persona: Persona) -> Result<()> {
        let mut personas = self.personas.write().await;
        if personas.contains_key(&persona.id) {
            return Err(RegistryError::Conflict {
                id: persona.id.clone(),
            });
        }
        personas.insert(persona.id.clone(), persona);
        Ok(())
    }

    async fn update(&self, persona: Persona) -> Result<()> {
        let mut personas = self.personas.write().await;
        match personas.get_mut(&persona.id) {
            Some(existing) => {
                *existing = persona;
                Ok(())
            }
            None => Err(RegistryError::persona_not_found(persona.id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut personas = self.personas.write().await;
        // shift_remove keeps the creation order of the remaining records.
        match personas.shift_remove(id) {
            Some(_) => Ok(()),
            None => Err(RegistryError::persona_not_found(id)),
        }
    }
}
