//! Durable persona storage.

use async_trait::async_trait;
use chrono::Utc;
use model_catalog::ProviderKind;
use registry::{Persona, PersonaStore, RegistryError};
use sqlx::{FromRow, SqlitePool};

/// Row shape for the `personas` table.
#[derive(Debug, FromRow)]
struct PersonaRow {
    id: String,
    name: String,
    system_prompt: String,
    model: String,
    provider: String,
    description: Option<String>,
    avatar_url: Option<String>,
    is_custom: bool,
    created_by: Option<String>,
}

impl From<PersonaRow> for Persona {
    fn from(row: PersonaRow) -> Self {
        Persona {
            id: row.id,
            name: row.name,
            system_prompt: row.system_prompt,
            model: row.model,
            provider: ProviderKind::parse_or_default(&row.provider),
            description: row.description,
            avatar_url: row.avatar_url,
            is_custom: row.is_custom,
            created_by: row.created_by,
        }
    }
}

/// `PersonaStore` backed by SQLite.
#[derive(Debug, Clone)]
pub struct SqlitePersonaStore {
    pool: SqlitePool,
}

impl SqlitePersonaStore {
    /// Create a store over an existing pool. Migrations must have run.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn store_err(err: sqlx::Error) -> RegistryError {
    RegistryError::Store(err.to_string())
}

const SELECT_COLUMNS: &str = "id, name, system_prompt, model, provider, \
                              description, avatar_url, is_custom, created_by";

#[async_trait]
impl PersonaStore for SqlitePersonaStore {
    async fn list(&self) -> Result<Vec<Persona>, RegistryError> {
        let rows = sqlx::query_as::<_, PersonaRow>(&format!(
            "SELECT {} FROM personas ORDER BY rowid",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(rows.into_iter().map(Persona::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Persona>, RegistryError> {
        let row = sqlx::query_as::<_, PersonaRow>(&format!(
            "SELECT {} FROM personas WHERE id = ?",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(row.map(Persona::from))
    }

    async fn insert(&self, persona: Persona) -> Result<(), RegistryError> {
        sqlx::query(
            r#"
            INSERT INTO personas
                (id, name, system_prompt, model, provider, description,
                 avatar_url, is_custom, created_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&persona.id)
        .bind(&persona.name)
        .bind(&persona.system_prompt)
        .bind(&persona.model)
        .bind(persona.provider.as_str())
        .bind(&persona.description)
        .bind(&persona.avatar_url)
        .bind(persona.is_custom)
        .bind(&persona.created_by)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.is_unique_violation() {
                    return RegistryError::Conflict {
                        id: persona.id.clone(),
                    };
                }
            }
            store_err(e)
        })?;

        Ok(())
    }

    async fn update(&self, persona: Persona) -> Result<(), RegistryError> {
        let result = sqlx::query(
            r#"
            UPDATE personas
            SET name = ?, system_prompt = ?, model = ?, provider = ?,
                description = ?, avatar_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&persona.name)
        .bind(&persona.system_prompt)
        .bind(&persona.model)
        .bind(persona.provider.as_str())
        .bind(&persona.description)
        .bind(&persona.avatar_url)
        .bind(&persona.id)
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::persona_not_found(persona.id));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RegistryError> {
        let result = sqlx::query("DELETE FROM personas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(RegistryError::persona_not_found(id));
        }
        Ok(())
    }
}
