//! Durable session storage.

use agent_core::{Role, Turn};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use session::{ConversationSession, SessionError, SessionStore};
use sqlx::{FromRow, SqlitePool};

/// Row shape for the `sessions` table.
#[derive(Debug, FromRow)]
struct SessionRow {
    id: String,
    agent_id: String,
    user_id: String,
    created_at: String,
    updated_at: String,
}

/// Row shape for the `turns` table.
#[derive(Debug, FromRow)]
struct TurnRow {
    role: String,
    content: String,
    created_at: String,
}

/// `SessionStore` backed by SQLite.
///
/// `put` rewrites the session's turn log in one transaction, so a failed
/// write never leaves a half-updated session visible.
#[derive(Debug, Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    /// Create a store over an existing pool. Migrations must have run.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_turns(&self, session_id: &str) -> Result<Vec<Turn>, SessionError> {
        let rows = sqlx::query_as::<_, TurnRow>(
            "SELECT role, content, created_at FROM turns WHERE session_id = ? ORDER BY id",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(turn_from_row).collect()
    }

    async fn assemble(
        &self,
        row: SessionRow,
    ) -> Result<ConversationSession, SessionError> {
        let turns = self.load_turns(&row.id).await?;
        Ok(ConversationSession {
            turns,
            agent_id: row.agent_id,
            user_id: row.user_id,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
            id: row.id,
        })
    }
}

fn store_err(err: sqlx::Error) -> SessionError {
    SessionError::Store(err.to_string())
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, SessionError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| SessionError::Store(format!("invalid timestamp {:?}: {}", value, e)))
}

fn turn_from_row(row: TurnRow) -> Result<Turn, SessionError> {
    let role = match row.role.as_str() {
        "system" => Role::System,
        "user" => Role::User,
        "assistant" => Role::Assistant,
        other => {
            return Err(SessionError::Store(format!("unknown turn role: {}", other)));
        }
    };
    Ok(Turn::new(role, row.content, parse_timestamp(&row.created_at)?))
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn get(&self, id: &str) -> Result<Option<ConversationSession>, SessionError> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT id, agent_id, user_id, created_at, updated_at FROM sessions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        match row {
            Some(row) => Ok(Some(self.assemble(row).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_agent_and_user(
        &self,
        agent_id: &str,
        user_id: &str,
    ) -> Result<Option<ConversationSession>, SessionError> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT id, agent_id, user_id, created_at, updated_at \
             FROM sessions WHERE agent_id = ? AND user_id = ?",
        )
        .bind(agent_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        match row {
            Some(row) => Ok(Some(self.assemble(row).await?)),
            None => Ok(None),
        }
    }

    async fn put(&self, session: ConversationSession) -> Result<(), SessionError> {
        let mut tx = self.pool.begin().await.map_err(store_err)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (id, agent_id, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (id) DO UPDATE SET updated_at = excluded.updated_at
            "#,
        )
        .bind(&session.id)
        .bind(&session.agent_id)
        .bind(&session.user_id)
        .bind(session.created_at.to_rfc3339())
        .bind(session.updated_at.to_rfc3339())
        .execute(&mut *tx)
        .await
        .map_err(store_err)?;

        sqlx::query("DELETE FROM turns WHERE session_id = ?")
            .bind(&session.id)
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;

        for turn in &session.turns {
            sqlx::query(
                "INSERT INTO turns (session_id, role, content, created_at) VALUES (?, ?, ?, ?)",
            )
            .bind(&session.id)
            .bind(turn.role.as_str())
            .bind(&turn.content)
            .bind(turn.timestamp.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(store_err)?;
        }

        tx.commit().await.map_err(store_err)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_db;

    #[tokio::test]
    async fn test_put_and_get_round_trip() {
        let db = test_db().await;
        let store = SqliteSessionStore::new(db.pool().clone());

        let mut session = ConversationSession::new("frankbot", "user-1");
        session.turns.push(Turn::user("hello"));
        session.turns.push(Turn::assistant("hi there"));

        store.put(session.clone()).await.unwrap();

        let fetched = store.get(&session.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, session.id);
        assert_eq!(fetched.agent_id, "frankbot");
        assert_eq!(fetched.turns.len(), 2);
        assert_eq!(fetched.turns[0].role, Role::User);
        assert_eq!(fetched.turns[1].content, "hi there");
    }

    #[tokio::test]
    async fn test_get_missing() {
        let db = test_db().await;
        let store = SqliteSessionStore::new(db.pool().clone());
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_replaces_turns() {
        let db = test_db().await;
        let store = SqliteSessionStore::new(db.pool().clone());

        let mut session = ConversationSession::new("frankbot", "user-1");
        session.turns.push(Turn::user("hello"));
        store.put(session.clone()).await.unwrap();

        // Clear and re-put: the turn log must follow.
        session.turns.clear();
        store.put(session.clone()).await.unwrap();

        let fetched = store.get(&session.id).await.unwrap().unwrap();
        assert!(fetched.turns.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_agent_and_user() {
        let db = test_db().await;
        let store = SqliteSessionStore::new(db.pool().clone());

        let session = ConversationSession::new("frankbot", "user-1");
        store.put(session.clone()).await.unwrap();
        store
            .put(ConversationSession::new("creative-coach", "user-1"))
            .await
            .unwrap();

        let found = store
            .find_by_agent_and_user("frankbot", "user-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, session.id);

        assert!(store
            .find_by_agent_and_user("frankbot", "user-2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_timestamps_survive_round_trip() {
        let db = test_db().await;
        let store = SqliteSessionStore::new(db.pool().clone());

        let mut session = ConversationSession::new("frankbot", "user-1");
        session.turns.push(Turn::user("hello"));
        let original_ts = session.turns[0].timestamp;
        store.put(session.clone()).await.unwrap();

        let fetched = store.get(&session.id).await.unwrap().unwrap();
        // RFC 3339 keeps sub-second precision, so ordering is preserved.
        assert_eq!(
            fetched.turns[0].timestamp.timestamp_millis(),
            original_ts.timestamp_millis()
        );
    }
}
