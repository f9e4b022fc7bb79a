//! Session storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::session::ConversationSession;

/// Storage interface for conversation sessions.
///
/// `put` is an upsert of the whole record; the manager owns all turn-level
/// invariants, the store just persists.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a session by id.
    async fn get(&self, id: &str) -> Result<Option<ConversationSession>>;

    /// Find the live session for an agent/user pair, if any.
    async fn find_by_agent_and_user(
        &self,
        agent_id: &str,
        user_id: &str,
    ) -> Result<Option<ConversationSession>>;

    /// Insert or replace a session record.
    async fn put(&self, session: ConversationSession) -> Result<()>;
}

/// Default in-memory store. Process-lifetime only, lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, ConversationSession>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<ConversationSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).cloned())
    }

    async fn find_by_agent_and_user(
        &self,
        agent_id: &str,
        user_id: &str,
    ) -> Result<Option<ConversationSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .values()
            .find(|s| s.agent_id == agent_id && s.user_id == user_id)
            .cloned())
    }

    async fn put(&self, session: ConversationSession) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), session);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemorySessionStore::new();
        let session = ConversationSession::new("frankbot", "user-1");
        let id = session.id.clone();

        store.put(session).await.unwrap();
        assert!(store.get(&id).await.unwrap().is_some());
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_agent_and_user() {
        let store = InMemorySessionStore::new();
        store
            .put(ConversationSession::new("frankbot", "user-1"))
            .await
            .unwrap();
        store
            .put(ConversationSession::new("frankbot", "user-2"))
            .await
            .unwrap();

        let found = store
            .find_by_agent_and_user("frankbot", "user-2")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, "user-2");

        assert!(store
            .find_by_agent_and_user("creative-coach", "user-1")
            .await
            .unwrap()
            .is_none());
    }
}
