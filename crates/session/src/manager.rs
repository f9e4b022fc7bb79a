//! Session lifecycle and turn-log invariants.

use std::collections::HashMap;
use std::sync::Arc;

use agent_core::{Role, Turn};
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Result, SessionError};
use crate::session::ConversationSession;
use crate::store::SessionStore;

/// The pair of turns appended by a completed exchange.
#[derive(Debug, Clone)]
pub struct AppendedExchange {
    pub user_turn: Turn,
    pub assistant_turn: Turn,
}

/// Manages conversation sessions over an injected [`SessionStore`].
///
/// Owns the turn-log invariants: turns are strictly append-only with
/// non-decreasing timestamps, and only a full clear empties them. The
/// manager also hands out a per-session-id mutex so a caller can serialize
/// its whole read → dispatch → append cycle against other requests for the
/// same session; requests for different sessions never contend.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl SessionManager {
    /// Create a manager over the given store.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The mutex guarding a session id.
    ///
    /// Callers hold the lock across read → dispatch → append for that
    /// session. Locks are allocated lazily and live for the process.
    pub async fn session_lock(&self, session_id: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks
            .entry(session_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Get a session, or fail with `NotFound`.
    pub async fn get(&self, session_id: &str) -> Result<ConversationSession> {
        self.store
            .get(session_id)
            .await?
            .ok_or_else(|| SessionError::not_found(session_id))
    }

    /// The live session for an agent/user pair, creating it when absent.
    pub async fn get_or_create(
        &self,
        agent_id: &str,
        user_id: &str,
    ) -> Result<ConversationSession> {
        if let Some(session) = self
            .store
            .find_by_agent_and_user(agent_id, user_id)
            .await?
        {
            return Ok(session);
        }

        let session = ConversationSession::new(agent_id, user_id);
        info!(
            "Created session {} (agent: {}, user: {})",
            session.id, agent_id, user_id
        );
        self.store.put(session.clone()).await?;
        Ok(session)
    }

    /// Append a completed user/assistant exchange to a session.
    ///
    /// Timestamps are clamped so the sequence never decreases, even when
    /// the wall clock steps backwards between appends.
    pub async fn append_exchange(
        &self,
        session_id: &str,
        user_text: &str,
        assistant_text: &str,
    ) -> Result<AppendedExchange> {
        let mut session = self.get(session_id).await?;

        let user_ts = clamp_timestamp(session.last_timestamp());
        let user_turn = Turn::new(Role::User, user_text, user_ts);
        let assistant_ts = clamp_timestamp(Some(user_ts));
        let assistant_turn = Turn::new(Role::Assistant, assistant_text, assistant_ts);

        session.turns.push(user_turn.clone());
        session.turns.push(assistant_turn.clone());
        session.updated_at = assistant_ts;
        self.store.put(session).await?;

        debug!(
            "Appended exchange to session {} ({} chars in, {} chars out)",
            session_id,
            user_text.len(),
            assistant_text.len()
        );

        Ok(AppendedExchange {
            user_turn,
            assistant_turn,
        })
    }

    /// Empty a session's turn log, keeping its identity and association.
    ///
    /// Idempotent: clearing an already-empty session succeeds.
    pub async fn clear(&self, session_id: &str) -> Result<()> {
        let mut session = self.get(session_id).await?;
        session.turns.clear();
        session.updated_at = Utc::now();
        self.store.put(session).await?;
        info!("Cleared session {}", session_id);
        Ok(())
    }
}

/// Next timestamp for an append: now, but never before the previous turn.
fn clamp_timestamp(last: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    match last {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemorySessionStore;

    fn manager() -> SessionManager {
        SessionManager::new(Arc::new(InMemorySessionStore::new()))
    }

    #[tokio::test]
    async fn test_get_or_create_reuses_pair_session() {
        let manager = manager();
        let first = manager.get_or_create("frankbot", "user-1").await.unwrap();
        let second = manager.get_or_create("frankbot", "user-1").await.unwrap();
        assert_eq!(first.id, second.id);

        let other = manager.get_or_create("frankbot", "user-2").await.unwrap();
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_get_unknown_session() {
        let manager = manager();
        let result = manager.get("missing").await;
        assert!(matches!(result, Err(SessionError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_append_is_append_only() {
        let manager = manager();
        let session = manager.get_or_create("frankbot", "user-1").await.unwrap();

        for i in 0..3 {
            manager
                .append_exchange(&session.id, &format!("q{}", i), &format!("a{}", i))
                .await
                .unwrap();
        }

        let session = manager.get(&session.id).await.unwrap();
        assert_eq!(session.turns.len(), 6);
        assert_eq!(session.turns[0].content, "q0");
        assert_eq!(session.turns[1].content, "a0");
        assert_eq!(session.turns[4].content, "q2");
    }

    #[tokio::test]
    async fn test_timestamps_non_decreasing() {
        let manager = manager();
        let session = manager.get_or_create("frankbot", "user-1").await.unwrap();

        for i in 0..5 {
            manager
                .append_exchange(&session.id, &format!("q{}", i), "a")
                .await
                .unwrap();
        }

        let session = manager.get(&session.id).await.unwrap();
        for pair in session.turns.windows(2) {
            assert!(pair[1].timestamp >= pair[0].timestamp);
        }
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let manager = manager();
        let session = manager.get_or_create("frankbot", "user-1").await.unwrap();
        manager
            .append_exchange(&session.id, "hello", "hi")
            .await
            .unwrap();

        manager.clear(&session.id).await.unwrap();
        assert!(manager.get(&session.id).await.unwrap().turns.is_empty());

        // A second clear succeeds and leaves the session empty.
        manager.clear(&session.id).await.unwrap();
        let cleared = manager.get(&session.id).await.unwrap();
        assert!(cleared.turns.is_empty());
        assert_eq!(cleared.agent_id, "frankbot");
        assert_eq!(cleared.user_id, "user-1");
    }

    #[tokio::test]
    async fn test_clear_unknown_session() {
        let manager = manager();
        let result = manager.clear("missing").await;
        assert!(matches!(result, Err(SessionError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_session_lock_is_shared_per_id() {
        let manager = manager();
        let a = manager.session_lock("s1").await;
        let b = manager.session_lock("s1").await;
        let c = manager.session_lock("s2").await;

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_serialize_under_lock() {
        let manager = Arc::new(manager());
        let session = manager.get_or_create("frankbot", "user-1").await.unwrap();

        let mut handles = Vec::new();
        for i in 0..8 {
            let manager = manager.clone();
            let id = session.id.clone();
            handles.push(tokio::spawn(async move {
                let lock = manager.session_lock(&id).await;
                let _guard = lock.lock().await;
                manager
                    .append_exchange(&id, &format!("q{}", i), &format!("a{}", i))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let session = manager.get(&session.id).await.unwrap();
        assert_eq!(session.turns.len(), 16);
        // Exchanges stay paired: user turn always directly before its reply.
        for pair in session.turns.chunks(2) {
            assert_eq!(pair[0].role, Role::User);
            assert_eq!(pair[1].role, Role::Assistant);
        }
    }
}
