//! The session record.

use agent_core::{Role, Turn};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The record of turns exchanged between a user and an agent.
///
/// The agent reference is weak: deleting the agent leaves the session in
/// place, and later dispatches fail with a not-found error instead of
/// fabricating a reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSession {
    /// Opaque unique identifier, generated at creation.
    pub id: String,
    /// The agent (or persona) this conversation is with.
    pub agent_id: String,
    /// The user this conversation belongs to.
    pub user_id: String,
    /// Ordered turn log, oldest first. Append-only between clears.
    pub turns: Vec<Turn>,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When a turn was last appended or the session cleared.
    pub updated_at: DateTime<Utc>,
}

impl ConversationSession {
    /// Create an empty session for an agent/user pair.
    pub fn new(agent_id: impl Into<String>, user_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            agent_id: agent_id.into(),
            user_id: user_id.into(),
            turns: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The timestamp a newly appended turn must not precede.
    pub fn last_timestamp(&self) -> Option<DateTime<Utc>> {
        self.turns.last().map(|turn| turn.timestamp)
    }

    /// Number of user/assistant exchanges (system turns excluded).
    pub fn exchange_count(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.role == Role::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_has_unique_id() {
        let a = ConversationSession::new("frankbot", "user-1");
        let b = ConversationSession::new("frankbot", "user-1");
        assert_ne!(a.id, b.id);
        assert!(a.turns.is_empty());
    }

    #[test]
    fn test_exchange_count() {
        let mut session = ConversationSession::new("frankbot", "user-1");
        session.turns.push(Turn::system("prompt"));
        session.turns.push(Turn::user("hi"));
        session.turns.push(Turn::assistant("hello"));
        session.turns.push(Turn::user("more"));
        session.turns.push(Turn::assistant("sure"));

        assert_eq!(session.exchange_count(), 2);
    }
}
