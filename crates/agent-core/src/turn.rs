//! Role-tagged conversation turns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the conversation. First turn only.
    System,
    /// A message from the end user.
    User,
    /// A reply from the model (or the fallback path).
    Assistant,
}

impl Role {
    /// Wire representation, matching chat-completion APIs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A single message within a conversation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// Who produced this turn.
    pub role: Role,
    /// Message content.
    pub content: String,
    /// When the turn was appended. Non-decreasing within a session.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Create a turn with an explicit timestamp.
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }

    /// Create a system turn stamped now.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content, Utc::now())
    }

    /// Create a user turn stamped now.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, Utc::now())
    }

    /// Create an assistant turn stamped now.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, Utc::now())
    }
}
