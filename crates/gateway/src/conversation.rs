//! Session-backed conversation handling.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use registry::slugify;
use session::SessionManager;
use tracing::info;

use crate::error::GatewayError;
use crate::gateway::{DispatchGateway, DispatchOutcome};

/// Result of opening a conversation.
#[derive(Debug, Clone)]
pub struct ConversationOpened {
    /// The session backing this conversation.
    pub session_id: String,
    /// The assistant's reply to the initial message, when one was sent.
    pub initial_response: Option<DispatchOutcome>,
    /// Timestamp of the reply, or of session creation.
    pub timestamp: DateTime<Utc>,
}

/// Result of sending a message into a conversation.
#[derive(Debug, Clone)]
pub struct MessageSent {
    /// The assistant's reply (real or degraded).
    pub outcome: DispatchOutcome,
    /// Timestamp of the appended assistant turn.
    pub timestamp: DateTime<Utc>,
}

/// Conversation operations over the session manager and dispatch gateway.
///
/// Every read → dispatch → append cycle runs under the session's lock, so
/// two concurrent messages into the same session serialize instead of
/// interleaving their appends.
pub struct ConversationService {
    gateway: Arc<DispatchGateway>,
    sessions: Arc<SessionManager>,
}

impl ConversationService {
    /// Create a service over the given gateway and session manager.
    pub fn new(gateway: Arc<DispatchGateway>, sessions: Arc<SessionManager>) -> Self {
        Self { gateway, sessions }
    }

    /// Open (or re-open) the conversation for an agent/user pair.
    ///
    /// Fails with `TargetNotFound` when the agent does not exist. When
    /// `initial_message` is given, it is dispatched immediately and both
    /// turns are appended.
    pub async fn create_conversation(
        &self,
        agent_id: &str,
        user_id: &str,
        initial_message: Option<&str>,
    ) -> Result<ConversationOpened, GatewayError> {
        // Resolve up front so an unknown agent is a real error, not an
        // empty session.
        self.gateway.resolve(agent_id).await?;

        let session = self.sessions.get_or_create(agent_id, user_id).await?;
        info!(
            "Conversation opened: session {} (agent: {}, user: {})",
            session.id, agent_id, user_id
        );

        let Some(message) = initial_message.filter(|m| !m.trim().is_empty()) else {
            return Ok(ConversationOpened {
                session_id: session.id,
                initial_response: None,
                timestamp: session.created_at,
            });
        };

        let sent = self.send_message(&session.id, message).await?;
        Ok(ConversationOpened {
            session_id: session.id,
            initial_response: Some(sent.outcome),
            timestamp: sent.timestamp,
        })
    }

    /// Send a message into an existing session.
    ///
    /// Fails with a session `NotFound` for unknown ids. Dispatch failures
    /// do not fail the call - the degraded outcome is appended and
    /// returned like any other reply.
    pub async fn send_message(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<MessageSent, GatewayError> {
        let lock = self.sessions.session_lock(session_id).await;
        let _guard = lock.lock().await;

        let session = self.sessions.get(session_id).await?;
        let outcome = self
            .gateway
            .dispatch(&session.agent_id, &session.turns, message)
            .await?;

        let appended = self
            .sessions
            .append_exchange(session_id, message, &outcome.text)
            .await?;

        Ok(MessageSent {
            timestamp: appended.assistant_turn.timestamp,
            outcome,
        })
    }

    /// Clear a session's turns. Identity and association persist.
    pub async fn clear_conversation(&self, session_id: &str) -> Result<(), GatewayError> {
        let lock = self.sessions.session_lock(session_id).await;
        let _guard = lock.lock().await;

        self.sessions.clear(session_id).await?;
        Ok(())
    }

    /// One-off persona exchange with no session persistence.
    ///
    /// The character name is resolved by its slug ("Frank" → "frank").
    pub async fn single_turn(
        &self,
        character_name: &str,
        message: &str,
        context: Option<&str>,
    ) -> Result<DispatchOutcome, GatewayError> {
        let id = slugify(character_name);
        self.gateway.dispatch_single(&id, message, context).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agent_core::Provider;
    use mock_provider::{CannedProvider, FailingProvider};
    use model_catalog::ProviderKind;
    use registry::{AgentRegistry, InMemoryPersonaStore, PersonaRegistry};
    use session::{InMemorySessionStore, SessionError};
    use std::collections::HashMap;

    fn service_with(
        kind: ProviderKind,
        provider: Arc<dyn Provider>,
    ) -> (ConversationService, Arc<SessionManager>) {
        let agents = Arc::new(AgentRegistry::new());
        let personas = Arc::new(PersonaRegistry::new(
            Arc::new(InMemoryPersonaStore::new()),
            "openai/gpt-4o-mini",
        ));
        let mut providers: HashMap<ProviderKind, Arc<dyn Provider>> = HashMap::new();
        providers.insert(kind, provider);

        let gateway = Arc::new(DispatchGateway::new(agents, personas, providers));
        let sessions = Arc::new(SessionManager::new(Arc::new(InMemorySessionStore::new())));
        (
            ConversationService::new(gateway, sessions.clone()),
            sessions,
        )
    }

    fn canned_service() -> (ConversationService, Arc<SessionManager>) {
        service_with(ProviderKind::OpenAi, Arc::new(CannedProvider::new("reply")))
    }

    #[tokio::test]
    async fn test_create_without_initial_message() {
        let (service, _) = canned_service();
        let opened = service
            .create_conversation("frankbot", "user-1", None)
            .await
            .unwrap();

        assert!(opened.initial_response.is_none());
        assert!(!opened.session_id.is_empty());
    }

    #[tokio::test]
    async fn test_create_with_initial_message() {
        let (service, sessions) = canned_service();
        let opened = service
            .create_conversation("frankbot", "user-1", Some("hello"))
            .await
            .unwrap();

        let response = opened.initial_response.unwrap();
        assert_eq!(response.text, "reply");

        let session = sessions.get(&opened.session_id).await.unwrap();
        assert_eq!(session.turns.len(), 2);
        assert_eq!(session.turns[0].content, "hello");
        assert_eq!(session.turns[1].content, "reply");
    }

    #[tokio::test]
    async fn test_create_unknown_agent() {
        let (service, _) = canned_service();
        let result = service.create_conversation("nobody", "user-1", None).await;
        assert!(matches!(result, Err(GatewayError::TargetNotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_reuses_pair_session() {
        let (service, _) = canned_service();
        let first = service
            .create_conversation("frankbot", "user-1", None)
            .await
            .unwrap();
        let second = service
            .create_conversation("frankbot", "user-1", None)
            .await
            .unwrap();
        assert_eq!(first.session_id, second.session_id);
    }

    #[tokio::test]
    async fn test_send_message_appends_two_turns_each() {
        let (service, sessions) = canned_service();
        let opened = service
            .create_conversation("frankbot", "user-1", None)
            .await
            .unwrap();

        for i in 0..3 {
            let sent = service
                .send_message(&opened.session_id, &format!("message {}", i))
                .await
                .unwrap();
            assert_eq!(sent.outcome.text, "reply");
        }

        let session = sessions.get(&opened.session_id).await.unwrap();
        assert_eq!(session.turns.len(), 6);
        assert_eq!(session.turns[0].content, "message 0");
        assert_eq!(session.turns[4].content, "message 2");
    }

    #[tokio::test]
    async fn test_send_message_unknown_session() {
        let (service, _) = canned_service();
        let result = service.send_message("missing", "hello").await;
        assert!(matches!(
            result,
            Err(GatewayError::Session(SessionError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn test_send_message_survives_provider_outage() {
        let (service, sessions) =
            service_with(ProviderKind::OpenAi, Arc::new(FailingProvider::new()));
        let opened = service
            .create_conversation("frankbot", "user-1", Some("What is a center of excellence?"))
            .await
            .unwrap();

        let response = opened.initial_response.unwrap();
        assert!(response.degraded);
        assert!(!response.text.is_empty());

        // The degraded reply is part of the session like any other turn.
        let session = sessions.get(&opened.session_id).await.unwrap();
        assert_eq!(session.turns.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_conversation_is_idempotent() {
        let (service, sessions) = canned_service();
        let opened = service
            .create_conversation("frankbot", "user-1", Some("hello"))
            .await
            .unwrap();

        service.clear_conversation(&opened.session_id).await.unwrap();
        service.clear_conversation(&opened.session_id).await.unwrap();
        assert!(sessions.get(&opened.session_id).await.unwrap().turns.is_empty());

        let result = service.clear_conversation("missing").await;
        assert!(matches!(result, Err(GatewayError::Session(_))));
    }

    #[tokio::test]
    async fn test_single_turn_resolves_by_name() {
        let (service, _) = canned_service();
        let outcome = service
            .single_turn("Frank", "advice?", None)
            .await
            .unwrap();
        assert_eq!(outcome.text, "reply");

        let result = service.single_turn("Unknown Character", "hi", None).await;
        assert!(matches!(result, Err(GatewayError::TargetNotFound { .. })));
    }
}
