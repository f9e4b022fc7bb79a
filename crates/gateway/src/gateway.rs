//! The dispatch gateway.

use std::collections::HashMap;
use std::sync::Arc;

use agent_core::{CompletionRequest, FallbackTable, Provider, Turn};
use model_catalog::ProviderKind;
use registry::{AgentRegistry, PersonaRegistry, RegistryError};
use tracing::{debug, info, warn};

use crate::error::GatewayError;

/// Maximum characters of user message quoted in provider-failure logs.
const LOG_MESSAGE_CHARS: usize = 80;

/// A resolved dispatch target: the subset of an agent or persona the
/// gateway needs to build a provider request.
#[derive(Debug, Clone)]
pub struct DispatchTarget {
    /// Agent or persona id.
    pub id: String,
    /// System prompt sent with the request.
    pub system_prompt: String,
    /// Model identifier (catalog id or opaque pass-through).
    pub model: String,
    /// Provider serving this target.
    pub provider: ProviderKind,
    /// Whether prior turns are replayed.
    pub memory_enabled: bool,
}

/// The result of a dispatch: assistant text plus degradation marker.
#[derive(Debug, Clone, PartialEq)]
pub struct DispatchOutcome {
    /// Assistant reply, real or canned.
    pub text: String,
    /// True when the text came from the fallback table instead of the
    /// provider.
    pub degraded: bool,
    /// The model the request targeted.
    pub model: String,
}

/// Turns a resolved target, conversation context, and a new message into a
/// provider call - or a canned response when the provider is unreachable.
///
/// The gateway never fabricates a reply for an unknown target (that is a
/// hard `TargetNotFound`), and never surfaces a raw provider error (that is
/// the designed degradation path).
pub struct DispatchGateway {
    agents: Arc<AgentRegistry>,
    personas: Arc<PersonaRegistry>,
    providers: HashMap<ProviderKind, Arc<dyn Provider>>,
    fallback: FallbackTable,
}

impl DispatchGateway {
    /// Create a gateway over the given registries and provider clients.
    pub fn new(
        agents: Arc<AgentRegistry>,
        personas: Arc<PersonaRegistry>,
        providers: HashMap<ProviderKind, Arc<dyn Provider>>,
    ) -> Self {
        Self {
            agents,
            personas,
            providers,
            fallback: FallbackTable::new(),
        }
    }

    /// Register a provider client after construction.
    pub fn with_provider(mut self, kind: ProviderKind, provider: Arc<dyn Provider>) -> Self {
        self.providers.insert(kind, provider);
        self
    }

    /// Resolve a dispatch target by id: agents first, then personas.
    pub async fn resolve(&self, id: &str) -> Result<DispatchTarget, GatewayError> {
        if let Some(agent) = self.agents.get(id) {
            return Ok(DispatchTarget {
                id: agent.id.clone(),
                system_prompt: agent.system_prompt.clone(),
                model: agent.default_model.clone(),
                provider: agent.provider,
                memory_enabled: agent.memory_enabled,
            });
        }

        match self.personas.get(id).await {
            Ok(persona) => Ok(DispatchTarget {
                id: persona.id,
                system_prompt: persona.system_prompt,
                model: persona.model,
                provider: persona.provider,
                // Personas carry their history when used in a session.
                memory_enabled: true,
            }),
            Err(RegistryError::NotFound { .. }) => Err(GatewayError::TargetNotFound {
                id: id.to_string(),
            }),
            Err(other) => Err(GatewayError::Registry(other)),
        }
    }

    /// Dispatch a message for a target with conversation context.
    ///
    /// Prior turns are replayed only when the target has memory enabled;
    /// the new message always goes out as the final user turn.
    pub async fn dispatch(
        &self,
        target_id: &str,
        prior_turns: &[Turn],
        message: &str,
    ) -> Result<DispatchOutcome, GatewayError> {
        let target = self.resolve(target_id).await?;
        Ok(self.run(&target, prior_turns, message, None).await)
    }

    /// Dispatch a single-turn exchange with optional situational context.
    ///
    /// No history is replayed; `context` is appended to the system prompt.
    pub async fn dispatch_single(
        &self,
        target_id: &str,
        message: &str,
        context: Option<&str>,
    ) -> Result<DispatchOutcome, GatewayError> {
        let target = self.resolve(target_id).await?;
        Ok(self.run(&target, &[], message, context).await)
    }

    /// Execute a resolved dispatch: build the request, call the provider,
    /// degrade on failure.
    async fn run(
        &self,
        target: &DispatchTarget,
        prior_turns: &[Turn],
        message: &str,
        context: Option<&str>,
    ) -> DispatchOutcome {
        let mut turns = if target.memory_enabled {
            prior_turns.to_vec()
        } else {
            Vec::new()
        };
        turns.push(Turn::user(message));

        let system_prompt = match context {
            Some(context) if !context.trim().is_empty() => {
                format!("{}\n\nAdditional context:\n{}", target.system_prompt, context)
            }
            _ => target.system_prompt.clone(),
        };

        let request = CompletionRequest {
            system_prompt: Some(system_prompt),
            turns,
            model: target.model.clone(),
        };

        let Some(provider) = self.providers.get(&target.provider) else {
            warn!(
                "No {} client registered for target {}, using fallback",
                target.provider, target.id
            );
            return self.degrade(target, message);
        };

        debug!(
            "Dispatching to {} for target {} (model: {}, history: {} turns)",
            provider.name(),
            target.id,
            target.model,
            request.turns.len().saturating_sub(1)
        );

        match provider.complete(request).await {
            Ok(text) => {
                info!(
                    "Response for target {} via {} ({} chars)",
                    target.id,
                    provider.name(),
                    text.len()
                );
                DispatchOutcome {
                    text,
                    degraded: false,
                    model: target.model.clone(),
                }
            }
            Err(err) => {
                warn!(
                    "Provider {} failed for target {} (message: \"{}\"): {}",
                    provider.name(),
                    target.id,
                    truncate_for_log(message),
                    err
                );
                self.degrade(target, message)
            }
        }
    }

    /// Produce the canned fallback outcome for a message.
    fn degrade(&self, target: &DispatchTarget, message: &str) -> DispatchOutcome {
        DispatchOutcome {
            text: self.fallback.respond(message).to_string(),
            degraded: true,
            model: target.model.clone(),
        }
    }
}

/// Truncate a user message for log lines.
fn truncate_for_log(message: &str) -> String {
    if message.chars().count() <= LOG_MESSAGE_CHARS {
        message.to_string()
    } else {
        let truncated: String = message.chars().take(LOG_MESSAGE_CHARS).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mock_provider::{CannedProvider, FailingProvider, RecordingProvider};
    use registry::{InMemoryPersonaStore, NewPersona};

    fn registries() -> (Arc<AgentRegistry>, Arc<PersonaRegistry>) {
        let agents = Arc::new(AgentRegistry::new());
        let personas = Arc::new(PersonaRegistry::new(
            Arc::new(InMemoryPersonaStore::new()),
            "openai/gpt-4o-mini",
        ));
        (agents, personas)
    }

    fn gateway_with(kind: ProviderKind, provider: Arc<dyn Provider>) -> DispatchGateway {
        let (agents, personas) = registries();
        let mut providers: HashMap<ProviderKind, Arc<dyn Provider>> = HashMap::new();
        providers.insert(kind, provider);
        DispatchGateway::new(agents, personas, providers)
    }

    #[tokio::test]
    async fn test_dispatch_success() {
        let gateway = gateway_with(
            ProviderKind::OpenAi,
            Arc::new(CannedProvider::new("A real reply.")),
        );

        let outcome = gateway.dispatch("frankbot", &[], "hello").await.unwrap();
        assert_eq!(outcome.text, "A real reply.");
        assert!(!outcome.degraded);
        assert_eq!(outcome.model, "openai/gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_dispatch_unknown_target() {
        let gateway = gateway_with(
            ProviderKind::OpenAi,
            Arc::new(CannedProvider::new("unused")),
        );

        let result = gateway.dispatch("nobody", &[], "hello").await;
        assert!(matches!(
            result,
            Err(GatewayError::TargetNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_fallback_on_provider_failure() {
        let gateway = gateway_with(ProviderKind::OpenAi, Arc::new(FailingProvider::new()));

        let message = "What is a center of excellence?";
        let first = gateway.dispatch("frankbot", &[], message).await.unwrap();
        let second = gateway.dispatch("frankbot", &[], message).await.unwrap();

        assert!(first.degraded);
        assert!(first.text.contains("center of excellence"));
        // Deterministic: same message, same canned text.
        assert_eq!(first.text, second.text);
    }

    #[tokio::test]
    async fn test_fallback_when_provider_missing() {
        let (agents, personas) = registries();
        let gateway = DispatchGateway::new(agents, personas, HashMap::new());

        let outcome = gateway.dispatch("frankbot", &[], "hello").await.unwrap();
        assert!(outcome.degraded);
        assert!(!outcome.text.is_empty());
    }

    #[tokio::test]
    async fn test_memory_replays_history() {
        let recorder = Arc::new(RecordingProvider::new("ok"));
        let gateway = gateway_with(ProviderKind::OpenAi, recorder.clone());

        let history = vec![Turn::user("earlier"), Turn::assistant("noted")];
        // frankbot has memory enabled.
        gateway
            .dispatch("frankbot", &history, "and now?")
            .await
            .unwrap();

        let request = recorder.last_request().await.unwrap();
        assert_eq!(request.turns.len(), 3);
        assert_eq!(request.turns[0].content, "earlier");
        assert_eq!(request.last_user_text(), Some("and now?"));
    }

    #[tokio::test]
    async fn test_memoryless_agent_drops_history() {
        let recorder = Arc::new(RecordingProvider::new("ok"));
        let gateway = gateway_with(ProviderKind::Anthropic, recorder.clone());

        let history = vec![Turn::user("earlier"), Turn::assistant("noted")];
        // creative-coach has memory disabled.
        gateway
            .dispatch("creative-coach", &history, "fresh start")
            .await
            .unwrap();

        let request = recorder.last_request().await.unwrap();
        assert_eq!(request.turns.len(), 1);
        assert_eq!(request.last_user_text(), Some("fresh start"));
    }

    #[tokio::test]
    async fn test_dispatch_resolves_personas() {
        let recorder = Arc::new(RecordingProvider::new("ok"));
        let gateway = gateway_with(ProviderKind::OpenAi, recorder.clone());

        let outcome = gateway.dispatch("frank", &[], "advice?").await.unwrap();
        assert!(!outcome.degraded);

        let request = recorder.last_request().await.unwrap();
        assert!(request
            .system_prompt
            .as_deref()
            .unwrap()
            .contains("pragmatic AI strategist"));
    }

    #[tokio::test]
    async fn test_dispatch_resolves_custom_persona() {
        let agents = Arc::new(AgentRegistry::new());
        let personas = Arc::new(PersonaRegistry::new(
            Arc::new(InMemoryPersonaStore::new()),
            "openai/gpt-4o-mini",
        ));
        personas
            .create(NewPersona {
                name: "Test Bot".to_string(),
                system_prompt: "You are terse.".to_string(),
                provider: Some("openai".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut providers: HashMap<ProviderKind, Arc<dyn Provider>> = HashMap::new();
        providers.insert(
            ProviderKind::OpenAi,
            Arc::new(CannedProvider::new("short")) as Arc<dyn Provider>,
        );
        let gateway = DispatchGateway::new(agents, personas, providers);

        let outcome = gateway.dispatch("test-bot", &[], "hi").await.unwrap();
        assert_eq!(outcome.text, "short");
    }

    #[tokio::test]
    async fn test_single_turn_context_rides_system_prompt() {
        let recorder = Arc::new(RecordingProvider::new("ok"));
        let gateway = gateway_with(ProviderKind::OpenAi, recorder.clone());

        gateway
            .dispatch_single("frank", "what next?", Some("Visitor is on the pricing page"))
            .await
            .unwrap();

        let request = recorder.last_request().await.unwrap();
        let prompt = request.system_prompt.unwrap();
        assert!(prompt.contains("Additional context"));
        assert!(prompt.contains("pricing page"));
        assert_eq!(request.turns.len(), 1);
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short"), "short");

        let long = "x".repeat(200);
        let truncated = truncate_for_log(&long);
        assert_eq!(truncated.chars().count(), LOG_MESSAGE_CHARS + 3);
        assert!(truncated.ends_with("..."));
    }
}
