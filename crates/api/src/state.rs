//! Application state and environment wiring.

use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use agent_core::Provider;
use gateway::{ConversationService, DispatchGateway, RecommendationEngine};
use model_catalog::{ModelCatalog, ProviderKind};
use openai_provider::{OpenAiProvider, OpenAiProviderConfig};
use registry::{AgentRegistry, InMemoryPersonaStore, PersonaRegistry, PersonaStore};
use session::{InMemorySessionStore, SessionManager, SessionStore};
use storage::{Database, SqlitePersonaStore, SqliteSessionStore, StorageError};
use tracing::{info, warn};

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub models: Arc<ModelCatalog>,
    pub agents: Arc<AgentRegistry>,
    pub personas: Arc<PersonaRegistry>,
    pub conversations: Arc<ConversationService>,
    pub recommendations: Arc<RecommendationEngine>,
}

impl AppState {
    /// Build the full application state from environment variables.
    ///
    /// Stores: in-memory by default (non-durable, lost on restart); set
    /// `FRANKX_DB_URL` to a SQLite URL for durable storage. Provider
    /// clients are created for every upstream with an `{PREFIX}_API_KEY`
    /// present; targets whose provider has no client degrade to the
    /// canned fallback.
    pub async fn from_env() -> Result<Self, StorageError> {
        let (persona_store, session_store) = stores_from_env().await?;

        let models = Arc::new(ModelCatalog::new());
        let agents = Arc::new(AgentRegistry::new());
        let personas = Arc::new(PersonaRegistry::new(
            persona_store,
            models.default_model().id.clone(),
        ));

        let dispatch = Arc::new(DispatchGateway::new(
            agents.clone(),
            personas.clone(),
            providers_from_env(),
        ));
        let sessions = Arc::new(SessionManager::new(session_store));
        let conversations = Arc::new(ConversationService::new(dispatch, sessions));
        let recommendations = Arc::new(RecommendationEngine::new(agents.clone()));

        Ok(Self {
            models,
            agents,
            personas,
            conversations,
            recommendations,
        })
    }
}

/// Select persona/session stores based on `FRANKX_DB_URL`.
async fn stores_from_env(
) -> Result<(Arc<dyn PersonaStore>, Arc<dyn SessionStore>), StorageError> {
    match env::var("FRANKX_DB_URL") {
        Ok(url) if !url.trim().is_empty() => {
            let db = Database::connect(&url).await?;
            db.migrate().await?;
            info!("Using SQLite stores ({})", url);
            Ok((
                Arc::new(SqlitePersonaStore::new(db.pool().clone())),
                Arc::new(SqliteSessionStore::new(db.pool().clone())),
            ))
        }
        _ => {
            warn!("FRANKX_DB_URL not set, using in-memory stores (lost on restart)");
            Ok((
                Arc::new(InMemoryPersonaStore::new()),
                Arc::new(InMemorySessionStore::new()),
            ))
        }
    }
}

/// Build a provider client for every configured upstream.
fn providers_from_env() -> HashMap<ProviderKind, Arc<dyn Provider>> {
    let upstreams = [
        (ProviderKind::OpenAi, "OPENAI", "https://api.openai.com"),
        (
            ProviderKind::OpenRouter,
            "OPENROUTER",
            "https://openrouter.ai/api",
        ),
        (
            ProviderKind::Anthropic,
            "ANTHROPIC",
            "https://api.anthropic.com",
        ),
    ];

    let mut providers: HashMap<ProviderKind, Arc<dyn Provider>> = HashMap::new();
    for (kind, prefix, default_url) in upstreams {
        match OpenAiProviderConfig::from_env_prefixed(prefix, default_url) {
            Ok(config) => match OpenAiProvider::new(kind.as_str(), config) {
                Ok(provider) => {
                    info!("Configured {} provider", kind);
                    providers.insert(kind, Arc::new(provider));
                }
                Err(err) => warn!("Skipping {} provider: {}", kind, err),
            },
            Err(_) => {
                warn!(
                    "{}_API_KEY not set, {} targets will use the fallback path",
                    prefix, kind
                );
            }
        }
    }
    providers
}
