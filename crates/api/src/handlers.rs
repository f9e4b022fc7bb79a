//! HTTP route handlers.

use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use gateway::Resource;
use model_catalog::ModelDescriptor;
use registry::{AgentConfig, NewPersona, Persona, PersonaUpdate};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    AiConversationRequest, AiConversationResponse, ClearConversationRequest,
    CreateConversationRequest, CreateConversationResponse, ProfileQuery, SendMessageRequest,
    SendMessageResponse,
};

#[derive(Debug, Serialize)]
pub struct Health {
    status: String,
}

pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}

pub async fn list_models(State(state): State<AppState>) -> Json<Vec<ModelDescriptor>> {
    Json(state.models.list().to_vec())
}

pub async fn list_personas(
    State(state): State<AppState>,
) -> Result<Json<Vec<Persona>>, ApiError> {
    let personas = state.personas.list().await?;
    Ok(Json(personas))
}

pub async fn create_persona(
    State(state): State<AppState>,
    Json(payload): Json<NewPersona>,
) -> Result<(StatusCode, Json<Persona>), ApiError> {
    let persona = state.personas.create(payload).await?;
    Ok((StatusCode::CREATED, Json(persona)))
}

pub async fn update_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<PersonaUpdate>,
) -> Result<Json<Persona>, ApiError> {
    let persona = state.personas.update(&id, payload).await?;
    Ok(Json(persona))
}

pub async fn delete_persona(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.personas.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_agents(State(state): State<AppState>) -> Json<Vec<AgentConfig>> {
    Json(state.agents.list())
}

pub async fn create_conversation(
    State(state): State<AppState>,
    Json(payload): Json<CreateConversationRequest>,
) -> Result<Json<CreateConversationResponse>, ApiError> {
    let opened = state
        .conversations
        .create_conversation(
            &payload.agent_id,
            &payload.user_id,
            payload.initial_message.as_deref(),
        )
        .await?;

    let (initial_response, degraded) = match opened.initial_response {
        Some(outcome) => (Some(outcome.text), Some(outcome.degraded)),
        None => (None, None),
    };

    Ok(Json(CreateConversationResponse {
        session_id: opened.session_id,
        initial_response,
        degraded,
        timestamp: opened.timestamp,
    }))
}

pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, ApiError> {
    let sent = state
        .conversations
        .send_message(&payload.session_id, &payload.message)
        .await?;

    Ok(Json(SendMessageResponse {
        response: sent.outcome.text,
        degraded: sent.outcome.degraded,
        timestamp: sent.timestamp,
    }))
}

pub async fn clear_conversation(
    State(state): State<AppState>,
    Json(payload): Json<ClearConversationRequest>,
) -> Result<StatusCode, ApiError> {
    state
        .conversations
        .clear_conversation(&payload.session_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn recommend_agents(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Json<Vec<AgentConfig>> {
    let profile = query.into_profile();
    Json(state.recommendations.recommend_agents(&profile))
}

pub async fn recommend_resources(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> Json<Vec<Resource>> {
    let profile = query.into_profile();
    Json(state.recommendations.recommend_resources(&profile))
}

pub async fn ai_conversation(
    State(state): State<AppState>,
    Json(payload): Json<AiConversationRequest>,
) -> Result<Json<AiConversationResponse>, ApiError> {
    let outcome = state
        .conversations
        .single_turn(
            &payload.character_name,
            &payload.message,
            payload.context.as_deref(),
        )
        .await?;

    Ok(Json(AiConversationResponse {
        message: outcome.text,
        degraded: outcome.degraded,
    }))
}
