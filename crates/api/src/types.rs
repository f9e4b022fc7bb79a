//! Request and response DTOs.

use chrono::{DateTime, Utc};
use gateway::ClientProfile;
use serde::{Deserialize, Serialize};

/// Body for `POST /agents/conversation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationRequest {
    pub agent_id: String,
    pub user_id: String,
    #[serde(default)]
    pub initial_message: Option<String>,
}

/// Response for `POST /agents/conversation`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConversationResponse {
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_response: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degraded: Option<bool>,
    pub timestamp: DateTime<Utc>,
}

/// Body for `POST /agents/message`.
///
/// `agent_id` and `user_id` ride along for parity with the client contract;
/// the session id alone identifies the conversation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub session_id: String,
    pub message: String,
}

/// Response for `POST /agents/message`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    pub response: String,
    pub degraded: bool,
    pub timestamp: DateTime<Utc>,
}

/// Body for `POST /agents/clear-conversation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearConversationRequest {
    #[serde(default)]
    pub agent_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub session_id: String,
}

/// Body for `POST /ai/conversation`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConversationRequest {
    pub character_name: String,
    pub message: String,
    #[serde(default)]
    pub context: Option<String>,
}

/// Response for `POST /ai/conversation`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiConversationResponse {
    pub message: String,
    pub degraded: bool,
}

/// Query-string profile for the recommendation routes.
///
/// List fields arrive comma-separated: `?goals=content,automation`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileQuery {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub maturity: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
}

impl ProfileQuery {
    /// Convert the raw query into a ranking profile.
    pub fn into_profile(self) -> ClientProfile {
        ClientProfile {
            industry: self.industry,
            maturity: self.maturity,
            goals: split_list(self.goals),
            challenges: split_list(self.challenges),
        }
    }
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}
