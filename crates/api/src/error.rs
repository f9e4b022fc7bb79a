//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gateway::GatewayError;
use registry::RegistryError;
use session::SessionError;
use tracing::{error, warn};

/// Error wrapper for HTTP handlers.
///
/// Provider failures never appear here: the gateway absorbs them into the
/// degraded fallback and the request still succeeds.
#[derive(Debug)]
pub enum ApiError {
    Registry(RegistryError),
    Gateway(GatewayError),
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        ApiError::Registry(err)
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Gateway(err)
    }
}

impl ApiError {
    /// Status code and wire `type` tag for this error.
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Registry(err) => classify_registry(err),
            ApiError::Gateway(err) => match err {
                GatewayError::TargetNotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
                GatewayError::Registry(inner) => classify_registry(inner),
                GatewayError::Session(SessionError::NotFound { .. }) => {
                    (StatusCode::NOT_FOUND, "not_found")
                }
                GatewayError::Session(SessionError::Store(_)) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "store_error")
                }
            },
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Registry(err) => err.to_string(),
            ApiError::Gateway(err) => err.to_string(),
        }
    }
}

/// Built-in mutation and id collisions map to 400 (not 403/409): the
/// public contract treats them as bad requests against fixed catalog ids.
fn classify_registry(err: &RegistryError) -> (StatusCode, &'static str) {
    match err {
        RegistryError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
        RegistryError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
        RegistryError::Forbidden { .. } => (StatusCode::BAD_REQUEST, "forbidden"),
        RegistryError::Conflict { .. } => (StatusCode::BAD_REQUEST, "conflict_error"),
        RegistryError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_error"),
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.classify();
        let message = self.message();

        if status.is_server_error() {
            error!("Request failed: {}", message);
        } else {
            warn!("Request rejected ({}): {}", error_type, message);
        }

        let body = serde_json::json!({
            "error": {
                "message": message,
                "type": error_type,
            }
        });
        (status, Json(body)).into_response()
    }
}
