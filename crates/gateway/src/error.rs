//! Error types for gateway operations.

use registry::RegistryError;
use session::SessionError;
use thiserror::Error;

/// Errors that can occur during dispatch and conversation handling.
///
/// Provider failures are deliberately absent: they are absorbed by the
/// fallback path and never propagate past the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No agent or persona exists under the requested id.
    #[error("no agent or persona found: {id}")]
    TargetNotFound { id: String },

    /// Registry failure other than a missing target.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Session failure (unknown session, store backend).
    #[error(transparent)]
    Session(#[from] SessionError),
}
