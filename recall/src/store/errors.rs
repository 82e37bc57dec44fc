use thiserror::Error;

use super::model::SessionId;

/// Errors emitted by session service operations.
#[derive(Debug, Error)]
pub(crate) enum SessionServiceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Session {id} does not exist.")]
    NotFound { id: SessionId },
}
