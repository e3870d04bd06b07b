use thiserror::Error;

use crate::session::SessionId;

/// Errors related to session operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session '{0}' not found")]
    NotFound(SessionId),
}
