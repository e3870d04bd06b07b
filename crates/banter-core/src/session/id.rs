//! Generation of fresh session identifiers.

use banter_types::session::SessionId;
use uuid::Uuid;

/// Source of new, unique session identifiers.
///
/// The store re-draws on collision with an existing id, but implementations
/// should still produce unique tokens with overwhelming probability.
pub trait SessionIdGenerator: Send + Sync {
    fn generate(&self) -> SessionId;
}

/// Mints UUID v7 strings (time-sortable, 74 random bits).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSessionIds;

impl SessionIdGenerator for UuidSessionIds {
    fn generate(&self) -> SessionId {
        SessionId::new(Uuid::now_v7().to_string())
    }
}
