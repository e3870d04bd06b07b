//! Application state shared by all HTTP handlers.

use std::sync::Arc;

use banter_core::chat::ChatService;
use banter_core::session::SessionStore;
use banter_types::config::BanterConfig;

/// Shared application state holding the chat service.
///
/// Cloning is cheap; every clone points at the same session store.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Wire a fresh, empty session store according to `config`.
    pub fn new(config: &BanterConfig) -> Self {
        let store = SessionStore::new().with_history_limit(config.sessions.max_messages);
        if let Some(limit) = store.history_limit() {
            tracing::info!(limit, "per-session history cap enabled");
        }

        Self {
            chat_service: Arc::new(ChatService::new(store)),
        }
    }
}
