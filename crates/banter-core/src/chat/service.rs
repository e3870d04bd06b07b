//! Chat service orchestrating session resolution, reply selection, and history
//! updates.
//!
//! ChatService owns the [`SessionStore`] and runs each chat request as a single
//! store commit: the user message is appended, the reply policy sees the
//! updated history, and the bot reply is appended before the session is
//! released to the next request.

use banter_types::chat::{ChatExchange, DeleteOutcome};
use banter_types::error::SessionError;
use banter_types::message::{History, Message};
use banter_types::session::SessionId;
use tracing::info;

use crate::reply::decide;
use crate::session::store::SessionStore;

/// Entry point for the boundary layer.
pub struct ChatService {
    store: SessionStore,
}

impl ChatService {
    /// Create a chat service over the given store.
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Access the underlying session store.
    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Handle one chat message.
    ///
    /// Resolves (or creates) the session, records the user message, picks a
    /// reply, and records it. Always succeeds; the returned history has an even
    /// number of entries ending with the reply.
    #[tracing::instrument(skip(self, message))]
    pub fn chat(&self, message: &str, session_id: Option<SessionId>) -> ChatExchange {
        let checkout = self.store.commit(session_id, |history| {
            history.push(Message::user(message));
            let reply = decide(message, history);
            history.push(Message::bot(reply.clone()));
            reply
        });

        info!(
            session_id = %checkout.session_id,
            messages = checkout.history.len(),
            "chat exchange recorded"
        );

        ChatExchange {
            session_id: checkout.session_id,
            reply: checkout.value,
            history: checkout.history,
        }
    }

    /// Full history of a session.
    pub fn get_session(&self, session_id: &SessionId) -> Result<History, SessionError> {
        self.store.fetch(session_id)
    }

    /// Delete a session. Unknown ids report `deleted: false`.
    pub fn delete_session(&self, session_id: SessionId) -> DeleteOutcome {
        let deleted = self.store.delete(&session_id);
        DeleteOutcome {
            deleted,
            session_id,
        }
    }
}

impl Default for ChatService {
    fn default() -> Self {
        Self::new(SessionStore::new())
    }
}
