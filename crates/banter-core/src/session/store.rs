//! In-memory session store.
//!
//! `SessionStore` maps session ids to their message history using a `DashMap`.
//! Each read or write locks only the shard holding the session, so requests for
//! different sessions rarely contend, while two requests for the same session
//! are serialized for the whole of their read-modify-append sequence.
//!
//! Reads hand out cloned snapshots; no caller ever holds a reference into the
//! map after a method returns.

use std::sync::Arc;

use banter_types::error::SessionError;
use banter_types::message::{History, Message};
use banter_types::session::SessionId;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;

use crate::session::id::{SessionIdGenerator, UuidSessionIds};

/// Result of [`SessionStore::commit`]: the resolved session, its history after
/// the commit, and whatever the closure returned.
#[derive(Debug, Clone)]
pub struct SessionCheckout<R> {
    pub session_id: SessionId,
    pub history: History,
    pub value: R,
}

/// Concurrent mapping from session id to history.
pub struct SessionStore {
    sessions: DashMap<SessionId, History>,
    ids: Arc<dyn SessionIdGenerator>,
    history_limit: Option<usize>,
}

impl SessionStore {
    /// Create an empty store minting UUID v7 session ids, with unbounded history.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidSessionIds))
    }

    /// Create an empty store using a custom id generator.
    pub fn with_id_generator(ids: Arc<dyn SessionIdGenerator>) -> Self {
        Self {
            sessions: DashMap::new(),
            ids,
            history_limit: None,
        }
    }

    /// Cap the number of messages kept per session.
    ///
    /// The cap is rounded down to whole user/bot exchanges (minimum one
    /// exchange). `None` keeps the full history.
    pub fn with_history_limit(mut self, max_messages: Option<usize>) -> Self {
        self.history_limit = max_messages.map(|max| (max - max % 2).max(2));
        self
    }

    /// The effective per-session message cap, if any.
    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Resolve a session and return a snapshot of its history.
    ///
    /// - `Some(id)` of a known session: its current history.
    /// - `Some(id)` of an unknown session: a new, empty session under that id.
    /// - `None`: a new, empty session under a freshly generated id.
    pub fn get_or_create(&self, requested: Option<SessionId>) -> (SessionId, History) {
        let entry = self.checkout(requested);
        (entry.key().clone(), entry.value().clone())
    }

    /// Append one message to an existing session.
    pub fn append(&self, session_id: &SessionId, message: Message) -> Result<(), SessionError> {
        let mut history = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))?;
        history.push(message);
        Ok(())
    }

    /// Read-only snapshot of a session's history.
    pub fn fetch(&self, session_id: &SessionId) -> Result<History, SessionError> {
        self.sessions
            .get(session_id)
            .map(|history| history.value().clone())
            .ok_or_else(|| SessionError::NotFound(session_id.clone()))
    }

    /// Remove a session. Returns whether it existed.
    pub fn delete(&self, session_id: &SessionId) -> bool {
        let existed = self.sessions.remove(session_id).is_some();
        if existed {
            tracing::debug!(session_id = %session_id, "session deleted");
        }
        existed
    }

    /// Run `f` against a session's history inside one critical section.
    ///
    /// The session is resolved exactly as in [`get_or_create`](Self::get_or_create)
    /// and stays locked until `f` returns and the history cap (if any) has been
    /// applied. `f` must not call back into the store.
    pub fn commit<R>(
        &self,
        requested: Option<SessionId>,
        f: impl FnOnce(&mut History) -> R,
    ) -> SessionCheckout<R> {
        let mut entry = self.checkout(requested);
        let value = f(entry.value_mut());

        if let Some(limit) = self.history_limit {
            let dropped = entry.value_mut().truncate_front(limit);
            if dropped > 0 {
                tracing::debug!(session_id = %entry.key(), dropped, "history capped");
            }
        }

        SessionCheckout {
            session_id: entry.key().clone(),
            history: entry.value().clone(),
            value,
        }
    }

    /// Whether a session with this id exists.
    pub fn contains(&self, session_id: &SessionId) -> bool {
        self.sessions.contains_key(session_id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Lock the entry for `requested`, creating it if needed.
    fn checkout(&self, requested: Option<SessionId>) -> RefMut<'_, SessionId, History> {
        match requested {
            Some(id) => match self.sessions.entry(id) {
                Entry::Occupied(occupied) => occupied.into_ref(),
                Entry::Vacant(vacant) => {
                    tracing::debug!(session_id = %vacant.key(), "session created for supplied id");
                    vacant.insert(History::new())
                }
            },
            None => loop {
                let id = self.ids.generate();
                match self.sessions.entry(id) {
                    Entry::Vacant(vacant) => {
                        tracing::debug!(session_id = %vacant.key(), "session created");
                        break vacant.insert(History::new());
                    }
                    Entry::Occupied(occupied) => {
                        tracing::warn!(session_id = %occupied.key(), "generated session id collided, retrying");
                    }
                }
            },
        }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
