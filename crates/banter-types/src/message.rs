//! Message and history types for Banter conversations.
//!
//! A [`Message`] is a single utterance by either the user or the bot. A
//! [`History`] is the chronological, append-only list of messages belonging
//! to one session.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Bot,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::User => write!(f, "user"),
            MessageRole::Bot => write!(f, "bot"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(MessageRole::User),
            "bot" => Ok(MessageRole::Bot),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message within a conversation.
///
/// Fields are private: a message cannot be changed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: MessageRole,
    content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// A message authored by the user.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// A message authored by the bot.
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Bot, content)
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_user(&self) -> bool {
        self.role == MessageRole::User
    }

    pub fn is_bot(&self) -> bool {
        self.role == MessageRole::Bot
    }
}

/// Ordered message history of one session.
///
/// Serializes as a plain JSON array of `{role, content}` objects. The only
/// mutations are appending at the end and dropping whole exchanges from the
/// front (see [`History::truncate_front`]); existing entries are never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Message>);

impl History {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a message at the end of the history.
    pub fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.0.iter()
    }

    /// The most recent message authored by the bot, scanning backward.
    pub fn last_bot_message(&self) -> Option<&Message> {
        self.0.iter().rev().find(|m| m.is_bot())
    }

    /// User messages that already received a bot reply.
    ///
    /// Messages are paired from the front; a trailing unanswered user
    /// message (the turn currently being answered) is not included.
    pub fn answered_user_messages(&self) -> impl Iterator<Item = &Message> {
        self.0
            .chunks_exact(2)
            .filter_map(|pair| pair[0].is_user().then_some(&pair[0]))
    }

    /// Drop the oldest messages so that at most `max` remain.
    ///
    /// Returns the number of messages removed.
    pub fn truncate_front(&mut self, max: usize) -> usize {
        let excess = self.0.len().saturating_sub(max);
        if excess > 0 {
            self.0.drain(..excess);
        }
        excess
    }

    pub fn into_vec(self) -> Vec<Message> {
        self.0
    }
}

impl From<Vec<Message>> for History {
    fn from(messages: Vec<Message>) -> Self {
        Self(messages)
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::User, MessageRole::Bot] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
        assert!("assistant".parse::<MessageRole>().is_err());
    }

    #[test]
    fn test_message_serialize_shape() {
        let json = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn test_history_serializes_as_array() {
        let history = History::from(vec![Message::user("hi"), Message::bot("Hello!")]);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(
            json,
            r#"[{"role":"user","content":"hi"},{"role":"bot","content":"Hello!"}]"#
        );
    }

    #[test]
    fn test_last_bot_message_scans_backward() {
        let mut history = History::new();
        assert!(history.last_bot_message().is_none());

        history.push(Message::user("a"));
        history.push(Message::bot("first"));
        history.push(Message::user("b"));
        history.push(Message::bot("second"));
        history.push(Message::user("c"));

        assert_eq!(history.last_bot_message().unwrap().content(), "second");
    }

    #[test]
    fn test_answered_user_messages_skip_pending_turn() {
        let history = History::from(vec![
            Message::user("one"),
            Message::bot("r1"),
            Message::user("two"),
            Message::bot("r2"),
            Message::user("three"),
        ]);
        let answered: Vec<&str> = history.answered_user_messages().map(|m| m.content()).collect();
        assert_eq!(answered, vec!["one", "two"]);
    }

    #[test]
    fn test_truncate_front() {
        let mut history = History::from(vec![
            Message::user("1"),
            Message::bot("2"),
            Message::user("3"),
            Message::bot("4"),
        ]);
        assert_eq!(history.truncate_front(10), 0);
        assert_eq!(history.truncate_front(2), 2);
        assert_eq!(history.messages()[0].content(), "3");
        assert_eq!(history.len(), 2);
    }
}
