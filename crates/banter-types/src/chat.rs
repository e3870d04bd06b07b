//! Result types returned by the chat service to the boundary layer.

use serde::{Deserialize, Serialize};

use crate::message::History;
use crate::session::SessionId;

/// Outcome of one chat request: the session it landed in, the bot reply, and
/// the full history after both messages were appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatExchange {
    pub session_id: SessionId,
    pub reply: String,
    pub history: History,
}

/// Outcome of a session deletion. Deleting an unknown id is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOutcome {
    pub deleted: bool,
    pub session_id: SessionId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Message;

    #[test]
    fn test_chat_exchange_serialize() {
        let exchange = ChatExchange {
            session_id: SessionId::from("s1"),
            reply: "Hello!".to_string(),
            history: History::from(vec![Message::user("hi"), Message::bot("Hello!")]),
        };
        let json = serde_json::to_value(&exchange).unwrap();
        assert_eq!(json["session_id"], "s1");
        assert_eq!(json["reply"], "Hello!");
        assert_eq!(json["history"][1]["role"], "bot");
    }

    #[test]
    fn test_delete_outcome_serialize() {
        let outcome = DeleteOutcome {
            deleted: false,
            session_id: SessionId::from("gone"),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"deleted":false,"session_id":"gone"}"#);
    }
}
