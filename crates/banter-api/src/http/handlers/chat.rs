//! Chat endpoint.
//!
//! POST /chat - Send a message, get the bot reply and the session history.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use banter_types::chat::ChatExchange;
use banter_types::session::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Existing (or client-chosen) session. Omitted or blank starts a new one.
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatRequest {
    fn session_id(&self) -> Option<SessionId> {
        self.session_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(SessionId::from)
    }
}

/// POST /chat - Run one chat exchange.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatExchange>, AppError> {
    let Json(request) = payload?;
    let exchange = state
        .chat_service
        .chat(&request.message, request.session_id());
    Ok(Json(exchange))
}
