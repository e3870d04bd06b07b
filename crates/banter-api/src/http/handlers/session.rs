//! Session HTTP handlers.
//!
//! Endpoints:
//! - GET    /sessions/{id} - Message history of a session
//! - DELETE /sessions/{id} - Delete a session

use axum::extract::{Path, State};
use axum::Json;

use banter_types::chat::DeleteOutcome;
use banter_types::message::History;
use banter_types::session::SessionId;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /sessions/{id} - Ordered `{role, content}` list, 404 when unknown.
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<History>, AppError> {
    let history = state
        .chat_service
        .get_session(&SessionId::from(session_id))?;
    Ok(Json(history))
}

/// DELETE /sessions/{id} - Always succeeds; `deleted` says whether it existed.
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Json<DeleteOutcome> {
    Json(state.chat_service.delete_session(SessionId::from(session_id)))
}
