//! Chat session HTTP handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{ChatEntry, ChatHistory, Speaker};
use uuid::Uuid;

use super::AppJson;
use crate::services::ChatService;
use crate::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PostMessageInput {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A chat entry as the chat panel renders it
#[derive(Debug, Serialize)]
pub struct ChatMessageView {
    pub speaker: Speaker,
    pub label: &'static str,
    pub message: String,
}

impl From<&ChatEntry> for ChatMessageView {
    fn from(entry: &ChatEntry) -> Self {
        Self {
            speaker: entry.speaker,
            label: entry.speaker.label(),
            message: entry.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub session_id: Uuid,
    pub messages: Vec<ChatMessageView>,
}

#[derive(Debug, Serialize)]
pub struct ChatTurnResponse {
    pub session_id: Uuid,
    pub reply: String,
    pub messages: Vec<ChatMessageView>,
}

fn message_views(history: &ChatHistory) -> Vec<ChatMessageView> {
    history.all().iter().map(ChatMessageView::from).collect()
}

// ============================================================================
// Handlers
// ============================================================================

/// Start a chat session with an empty history
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.sessions.create().await;

    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: session.id,
            created_at: session.created_at,
        }),
    )
}

/// List a session's messages in the order they were added
pub async fn list_messages(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    let service = ChatService::new(state.assistant.clone(), state.sessions.clone());

    match service.history(session_id).await {
        Ok(history) => (
            StatusCode::OK,
            Json(MessagesResponse {
                session_id,
                messages: message_views(&history),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// End a session and discard its history
pub async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    match state.sessions.remove(session_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Ask the AI a question within a session
pub async fn post_message(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    AppJson(input): AppJson<PostMessageInput>,
) -> impl IntoResponse {
    let service = ChatService::new(state.assistant.clone(), state.sessions.clone());

    match service.ask_in_session(session_id, &input.message).await {
        Ok(turn) => (
            StatusCode::OK,
            Json(ChatTurnResponse {
                session_id,
                reply: turn.reply,
                messages: message_views(&turn.history),
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
