//! Follow-up questions asked from the chat panel

use serde::Serialize;
use shared::{validate_question, ChatHistory};
use uuid::Uuid;

use super::{AssistantService, SessionStore};
use crate::error::{AppError, AppResult};

/// Chat service for one request against the shared session store
#[derive(Clone)]
pub struct ChatService {
    assistant: AssistantService,
    sessions: SessionStore,
}

/// Outcome of one chat turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub reply: String,
    pub history: ChatHistory,
}

impl ChatService {
    /// Create a new ChatService instance
    pub fn new(assistant: AssistantService, sessions: SessionStore) -> Self {
        Self {
            assistant,
            sessions,
        }
    }

    /// Ask a question within a session
    ///
    /// The question goes to the AI service first. The question and reply are
    /// appended only after the reply arrives, so a failed call leaves the
    /// history untouched. The store lock is not held while waiting.
    pub async fn ask_in_session(&self, session_id: Uuid, question: &str) -> AppResult<ChatTurn> {
        validate_question(question).map_err(|msg| AppError::Validation {
            field: "message".to_string(),
            message: msg.to_string(),
        })?;

        if !self.sessions.exists(session_id).await {
            return Err(AppError::NotFound(format!("Chat session {}", session_id)));
        }

        tracing::debug!(session_id = %session_id, "Forwarding chat question");
        let reply = self.assistant.ask(question).await?;

        let history = self
            .sessions
            .record_exchange(session_id, question, &reply)
            .await?;

        Ok(ChatTurn { reply, history })
    }

    pub async fn history(&self, session_id: Uuid) -> AppResult<ChatHistory> {
        self.sessions.history(session_id).await
    }
}
