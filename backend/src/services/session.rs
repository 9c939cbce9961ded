//! In-memory chat session store
//!
//! Each session owns one `ChatHistory`. Sessions are never written to disk.
//! A session that sits idle longer than the configured timeout is dropped,
//! and the store holds at most `max_sessions` at once; when full, creating a
//! session evicts the least recently active one.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::ChatHistory;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::{AppError, AppResult};

/// One user's chat session
#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_active: DateTime<Utc>,
    pub history: ChatHistory,
}

impl ChatSession {
    fn is_idle(&self, now: DateTime<Utc>, idle_timeout: Duration) -> bool {
        now.signed_duration_since(self.last_active)
            .to_std()
            .map(|idle| idle > idle_timeout)
            .unwrap_or(false)
    }
}

/// Session-scoped chat state, shared by the request handlers
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
    idle_timeout: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl SessionStore {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout: config.idle_timeout(),
            max_sessions: config.max_sessions.max(1),
        }
    }

    /// Start a session with an empty history
    pub async fn create(&self) -> ChatSession {
        let now = Utc::now();
        let session = ChatSession {
            id: Uuid::new_v4(),
            created_at: now,
            last_active: now,
            history: ChatHistory::new(),
        };

        let mut sessions = self.sessions.write().await;
        self.evict(&mut sessions, now);
        sessions.insert(session.id, session.clone());

        tracing::info!(session_id = %session.id, active = sessions.len(), "Chat session created");
        session
    }

    pub async fn exists(&self, session_id: Uuid) -> bool {
        self.sessions
            .read()
            .await
            .get(&session_id)
            .map(|s| !s.is_idle(Utc::now(), self.idle_timeout))
            .unwrap_or(false)
    }

    /// Snapshot of a session's history
    pub async fn history(&self, session_id: Uuid) -> AppResult<ChatHistory> {
        let mut sessions = self.sessions.write().await;
        let session = self.touch(&mut sessions, session_id)?;
        Ok(session.history.clone())
    }

    /// Append a question and its answer, returning the updated history
    pub async fn record_exchange(
        &self,
        session_id: Uuid,
        question: &str,
        answer: &str,
    ) -> AppResult<ChatHistory> {
        let mut sessions = self.sessions.write().await;
        let session = self.touch(&mut sessions, session_id)?;

        session.history.record_exchange(question, answer);
        Ok(session.history.clone())
    }

    /// End a session and discard its history
    pub async fn remove(&self, session_id: Uuid) -> AppResult<()> {
        match self.sessions.write().await.remove(&session_id) {
            Some(_) => {
                tracing::info!(session_id = %session_id, "Chat session closed");
                Ok(())
            }
            None => Err(not_found(session_id)),
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Look up a live session and mark it active
    fn touch<'a>(
        &self,
        sessions: &'a mut HashMap<Uuid, ChatSession>,
        session_id: Uuid,
    ) -> AppResult<&'a mut ChatSession> {
        let now = Utc::now();

        let idle = sessions
            .get(&session_id)
            .map(|s| s.is_idle(now, self.idle_timeout))
            .ok_or_else(|| not_found(session_id))?;
        if idle {
            sessions.remove(&session_id);
            tracing::info!(session_id = %session_id, "Chat session expired");
            return Err(not_found(session_id));
        }

        let session = sessions
            .get_mut(&session_id)
            .ok_or_else(|| not_found(session_id))?;
        session.last_active = now;
        Ok(session)
    }

    /// Drop idle sessions, then make room for one more
    fn evict(&self, sessions: &mut HashMap<Uuid, ChatSession>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_idle(now, self.idle_timeout));

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .values()
                .min_by_key(|s| s.last_active)
                .map(|s| s.id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, "Evicted chat sessions");
        }
    }
}

fn not_found(session_id: Uuid) -> AppError {
    AppError::NotFound(format!("Chat session {}", session_id))
}
