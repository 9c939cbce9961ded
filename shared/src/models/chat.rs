//! Chat session models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    /// Label shown next to the message in the chat panel
    pub fn label(&self) -> &'static str {
        match self {
            Speaker::User => "You",
            Speaker::Assistant => "AI",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One message in a chat session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub message: String,
}

/// Append-only, ordered log of the messages exchanged in one session
///
/// Starts empty. There is no way to remove or reorder entries, and the log
/// is never written to durable storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatHistory {
    entries: Vec<ChatEntry>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one entry to the end of the log
    pub fn append(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(ChatEntry {
            speaker,
            message: message.into(),
        });
    }

    /// Record a completed question/answer pair, question first
    pub fn record_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.append(Speaker::User, question);
        self.append(Speaker::Assistant, answer);
    }

    /// All entries in insertion order
    pub fn all(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
