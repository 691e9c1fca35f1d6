//! Conversation history data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (user, assistant)
    pub role: String,
    /// Message content
    pub content: String,
    /// Message timestamp
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered conversation history owned by one agent
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<ChatMessage>,
}

impl ConversationHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Append a message
    pub fn push(&mut self, role: impl Into<String>, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(role, content));
    }

    /// Get the most recent messages for LLM context
    pub fn recent(&self, max_messages: usize) -> &[ChatMessage] {
        let start = self.messages.len().saturating_sub(max_messages);
        &self.messages[start..]
    }

    /// Number of messages recorded
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether no message has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
