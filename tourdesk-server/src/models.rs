//! Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

/// Content kind carried by a request or response
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    #[default]
    Text,
    Image,
    Audio,
}

/// Category of a chat response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseCategory {
    /// The agent's reply for this turn
    Final,
    /// Reserved for streamed tool progress
    Intermediate,
}

/// Body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Type of the request content
    #[serde(default)]
    pub request_type: ContentType,
    /// The message text
    pub request_content: String,
    /// Opaque client-generated session identifier
    pub request_session: String,
}

/// Response body of `POST /chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Mirrors the request's content type
    pub response_type: ContentType,
    /// Category of this response
    pub response_category: ResponseCategory,
    /// The agent's reply
    pub response_content: String,
}
