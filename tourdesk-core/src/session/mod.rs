//! Session state: per-conversation history and the agent cache
//!
//! A session is one user's ongoing conversation, keyed by an opaque
//! client-generated string. History lives in process memory only.

pub mod cache;
pub mod history;

pub use cache::{run_sweeper, SessionCache};
pub use history::{ChatMessage, ConversationHistory};
