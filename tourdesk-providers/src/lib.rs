//! LLM provider integrations for tourdesk
//!
//! This crate provides the provider abstraction the conversational agent
//! talks through, and the Azure OpenAI chat-completions implementation.

pub mod azure;
pub mod base;

pub use azure::AzureChatClient;
pub use base::{
    LLMProvider, LLMResponse, Message, ProviderError, ProviderResult, ToolCallRequest,
};
