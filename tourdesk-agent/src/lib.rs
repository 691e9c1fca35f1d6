//! Conversational booking agent for tourdesk
//!
//! One [`BookingAgent`] instance per session: it owns the conversation
//! history, assembles prompts, and drives the provider's tool-calling loop.

pub mod booking;
pub mod context;

pub use booking::BookingAgent;
pub use context::PromptBuilder;
