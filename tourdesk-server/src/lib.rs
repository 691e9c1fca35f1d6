//! HTTP chat service for tourdesk
//!
//! Exposes the booking agent behind `POST /chat` and serves the static chat
//! UI. All per-session state lives in the injected [`state::AgentCache`].

pub mod handlers;
pub mod models;
pub mod server;
pub mod state;

pub use server::{build_router, run_server};
pub use state::{AgentCache, AppState};
