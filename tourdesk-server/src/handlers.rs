//! Request handlers

use axum::{extract::State, Json};
use tracing::{error, info};

use crate::models::{ChatRequest, ChatResponse, ResponseCategory};
use crate::state::AppState;

const GENERIC_AGENT_ERROR: &str =
    "Sorry, I ran into a problem handling that. Could you try again in a moment?";

/// Handle a chat message using the session's agent instance
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = request.request_session.as_str();

    let content = match state.cache.get_or_create(session_id).await {
        Ok((agent, created)) => {
            let mut agent = agent.lock().await;
            if created {
                info!("New session detected: {}", session_id);
                if !request.request_content.trim().is_empty() {
                    // First contact always greets; the guest's opening
                    // message comes back around on the next turn.
                    info!(
                        "Session {} sent content with its first request; deferring it",
                        session_id
                    );
                }
                agent.initial_greeting().await
            } else {
                match agent.send(&request.request_content).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        error!("Agent failed for session {}: {}", session_id, e);
                        GENERIC_AGENT_ERROR.to_string()
                    }
                }
            }
        }
        Err(e) => {
            error!("Could not obtain agent for session {}: {}", session_id, e);
            GENERIC_AGENT_ERROR.to_string()
        }
    };

    Json(ChatResponse {
        response_type: request.request_type,
        response_category: ResponseCategory::Final,
        response_content: content,
    })
}
