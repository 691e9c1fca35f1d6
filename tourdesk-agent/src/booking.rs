//! The booking agent: greeting flow and the tool-calling turn loop

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error, info, warn};

use tourdesk_core::config::AgentConfig;
use tourdesk_core::session::ConversationHistory;
use tourdesk_core::{Error, Result};
use tourdesk_providers::LLMProvider;
use tourdesk_tools::ToolRegistry;

use crate::context::PromptBuilder;

const FALLBACK_GREETING: &str =
    "Hello! I'm your vacation assistant. I'd be happy to help you plan your trip.";

fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

/// A session-scoped conversational agent
///
/// Owns the conversation history for one session and advances the scripted
/// booking flow one turn at a time.
pub struct BookingAgent {
    provider: Arc<dyn LLMProvider>,
    tools: Arc<ToolRegistry>,
    prompt: PromptBuilder,
    history: ConversationHistory,
    settings: AgentConfig,
}

impl BookingAgent {
    /// Create a new agent over a provider and tool registry
    pub fn new(
        provider: Arc<dyn LLMProvider>,
        tools: Arc<ToolRegistry>,
        settings: AgentConfig,
    ) -> Self {
        Self {
            provider,
            tools,
            prompt: PromptBuilder::new(),
            history: ConversationHistory::new(),
            settings,
        }
    }

    /// The recorded conversation history
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// First-contact greeting naming the package destination.
    ///
    /// Built straight from the package tool without an LLM round-trip, so a
    /// fresh session always greets even when the model is unreachable.
    pub async fn initial_greeting(&mut self) -> String {
        let summary = self.tools.execute("get_package_summary", json!({})).await;

        let greeting = if summary.starts_with("Error") {
            warn!("Package summary unavailable for greeting: {}", summary);
            FALLBACK_GREETING.to_string()
        } else {
            match serde_json::from_str::<serde_json::Value>(&summary)
                .ok()
                .and_then(|v| {
                    v["destination"][0]["destination"]
                        .as_str()
                        .map(|s| s.to_string())
                }) {
                Some(destination) => {
                    info!("Greeting new session with destination {}", destination);
                    format!(
                        "Hello! I'm your vacation assistant. I'd be happy to help you plan \
                         your trip. Would you like to go ahead with {} or explore some \
                         alternative options?",
                        destination
                    )
                }
                None => {
                    warn!("Package summary has no destination, using fallback greeting");
                    FALLBACK_GREETING.to_string()
                }
            }
        };

        self.history.push("assistant", &greeting);
        greeting
    }

    /// Process one user turn and return the assistant's reply.
    ///
    /// Tool calls requested by the model are executed and fed back until the
    /// model produces plain content or the iteration cap is hit. History is
    /// recorded only when the turn completes; a provider error leaves the
    /// conversation as it was.
    pub async fn send(&mut self, user_text: &str) -> Result<String> {
        debug!("Processing user message: {}", preview(user_text, 80));

        let window = self.history.recent(self.settings.history_window);
        let mut messages = self.prompt.build_messages(window, user_text);
        let tool_defs = self.tools.definitions();

        let max_iterations = self.settings.max_tool_iterations;
        let mut final_content: Option<String> = None;

        for iteration in 1..=max_iterations {
            debug!("Agent iteration {}/{}", iteration, max_iterations);

            let response = self
                .provider
                .chat(
                    messages.clone(),
                    if tool_defs.is_empty() {
                        None
                    } else {
                        Some(tool_defs.clone())
                    },
                    self.settings.max_tokens,
                    self.settings.temperature,
                )
                .await
                .map_err(|e| {
                    error!("Provider call failed: {}", e);
                    Error::Provider(e.to_string())
                })?;

            if let Some(total) = response.usage.get("total_tokens") {
                debug!("Completion used {} token(s)", total);
            }

            if !response.has_tool_calls() {
                final_content = response.content;
                break;
            }

            info!("Model requested {} tool call(s)", response.tool_calls.len());
            self.prompt.add_assistant_message(
                &mut messages,
                response.content.clone(),
                Some(response.tool_calls.clone()),
            );

            for call in &response.tool_calls {
                let args_str = serde_json::to_string(&call.arguments).unwrap_or_default();
                info!("Tool call: {}({})", call.name, preview(&args_str, 200));

                let params = serde_json::to_value(&call.arguments)
                    .unwrap_or_else(|_| json!({}));
                let result = self.tools.execute(&call.name, params).await;
                debug!("Tool result: {}", preview(&result, 200));

                self.prompt
                    .add_tool_result(&mut messages, call.id.clone(), result);
            }
        }

        let final_content = final_content.unwrap_or_else(|| {
            warn!("Iteration cap reached without a final reply");
            "I wasn't able to finish that step. Could you rephrase or try again?".to_string()
        });

        info!("Assistant reply: {}", preview(&final_content, 120));
        self.history.push("user", user_text);
        self.history.push("assistant", &final_content);

        Ok(final_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Mutex;
    use tourdesk_data::{Availability, DataStore, Destination, Package};
    use tourdesk_providers::{
        LLMResponse, Message, ProviderError, ProviderResult, ToolCallRequest,
    };

    /// Provider that replays scripted responses and records every request
    struct ScriptedProvider {
        script: Mutex<VecDeque<LLMResponse>>,
        requests: Mutex<Vec<Vec<Message>>>,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<LLMResponse>) -> Self {
            Self {
                script: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<Vec<Message>> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LLMProvider for ScriptedProvider {
        async fn chat(
            &self,
            messages: Vec<Message>,
            _tools: Option<Vec<serde_json::Value>>,
            _max_tokens: u32,
            _temperature: f32,
        ) -> ProviderResult<LLMResponse> {
            self.requests.lock().unwrap().push(messages);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| ProviderError::ApiError("script exhausted".to_string()))
        }

        fn default_model(&self) -> String {
            "scripted".to_string()
        }
    }

    fn text_response(content: &str) -> LLMResponse {
        LLMResponse {
            content: Some(content.to_string()),
            tool_calls: vec![],
            finish_reason: "stop".to_string(),
            usage: HashMap::new(),
        }
    }

    fn tool_call_response(name: &str, arguments: serde_json::Value) -> LLMResponse {
        let arguments = match arguments {
            serde_json::Value::Object(map) => map.into_iter().collect(),
            _ => HashMap::new(),
        };
        LLMResponse {
            content: None,
            tool_calls: vec![ToolCallRequest {
                id: "call_1".to_string(),
                call_type: "function".to_string(),
                name: name.to_string(),
                arguments,
            }],
            finish_reason: "tool_calls".to_string(),
            usage: HashMap::new(),
        }
    }

    fn booking_store() -> Arc<DataStore> {
        Arc::new(DataStore::from_parts(
            Package {
                campaign_id: "CMP-88".to_string(),
                package_id: "PKG-2024-001".to_string(),
                package_expiration: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
                accommodation_type: "Resort".to_string(),
                package_name: "Sunshine Getaway".to_string(),
                destination: vec![Destination {
                    destination: "Orlando, FL".to_string(),
                    nq_zip_codes: vec!["32801".to_string()],
                }],
            },
            Availability {
                destination: "Orlando, FL".to_string(),
                campaign: "CMP-88".to_string(),
                available_dates: vec![],
            },
            vec![],
        ))
    }

    fn agent_with(provider: Arc<dyn LLMProvider>, tools: Arc<ToolRegistry>) -> BookingAgent {
        BookingAgent::new(provider, tools, AgentConfig::default())
    }

    #[tokio::test]
    async fn test_initial_greeting_names_destination() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let tools = Arc::new(tourdesk_tools::booking_registry(booking_store()));
        let mut agent = agent_with(provider, tools);

        let greeting = agent.initial_greeting().await;
        assert!(greeting.contains("Orlando, FL"));
        assert_eq!(agent.history().len(), 1);
    }

    #[tokio::test]
    async fn test_initial_greeting_falls_back_without_package_tool() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let tools = Arc::new(ToolRegistry::new());
        let mut agent = agent_with(provider, tools);

        let greeting = agent.initial_greeting().await;
        assert!(!greeting.is_empty());
        assert!(greeting.contains("vacation assistant"));
    }

    #[tokio::test]
    async fn test_send_runs_tool_round_trip() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            tool_call_response(
                "verify_zip_code",
                json!({"confirmed_destination": "Orlando, FL", "zip_code": "10001"}),
            ),
            text_response("Great, your zip code qualifies!"),
        ]));
        let tools = Arc::new(tourdesk_tools::booking_registry(booking_store()));
        let mut agent = agent_with(provider.clone(), tools);

        let reply = agent.send("My zip is 10001").await.unwrap();
        assert_eq!(reply, "Great, your zip code qualifies!");

        // The second request must carry the tool result back to the model.
        let requests = provider.requests();
        assert_eq!(requests.len(), 2);
        let tool_msg = requests[1]
            .iter()
            .find(|m| m.role == "tool")
            .expect("tool result message");
        assert!(tool_msg.content.contains("is valid"));
        assert_eq!(tool_msg.tool_call_id.as_deref(), Some("call_1"));

        assert_eq!(agent.history().len(), 2);
    }

    #[tokio::test]
    async fn test_sequential_turns_accumulate_context() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            text_response("Nice to meet you, Ana!"),
            text_response("Orlando it is."),
        ]));
        let tools = Arc::new(ToolRegistry::new());
        let mut agent = agent_with(provider.clone(), tools);

        agent.send("Hi, I'm Ana").await.unwrap();
        agent.send("Let's book Orlando").await.unwrap();

        // The second request must replay the first exchange.
        let requests = provider.requests();
        let second = &requests[1];
        assert!(second.iter().any(|m| m.content == "Hi, I'm Ana"));
        assert!(second.iter().any(|m| m.content == "Nice to meet you, Ana!"));
        assert_eq!(agent.history().len(), 4);
    }

    #[tokio::test]
    async fn test_provider_error_leaves_history_untouched() {
        let provider = Arc::new(ScriptedProvider::new(vec![]));
        let tools = Arc::new(ToolRegistry::new());
        let mut agent = agent_with(provider, tools);

        let err = agent.send("hello?").await.unwrap_err();
        assert!(matches!(err, Error::Provider(_)));
        assert!(agent.history().is_empty());
    }

    #[tokio::test]
    async fn test_iteration_cap_yields_fallback_reply() {
        // The model asks for the same tool forever; the cap must cut it off.
        let mut settings = AgentConfig::default();
        settings.max_tool_iterations = 2;

        let provider = Arc::new(ScriptedProvider::new(vec![
            tool_call_response("get_package_summary", json!({})),
            tool_call_response("get_package_summary", json!({})),
        ]));
        let tools = Arc::new(tourdesk_tools::booking_registry(booking_store()));
        let mut agent = BookingAgent::new(provider, tools, settings);

        let reply = agent.send("loop forever").await.unwrap();
        assert!(reply.contains("wasn't able to finish"));
        assert_eq!(agent.history().len(), 2);
    }
}
