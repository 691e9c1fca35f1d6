//! Azure OpenAI chat-completions client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use tourdesk_core::config::AzureConfig;

use crate::base::{
    normalize_arguments, LLMProvider, LLMResponse, Message, ProviderError, ProviderResult,
    ToolCallRequest,
};

/// Azure chat-completions request format
#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<String>,
    max_tokens: u32,
    temperature: f32,
}

/// Azure chat-completions response format
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: Function,
}

#[derive(Debug, Deserialize)]
struct Function {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize, Default)]
struct Usage {
    #[serde(default)]
    prompt_tokens: i64,
    #[serde(default)]
    completion_tokens: i64,
    #[serde(default)]
    total_tokens: i64,
}

/// Azure OpenAI provider client
///
/// The deployment name selects the model; it is part of the request path,
/// not the body.
pub struct AzureChatClient {
    client: Client,
    endpoint: String,
    api_key: String,
    api_version: String,
    deployment: String,
}

impl AzureChatClient {
    /// Create a new client from Azure settings
    pub fn new(config: &AzureConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_version: config.api_version.clone(),
            deployment: config.deployment.clone(),
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions",
            self.endpoint, self.deployment
        )
    }
}

#[async_trait]
impl LLMProvider for AzureChatClient {
    async fn chat(
        &self,
        messages: Vec<Message>,
        tools: Option<Vec<serde_json::Value>>,
        max_tokens: u32,
        temperature: f32,
    ) -> ProviderResult<LLMResponse> {
        let tool_choice = tools.as_ref().map(|_| "auto".to_string());
        let request = ChatCompletionRequest {
            messages,
            tools,
            tool_choice,
            max_tokens,
            temperature,
        };

        debug!(
            "POST {} (api-version {})",
            self.completions_url(),
            self.api_version
        );

        let response = self
            .client
            .post(self.completions_url())
            .query(&[("api-version", self.api_version.as_str())])
            .header("api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(format!(
                "{}: {}",
                status,
                body.trim()
            )));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("no choices in response".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .into_iter()
            .map(|call| ToolCallRequest {
                id: call.id,
                call_type: call.call_type,
                name: call.function.name,
                arguments: normalize_arguments(serde_json::Value::String(call.function.arguments)),
            })
            .collect();

        let mut usage = HashMap::new();
        usage.insert("prompt_tokens".to_string(), completion.usage.prompt_tokens);
        usage.insert(
            "completion_tokens".to_string(),
            completion.usage.completion_tokens,
        );
        usage.insert("total_tokens".to_string(), completion.usage.total_tokens);

        Ok(LLMResponse {
            content: choice.message.content,
            tool_calls,
            finish_reason: choice.finish_reason.unwrap_or_else(|| "stop".to_string()),
            usage,
        })
    }

    fn default_model(&self) -> String {
        self.deployment.clone()
    }
}
