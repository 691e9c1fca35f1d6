//! Context builder for assembling prompts

use tourdesk_core::session::ChatMessage;
use tourdesk_providers::{Message, ToolCallRequest};

/// Builds the context for LLM requests
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new() -> Self {
        Self
    }

    /// Build the scripted sales-flow system prompt
    pub fn build_system_prompt(&self) -> String {
        let today = chrono::Local::now().format("%Y-%m-%d (%A)");

        format!(
            r#"You are a vacation-package booking assistant for a resort club.
Today's date is {today}.

You walk each guest through the booking flow in order, one step per reply:
1. Confirm the package destination (use get_package_summary), or offer to
   discuss alternatives if the guest hesitates.
2. Once the destination is confirmed, ask for the guest's home zip code and
   verify it with verify_zip_code. If it does not qualify, ask for another.
3. Ask how many guests are traveling and which dates they have in mind, then
   look up open stay windows with get_availability (or
   get_availability_summary when the guest has no dates yet).
4. Present matching accommodations with get_accommodation_details and let
   the guest pick a room type.
5. Offer the tour slots available during the stay and let the guest pick one.
6. Close with a booking summary: destination, dates, party size,
   accommodation, room type, and tour slot.

Rules:
- Always ground dates, tours, and room types in tool results; never invent
  inventory.
- Ask for exactly one missing detail at a time and keep replies short and
  friendly.
- Dates passed to tools must be formatted YYYY-MM-DD.
- If a tool reports a problem, explain it plainly and ask the guest how to
  proceed."#
        )
    }

    /// Build the complete message list for an LLM call
    pub fn build_messages(&self, history: &[ChatMessage], current_message: &str) -> Vec<Message> {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message::system(self.build_system_prompt()));

        for msg in history {
            let message = match msg.role.as_str() {
                "user" => Message::user(&msg.content),
                "assistant" => Message::assistant(&msg.content),
                _ => continue,
            };
            messages.push(message);
        }

        messages.push(Message::user(current_message));
        messages
    }

    /// Add an assistant message with optional tool calls
    pub fn add_assistant_message(
        &self,
        messages: &mut Vec<Message>,
        content: Option<String>,
        tool_calls: Option<Vec<ToolCallRequest>>,
    ) {
        let mut msg = Message::assistant(content.unwrap_or_default());
        msg.tool_calls = tool_calls;
        messages.push(msg);
    }

    /// Add a tool result to the message list
    pub fn add_tool_result(&self, messages: &mut Vec<Message>, tool_call_id: String, result: String) {
        messages.push(Message::tool(result, tool_call_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_covers_the_flow() {
        let builder = PromptBuilder::new();
        let prompt = builder.build_system_prompt();
        assert!(prompt.contains("get_package_summary"));
        assert!(prompt.contains("verify_zip_code"));
        assert!(prompt.contains("booking summary"));
    }

    #[test]
    fn test_build_messages() {
        let builder = PromptBuilder::new();
        let history = vec![
            ChatMessage::new("user", "Hi"),
            ChatMessage::new("assistant", "Hello!"),
        ];
        let messages = builder.build_messages(&history, "What dates are open?");

        assert_eq!(messages.len(), 4); // system + 2 history + current
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[3].role, "user");
        assert_eq!(messages[3].content, "What dates are open?");
    }

    #[test]
    fn test_build_messages_skips_unknown_roles() {
        let builder = PromptBuilder::new();
        let history = vec![ChatMessage::new("tool", "raw output")];
        let messages = builder.build_messages(&history, "hi");

        assert_eq!(messages.len(), 2); // system + current only
    }

    #[test]
    fn test_add_tool_result() {
        let builder = PromptBuilder::new();
        let mut messages = vec![Message::user("test")];
        builder.add_tool_result(&mut messages, "call_123".to_string(), "file content".to_string());

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1].role, "tool");
        assert_eq!(messages[1].tool_call_id.as_deref(), Some("call_123"));
    }
}
