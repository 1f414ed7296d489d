//! Prompt template for the `Human:`/`Assistant:` completion framing

use crate::core::string::capitalize;
use crate::session::entities::ChatMessage;

/// Linearizes an ordered message list into one prompt string.
///
/// Each message becomes `"<Role>: <content>"`, messages are separated by a
/// blank line, and the result is wrapped in the turn markers the model
/// expects. Message order is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    human_marker: String,
    assistant_marker: String,
}

impl PromptTemplate {
    /// Framing used by the Anthropic text-completion models on Bedrock.
    pub fn anthropic() -> Self {
        Self {
            human_marker: "\n\nHuman:".to_string(),
            assistant_marker: "\n\nAssistant:".to_string(),
        }
    }

    /// Render one message as `"<Role capitalized>: <content>"`.
    pub fn render_message(message: &ChatMessage) -> String {
        format!("{}: {}", capitalize(message.role.as_str()), message.content)
    }

    /// Join all messages with a blank line between them.
    pub fn transcript(messages: &[ChatMessage]) -> String {
        messages
            .iter()
            .map(Self::render_message)
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the full prompt sent to the model.
    pub fn render(&self, messages: &[ChatMessage]) -> String {
        format!(
            "{} {}{}",
            self.human_marker,
            Self::transcript(messages),
            self.assistant_marker
        )
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::anthropic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_user_message() {
        let prompt = PromptTemplate::anthropic().render(&[ChatMessage::user("hi")]);
        assert_eq!(prompt, "\n\nHuman: User: hi\n\nAssistant:");
    }

    #[test]
    fn test_multi_turn_joined_with_blank_line() {
        let messages = vec![
            ChatMessage::system("You write Flink SQL."),
            ChatMessage::user("count orders"),
            ChatMessage::assistant("select count(*) from orders"),
            ChatMessage::user("per day?"),
        ];
        let prompt = PromptTemplate::anthropic().render(&messages);
        assert_eq!(
            prompt,
            "\n\nHuman: System: You write Flink SQL.\n\nUser: count orders\n\n\
             Assistant: select count(*) from orders\n\nUser: per day?\n\nAssistant:"
        );
    }

    #[test]
    fn test_order_changes_prompt() {
        let a = ChatMessage::user("first");
        let b = ChatMessage::assistant("second");
        let template = PromptTemplate::anthropic();
        let forward = template.render(&[a.clone(), b.clone()]);
        let reversed = template.render(&[b, a]);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_empty_conversation() {
        let prompt = PromptTemplate::anthropic().render(&[]);
        assert_eq!(prompt, "\n\nHuman: \n\nAssistant:");
    }
}
