//! OpenAI ChatCompletions request types, as sent to every provider.

use serde::{Deserialize, Serialize};

/// OpenAI message role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OpenAIRole {
    System,
    User,
    Assistant,
}

/// OpenAI chat message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OpenAIMessage {
    pub role: OpenAIRole,
    pub content: String,
}

/// Outbound chat completion body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
}

impl ChatCompletionRequest {
    /// One user turn, no history and no system prompt.
    pub fn single_user(model: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![OpenAIMessage { role: OpenAIRole::User, content: content.into() }],
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_single_user_wire_shape() {
        let body = serde_json::to_value(ChatCompletionRequest::single_user("gpt-4o-mini", "hello"))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "user", "content": "hello"}]
            })
        );
    }
}
