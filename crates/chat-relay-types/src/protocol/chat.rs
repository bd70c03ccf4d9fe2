//! Relay endpoint request and response bodies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body accepted by `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub message: String,
    /// Wire name of the provider; absent or non-string is treated like an unknown value
    #[serde(
        rename = "modelType",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub model_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_none", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Keep string values, map any other JSON (numbers, arrays, null) to `None`.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, model_type: impl Into<String>) -> Self {
        Self { message: message.into(), model_type: Some(model_type.into()), password: None }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }
}

/// Successful relay response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
}

/// Error relay response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case_model_type() {
        let request: ChatRequest = serde_json::from_value(serde_json::json!({
            "message": "hi",
            "modelType": "gemini",
            "password": "pw"
        }))
        .unwrap();
        assert_eq!(request, ChatRequest::new("hi", "gemini").with_password("pw"));
    }

    #[test]
    fn test_request_optional_fields() {
        let request: ChatRequest =
            serde_json::from_value(serde_json::json!({"message": "hi"})).unwrap();
        assert_eq!(request.model_type, None);
        assert_eq!(request.password, None);

        let json = serde_json::to_value(ChatRequest::new("hi", "deepseek")).unwrap();
        assert_eq!(json, serde_json::json!({"message": "hi", "modelType": "deepseek"}));
    }

    #[test]
    fn test_non_string_optional_fields_become_none() {
        let request: ChatRequest = serde_json::from_value(serde_json::json!({
            "message": "hi",
            "modelType": ["gemini"],
            "password": 123
        }))
        .unwrap();
        assert_eq!(request.model_type, None);
        assert_eq!(request.password, None);

        let request: ChatRequest =
            serde_json::from_value(serde_json::json!({"message": "hi", "modelType": null}))
                .unwrap();
        assert_eq!(request.model_type, None);
    }

    #[test]
    fn test_request_requires_message() {
        assert!(serde_json::from_value::<ChatRequest>(serde_json::json!({"modelType": "gemini"}))
            .is_err());
    }
}
