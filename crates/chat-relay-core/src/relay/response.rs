//! Upstream body -> caller reply.

use serde_json::Value;

use chat_relay_types::RelayError;

use super::upstream::UpstreamReply;
use crate::common::sanitize_upstream_error;

/// Pull the first choice's text out of an OpenAI-compatible body.
///
/// - no `choices` or an empty array: the body itself is the error (sanitized when
///   `expose_upstream_errors` is off)
/// - first choice without a `message` object: transport-class failure
/// - `content` string is returned verbatim; `null`/absent becomes `""`; any other JSON
///   is returned as its compact text
pub fn extract_reply(upstream: &UpstreamReply, expose_upstream_errors: bool) -> Result<String, RelayError> {
    let first = upstream
        .body
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first());

    let Some(first) = first else {
        return Err(rejected(upstream, expose_upstream_errors));
    };

    let message = first.get("message").filter(|m| m.is_object()).ok_or_else(|| {
        RelayError::Transport { message: "upstream choice has no message object".to_string() }
    })?;

    Ok(match message.get("content") {
        Some(Value::String(text)) => text.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    })
}

fn rejected(upstream: &UpstreamReply, expose_upstream_errors: bool) -> RelayError {
    let raw = upstream.body.to_string();
    if expose_upstream_errors {
        tracing::debug!("Upstream returned no choices (HTTP {}): {}", upstream.status, raw);
        RelayError::UpstreamRejected { body: raw }
    } else {
        tracing::warn!("Upstream returned no choices (HTTP {}): {}", upstream.status, raw);
        RelayError::UpstreamRejected { body: sanitize_upstream_error(upstream.status, &raw) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(status: u16, body: Value) -> UpstreamReply {
        UpstreamReply { status, body }
    }

    #[test]
    fn test_first_choice_content_verbatim() {
        let upstream = reply(
            200,
            json!({"choices": [
                {"message": {"role": "assistant", "content": "  hi\n"}},
                {"message": {"content": "second"}}
            ]}),
        );
        assert_eq!(extract_reply(&upstream, true).unwrap(), "  hi\n");
    }

    #[test]
    fn test_empty_or_absent_choices_surface_raw_body() {
        let empty = reply(200, json!({"choices": []}));
        assert_eq!(
            extract_reply(&empty, true).unwrap_err(),
            RelayError::UpstreamRejected { body: r#"{"choices":[]}"#.to_string() }
        );

        let error = reply(401, json!({"error": {"message": "Authentication Fails", "type": "authentication_error"}}));
        assert_eq!(
            extract_reply(&error, true).unwrap_err().to_string(),
            r#"{"error":{"message":"Authentication Fails","type":"authentication_error"}}"#
        );
    }

    #[test]
    fn test_raw_body_keeps_key_order() {
        let upstream = reply(400, json!({"error": {"type": "invalid", "message": "z first"}}));
        assert_eq!(
            extract_reply(&upstream, true).unwrap_err().to_string(),
            r#"{"error":{"type":"invalid","message":"z first"}}"#
        );
    }

    #[test]
    fn test_choices_not_an_array() {
        let upstream = reply(200, json!({"choices": "nope"}));
        assert!(matches!(extract_reply(&upstream, true), Err(RelayError::UpstreamRejected { .. })));
    }

    #[test]
    fn test_sanitized_body() {
        let upstream = reply(401, json!({"error": {"message": "Incorrect API key provided: sk-abc"}}));
        let err = extract_reply(&upstream, false).unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed (HTTP 401)");
    }

    #[test]
    fn test_choice_without_message_is_transport_failure() {
        let upstream = reply(200, json!({"choices": [{"text": "legacy completion"}]}));
        let err = extract_reply(&upstream, true).unwrap_err();
        assert!(matches!(err, RelayError::Transport { .. }));
        assert!(err.to_string().starts_with("服务器炸了: "));
    }

    #[test]
    fn test_null_and_structured_content() {
        let null = reply(200, json!({"choices": [{"message": {"content": null}}]}));
        assert_eq!(extract_reply(&null, true).unwrap(), "");

        let parts = reply(200, json!({"choices": [{"message": {"content": [{"type": "text", "text": "x"}]}}]}));
        assert_eq!(extract_reply(&parts, true).unwrap(), r#"[{"type":"text","text":"x"}]"#);
    }
}
