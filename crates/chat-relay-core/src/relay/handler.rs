use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode},
    Json,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use chat_relay_types::{ChatCompletionRequest, ChatReply, ChatRequest, RelayError};

use super::auth::check_access;
use super::response::extract_reply;
use super::RelayState;
use crate::error::RelayErrorResponse;

/// `/api/chat`: method check, password gate, route resolution, one outbound call.
pub async fn handle_chat(
    State(state): State<RelayState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ChatReply>, RelayErrorResponse> {
    if method != Method::POST {
        return Err(RelayError::MethodNotAllowed.into());
    }

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            RelayError::PayloadTooLarge
        } else {
            RelayError::InvalidRequest { message: rejection.body_text() }
        }
    })?;

    // Raw JSON first so a wrong password wins over any other malformed field.
    let raw: Value = serde_json::from_slice(&body)
        .map_err(|e| RelayError::InvalidRequest { message: e.to_string() })?;

    check_access(&state.policy, raw.get("password").and_then(Value::as_str))?;

    let request: ChatRequest = serde_json::from_value(raw)
        .map_err(|e| RelayError::InvalidRequest { message: e.to_string() })?;

    let route = state.routes.resolve(request.model_type.as_deref(), state.policy.mode)?;
    let api_key = route.api_key()?;

    let outbound = ChatCompletionRequest::single_user(route.model_name, request.message);

    info!("Relaying message to {} ({})", route.provider, route.model_name);
    let started = Instant::now();

    let upstream = state
        .transport
        .complete(&route.api_url, api_key, &outbound)
        .await
        .map_err(|e| {
            warn!("Upstream {} call failed after {}ms: {}", route.provider, started.elapsed().as_millis(), e);
            RelayError::Transport { message: e.to_string() }
        })?;

    debug!(
        "Upstream {} answered HTTP {} in {}ms",
        route.provider,
        upstream.status,
        started.elapsed().as_millis()
    );

    let reply = extract_reply(&upstream, state.policy.expose_upstream_errors)?;
    Ok(Json(ChatReply { reply }))
}
