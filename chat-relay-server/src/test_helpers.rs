//! Test helpers for chat-relay-server unit tests.

use std::sync::Arc;

use axum_test::TestServer;

use chat_relay_core::common::build_http_client;
use chat_relay_core::{HttpTransport, RelayState};
use chat_relay_types::RelayMode;

use crate::cli::RelayArgs;
use crate::router::build_router;

/// Gated args with a password and all three keys set.
pub fn test_relay_args() -> RelayArgs {
    RelayArgs {
        port: 0,
        bind: "127.0.0.1".parse().expect("valid ip"),
        mode: RelayMode::Gated,
        access_password: Some("pw".to_string()),
        deepseek_api_key: Some("sk-deepseek".to_string()),
        gemini_api_key: Some("sk-gemini".to_string()),
        openai_api_key: Some("sk-openai".to_string()),
        deepseek_api_url: None,
        gemini_api_url: None,
        openai_api_url: None,
        request_timeout: 30,
        expose_upstream_errors: true,
        cors_origins: Vec::new(),
    }
}

/// Full server router over a real transport. Tests must not reach the upstream call.
pub fn test_router(cors_origins: &[String]) -> TestServer {
    let config = test_relay_args().to_relay_config();
    let transport = HttpTransport::new(build_http_client(5).expect("http client"));
    let state = RelayState::new(&config, Arc::new(transport));
    TestServer::new(build_router(state, cors_origins)).expect("test server")
}
