//! The relay: one endpoint, three routes, no state between calls.

mod auth;
mod handler;
mod response;
mod routes;
mod upstream;


use std::sync::Arc;

use axum::{routing::any, Router};

use chat_relay_types::{RelayConfig, RelayMode};

pub use auth::check_access;
pub use handler::handle_chat;
pub use response::extract_reply;
pub use routes::{Route, RouteTable};
pub use upstream::{error_chain, CompletionTransport, HttpTransport, TransportError, UpstreamReply};

pub const CHAT_PATH: &str = "/api/chat";

/// Per-request behaviour switches taken from [`RelayConfig`].
#[derive(Clone)]
pub struct RelayPolicy {
    pub mode: RelayMode,
    pub access_password: Option<String>,
    pub expose_upstream_errors: bool,
}

impl RelayPolicy {
    pub fn from_config(config: &RelayConfig) -> Self {
        Self {
            mode: config.mode,
            access_password: config.access_password.clone(),
            expose_upstream_errors: config.expose_upstream_errors,
        }
    }
}

/// Immutable state shared by every invocation.
#[derive(Clone)]
pub struct RelayState {
    pub routes: Arc<RouteTable>,
    pub policy: Arc<RelayPolicy>,
    pub transport: Arc<dyn CompletionTransport>,
}

impl RelayState {
    pub fn new(config: &RelayConfig, transport: Arc<dyn CompletionTransport>) -> Self {
        Self {
            routes: Arc::new(RouteTable::from_config(&config.providers)),
            policy: Arc::new(RelayPolicy::from_config(config)),
            transport,
        }
    }
}

/// Router exposing [`CHAT_PATH`]. Every method is routed to the handler so that
/// non-POST requests get the JSON 405 body.
pub fn build_relay_router(state: RelayState) -> Router {
    Router::new().route(CHAT_PATH, any(handle_chat)).with_state(state)
}
