//! # Chat Relay Core
//!
//! The relay handler and everything it needs at request time.
//!
//! ```text
//! chat-relay-core/src/
//! ├── relay/         # handler, route table, password gate, transport, reply extraction
//! ├── common/        # HTTP client builder, upstream error sanitizer
//! ├── middleware/    # CORS layer
//! └── error.rs       # RelayError -> HTTP response
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub mod common;
pub mod error;
pub mod middleware;
pub mod relay;

pub use error::RelayErrorResponse;
pub use relay::{
    build_relay_router, CompletionTransport, HttpTransport, RelayPolicy, RelayState, Route,
    RouteTable, TransportError, UpstreamReply, CHAT_PATH,
};
