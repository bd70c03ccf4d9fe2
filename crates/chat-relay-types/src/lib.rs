//! # Chat Relay Types
//!
//! Core types, configuration and error definitions for the chat relay.
//!
//! - **`error`** - Typed errors for the relay handler and startup configuration
//! - **`models`** - Provider table and relay configuration
//! - **`protocol`** - Inbound relay DTOs and the outbound OpenAI-compatible request
//!
//! ## Architecture Role
//!
//! ```text
//!            chat-relay-types (this crate)
//!                     │
//!        ┌────────────┼─────────────┐
//!        ▼            ▼             ▼
//! chat-relay-core  chat-relay-client
//!        │            │
//!        └─────┬──────┘
//!              ▼
//!      chat-relay-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{ConfigError, RelayError};

pub use models::{ProviderConfig, ProvidersConfig, Provider, RelayConfig, RelayMode};
pub use protocol::{ChatCompletionRequest, ChatReply, ChatRequest, ErrorBody};
