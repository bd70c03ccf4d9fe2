//! Typed error definitions for the chat relay.
//!
//! - [`RelayError`] is returned by the relay handler; its `Display` text is exactly
//!   what the caller sees in `{"error": ...}`.
//! - [`ConfigError`] is raised once at startup when configuration does not validate.

mod config;
mod relay;

pub use config::ConfigError;
pub use relay::RelayError;
