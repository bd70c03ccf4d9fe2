#![doc = include_str!("../README.md")]

mod client;
mod error;
mod types;

pub use chat_relay_types::{ChatReply, ChatRequest};
pub use client::RelayClient;
pub use error::ClientError;
pub use types::*;
