//! Protocol definitions.
//!
//! - `chat` - the relay's own `{message, modelType, password}` / `{reply}` / `{error}` bodies
//! - `openai` - the OpenAI-compatible ChatCompletions request forwarded upstream

pub mod chat;
pub mod openai;

pub use chat::{ChatReply, ChatRequest, ErrorBody};
pub use openai::{ChatCompletionRequest, OpenAIMessage, OpenAIRole};
