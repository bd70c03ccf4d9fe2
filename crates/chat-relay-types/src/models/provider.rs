//! Upstream chat-completion providers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RelayError;

/// Provider selected by the caller's `modelType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Deepseek,
    Gemini,
    Chatgpt,
}

impl Provider {
    pub const ALL: [Provider; 3] = [Provider::Deepseek, Provider::Gemini, Provider::Chatgpt];

    /// Route used when open mode receives an unknown `modelType`.
    pub const FALLBACK: Provider = Provider::Deepseek;

    /// Wire name as sent in `modelType`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Deepseek => "deepseek",
            Self::Gemini => "gemini",
            Self::Chatgpt => "chatgpt",
        }
    }

    /// OpenAI-compatible chat completions endpoint.
    pub const fn default_api_url(self) -> &'static str {
        match self {
            Self::Deepseek => "https://api.deepseek.com/chat/completions",
            Self::Gemini => {
                "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions"
            },
            Self::Chatgpt => "https://api.openai.com/v1/chat/completions",
        }
    }

    pub const fn model_name(self) -> &'static str {
        match self {
            Self::Deepseek => "deepseek-chat",
            Self::Gemini => "gemini-1.5-flash",
            Self::Chatgpt => "gpt-4o-mini",
        }
    }

    /// Environment variable holding this provider's API key.
    pub const fn api_key_env(self) -> &'static str {
        match self {
            Self::Deepseek => "DEEPSEEK_API_KEY",
            Self::Gemini => "GEMINI_API_KEY",
            Self::Chatgpt => "OPENAI_API_KEY",
        }
    }

    /// Environment variable overriding the endpoint URL.
    pub const fn api_url_env(self) -> &'static str {
        match self {
            Self::Deepseek => "DEEPSEEK_API_URL",
            Self::Gemini => "GEMINI_API_URL",
            Self::Chatgpt => "OPENAI_API_URL",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the wire name.
impl FromStr for Provider {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RelayError::UnknownModel { model: s.to_string() })
    }
}
