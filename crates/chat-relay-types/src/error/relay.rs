//! Relay handler errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that end a relay invocation.
///
/// The `Display` text of each variant is the caller-visible `error` string.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum RelayError {
    /// Anything but POST on the relay endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Password missing or not equal to the configured secret (gated mode)
    #[error("密码错误，别白嫖我！")]
    Unauthorized,

    /// `modelType` is not one of the routed providers (gated mode)
    #[error("未知模型")]
    UnknownModel { model: String },

    /// Body exceeds the configured request size limit
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Body is not JSON or does not carry a string `message`
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Resolved route has no API key configured
    #[error("Missing API key for {provider}: set {env_var}")]
    MissingCredential { provider: String, env_var: String },

    /// Upstream answered without choices; carries the raw (or sanitized) body
    #[error("{body}")]
    UpstreamRejected { body: String },

    /// Outbound call failed or its reply could not be read
    #[error("服务器炸了: {message}")]
    Transport { message: String },
}

impl RelayError {
    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed
                | Self::Unauthorized
                | Self::UnknownModel { .. }
                | Self::InvalidRequest { .. }
                | Self::PayloadTooLarge
        )
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::Unauthorized => 401,
            Self::PayloadTooLarge => 413,
            Self::UnknownModel { .. } | Self::InvalidRequest { .. } => 400,
            Self::MissingCredential { .. }
            | Self::UpstreamRejected { .. }
            | Self::Transport { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(RelayError::MethodNotAllowed.http_status_code(), 405);
        assert_eq!(RelayError::Unauthorized.http_status_code(), 401);
        assert_eq!(RelayError::PayloadTooLarge.http_status_code(), 413);
        assert_eq!(
            RelayError::UnknownModel { model: "llama".to_string() }.http_status_code(),
            400
        );
        assert_eq!(
            RelayError::Transport { message: "timeout".to_string() }.http_status_code(),
            500
        );
    }

    #[test]
    fn test_caller_visible_messages() {
        assert_eq!(RelayError::MethodNotAllowed.to_string(), "Method not allowed");
        assert_eq!(RelayError::Unauthorized.to_string(), "密码错误，别白嫖我！");
        assert_eq!(
            RelayError::UnknownModel { model: "llama".to_string() }.to_string(),
            "未知模型"
        );
        assert_eq!(
            RelayError::Transport { message: "timeout".to_string() }.to_string(),
            "服务器炸了: timeout"
        );
        assert_eq!(
            RelayError::UpstreamRejected { body: r#"{"error":"bad key"}"#.to_string() }
                .to_string(),
            r#"{"error":"bad key"}"#
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(RelayError::Unauthorized.is_client_error());
        assert!(!RelayError::MissingCredential {
            provider: "deepseek".to_string(),
            env_var: "DEEPSEEK_API_KEY".to_string()
        }
        .is_client_error());
    }
}
