//! Relay configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use super::provider::Provider;
use crate::error::ConfigError;

/// Which handler variant the relay runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayMode {
    /// Password required; unknown `modelType` is rejected with 400.
    #[default]
    Gated,
    /// No password; unknown `modelType` falls back to deepseek.
    Open,
}

impl fmt::Display for RelayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gated => f.write_str("gated"),
            Self::Open => f.write_str("open"),
        }
    }
}

impl FromStr for RelayMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gated" => Ok(Self::Gated),
            "open" => Ok(Self::Open),
            other => Err(ConfigError::ParseError {
                message: format!("unknown relay mode '{}' (expected 'gated' or 'open')", other),
            }),
        }
    }
}

/// Credential and endpoint for one provider.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProviderConfig {
    /// Bearer token sent upstream
    #[serde(default)]
    pub api_key: Option<String>,
    /// Endpoint override; the provider default is used when absent
    #[serde(default)]
    #[validate(url)]
    pub api_url: Option<String>,
}

impl ProviderConfig {
    /// Configured key, treating an empty string as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ProvidersConfig {
    #[serde(default)]
    #[validate(nested)]
    pub deepseek: ProviderConfig,
    #[serde(default)]
    #[validate(nested)]
    pub gemini: ProviderConfig,
    #[serde(default)]
    #[validate(nested)]
    pub chatgpt: ProviderConfig,
}

impl ProvidersConfig {
    pub fn get(&self, provider: Provider) -> &ProviderConfig {
        match provider {
            Provider::Deepseek => &self.deepseek,
            Provider::Gemini => &self.gemini,
            Provider::Chatgpt => &self.chatgpt,
        }
    }

    pub fn get_mut(&mut self, provider: Provider) -> &mut ProviderConfig {
        match provider {
            Provider::Deepseek => &mut self.deepseek,
            Provider::Gemini => &mut self.gemini,
            Provider::Chatgpt => &mut self.chatgpt,
        }
    }
}

/// Full relay configuration, built once at startup.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct RelayConfig {
    #[serde(default)]
    pub mode: RelayMode,
    /// Shared secret checked in gated mode
    #[serde(default)]
    pub access_password: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub providers: ProvidersConfig,
    /// Total outbound request timeout in seconds
    #[validate(range(min = 5_u64, max = 3600_u64))]
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
    /// Return raw upstream error bodies to callers
    #[serde(default = "default_expose_upstream_errors")]
    pub expose_upstream_errors: bool,
    /// Allowed browser origins; empty allows any
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            mode: RelayMode::default(),
            access_password: None,
            providers: ProvidersConfig::default(),
            request_timeout: default_request_timeout(),
            expose_upstream_errors: default_expose_upstream_errors(),
            cors_origins: Vec::new(),
        }
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("mode", &self.mode)
            .field("access_password", &self.access_password.as_ref().map(|_| "<redacted>"))
            .field("providers", &self.providers)
            .field("request_timeout", &self.request_timeout)
            .field("expose_upstream_errors", &self.expose_upstream_errors)
            .field("cors_origins", &self.cors_origins)
            .finish()
    }
}

impl RelayConfig {
    /// Validate field ranges and the mode-specific requirements.
    ///
    /// Gated mode needs a non-empty password; missing provider keys are allowed and
    /// surface per request.
    pub fn validate_for_startup(&self) -> Result<(), ConfigError> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))?;

        if self.mode == RelayMode::Gated
            && self.access_password.as_deref().map_or(true, str::is_empty)
        {
            return Err(ConfigError::ValidationError {
                field: "access_password".to_string(),
                message: "ACCESS_PASSWORD must be set in gated mode".to_string(),
            });
        }

        Ok(())
    }

    /// Providers with no API key configured.
    pub fn missing_credentials(&self) -> Vec<Provider> {
        Provider::ALL
            .into_iter()
            .filter(|p| self.providers.get(*p).api_key().is_none())
            .collect()
    }
}

pub const fn default_request_timeout() -> u64 {
    120
}

const fn default_expose_upstream_errors() -> bool {
    true
}
