//! CLI/env arguments -> validated [`RelayConfig`].

use anyhow::Result;
use tracing::warn;

use chat_relay_types::{ProviderConfig, ProvidersConfig, RelayConfig};

use crate::cli::RelayArgs;

impl RelayArgs {
    /// Assemble the config without validating it.
    pub fn to_relay_config(&self) -> RelayConfig {
        RelayConfig {
            mode: self.mode,
            access_password: self.access_password.clone(),
            providers: ProvidersConfig {
                deepseek: provider(&self.deepseek_api_key, &self.deepseek_api_url),
                gemini: provider(&self.gemini_api_key, &self.gemini_api_url),
                chatgpt: provider(&self.openai_api_key, &self.openai_api_url),
            },
            request_timeout: self.request_timeout,
            expose_upstream_errors: self.expose_upstream_errors,
            cors_origins: self
                .cors_origins
                .iter()
                .map(|o| o.trim())
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

fn provider(api_key: &Option<String>, api_url: &Option<String>) -> ProviderConfig {
    ProviderConfig {
        api_key: api_key.clone(),
        api_url: api_url.as_deref().map(str::trim).filter(|u| !u.is_empty()).map(str::to_string),
    }
}

/// Build and validate the startup configuration. Missing provider keys only warn; the
/// affected route answers 500 per request.
pub fn load(args: &RelayArgs) -> Result<RelayConfig> {
    let config = args.to_relay_config();
    config.validate_for_startup()?;

    for provider in config.missing_credentials() {
        warn!(
            "No API key for {}: set {} to enable this route",
            provider,
            provider.api_key_env()
        );
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::test_relay_args;
    use chat_relay_types::{Provider, RelayMode};

    #[test]
    fn test_load_gated_with_password() {
        let config = load(&test_relay_args()).unwrap();
        assert_eq!(config.mode, RelayMode::Gated);
        assert_eq!(config.providers.get(Provider::Deepseek).api_key(), Some("sk-deepseek"));
        assert!(config.missing_credentials().is_empty());
    }

    #[test]
    fn test_gated_without_password_fails() {
        let mut args = test_relay_args();
        args.access_password = None;
        let err = load(&args).unwrap_err();
        assert!(err.to_string().contains("access_password"), "got: {}", err);
    }

    #[test]
    fn test_open_without_password_loads() {
        let mut args = test_relay_args();
        args.mode = RelayMode::Open;
        args.access_password = None;
        assert!(load(&args).is_ok());
    }

    #[test]
    fn test_bad_override_url_fails() {
        let mut args = test_relay_args();
        args.gemini_api_url = Some("gemini.local/chat".to_string());
        assert!(load(&args).is_err());
    }

    #[test]
    fn test_timeout_out_of_range_fails() {
        let mut args = test_relay_args();
        args.request_timeout = 4000;
        assert!(load(&args).is_err());
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let mut args = test_relay_args();
        args.openai_api_url = Some("  ".to_string());
        args.cors_origins = vec![String::new(), " https://app.example ".to_string()];
        let config = args.to_relay_config();
        assert_eq!(config.providers.chatgpt.api_url, None);
        assert_eq!(config.cors_origins, vec!["https://app.example"]);
    }
}
