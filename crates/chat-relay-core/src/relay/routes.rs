//! Static provider route table.

use std::fmt;

use chat_relay_types::{Provider, ProviderConfig, ProvidersConfig, RelayError, RelayMode};

/// Endpoint, credential and model for one provider.
#[derive(Clone)]
pub struct Route {
    pub provider: Provider,
    pub api_url: String,
    pub model_name: &'static str,
    api_key: Option<String>,
}

impl Route {
    pub fn from_config(provider: Provider, config: &ProviderConfig) -> Self {
        Self {
            provider,
            api_url: config
                .api_url
                .clone()
                .unwrap_or_else(|| provider.default_api_url().to_string()),
            model_name: provider.model_name(),
            api_key: config.api_key().map(str::to_string),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// The bearer token, or the missing-credential error naming this provider.
    pub fn api_key(&self) -> Result<&str, RelayError> {
        self.api_key.as_deref().ok_or_else(|| RelayError::MissingCredential {
            provider: self.provider.to_string(),
            env_var: self.provider.api_key_env().to_string(),
        })
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("provider", &self.provider)
            .field("api_url", &self.api_url)
            .field("model_name", &self.model_name)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// The three routes, fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct RouteTable {
    deepseek: Route,
    gemini: Route,
    chatgpt: Route,
}

impl RouteTable {
    pub fn from_config(providers: &ProvidersConfig) -> Self {
        Self {
            deepseek: Route::from_config(Provider::Deepseek, &providers.deepseek),
            gemini: Route::from_config(Provider::Gemini, &providers.gemini),
            chatgpt: Route::from_config(Provider::Chatgpt, &providers.chatgpt),
        }
    }

    pub fn get(&self, provider: Provider) -> &Route {
        match provider {
            Provider::Deepseek => &self.deepseek,
            Provider::Gemini => &self.gemini,
            Provider::Chatgpt => &self.chatgpt,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        Provider::ALL.into_iter().map(move |p| self.get(p))
    }

    /// Resolve the caller's `modelType`.
    ///
    /// Gated mode rejects unknown or absent values; open mode routes them to
    /// [`Provider::FALLBACK`].
    pub fn resolve(&self, model_type: Option<&str>, mode: RelayMode) -> Result<&Route, RelayError> {
        let parsed = model_type
            .ok_or_else(|| RelayError::UnknownModel { model: String::new() })
            .and_then(str::parse::<Provider>);

        match (parsed, mode) {
            (Ok(provider), _) => Ok(self.get(provider)),
            (Err(err), RelayMode::Gated) => Err(err),
            (Err(_), RelayMode::Open) => {
                tracing::debug!(
                    "Unknown modelType {:?}, falling back to {}",
                    model_type,
                    Provider::FALLBACK
                );
                Ok(self.get(Provider::FALLBACK))
            },
        }
    }
}
