//! Domain models: the provider table and relay configuration.

mod config;
mod provider;

pub use config::{default_request_timeout, ProviderConfig, ProvidersConfig, RelayConfig, RelayMode};
pub use provider::Provider;
