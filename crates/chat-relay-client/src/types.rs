use std::time::Duration;

/// Connection settings for [`crate::RelayClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Relay origin, e.g. `http://127.0.0.1:3000`
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: "http://127.0.0.1:3000".to_string(), timeout_secs: 130 }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
