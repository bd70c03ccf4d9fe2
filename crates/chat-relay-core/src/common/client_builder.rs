use std::time::Duration;

/// Build the shared outbound HTTP client.
///
/// One client per process so every relay call reuses the same connection pool.
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(timeout_secs.max(5)))
        .tcp_nodelay(true)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        assert!(build_http_client(120).is_ok());
        // below the floor is clamped, not rejected
        assert!(build_http_client(0).is_ok());
    }
}
