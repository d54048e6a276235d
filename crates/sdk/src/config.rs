//! Configuration types for the Typefully client.

use std::time::Duration;
use url::Url;

/// Configuration for the Typefully client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Typefully API.
    pub base_url: Url,
    /// API key for authentication. Absence is reported per call, not at
    /// construction, so a keyless client can still be built and introspected.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}
