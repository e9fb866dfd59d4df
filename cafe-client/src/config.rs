//! Client configuration
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | CAFE_API_URL | http://localhost:5050 | REST backend base URL |
//! | REQUEST_TIMEOUT_SECS | 30 | Per-request timeout |

use crate::http::NetworkHttpClient;
use crate::ClientResult;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5050";

/// Client configuration for connecting to the café backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:5050")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = std::env::var("CAFE_API_URL").unwrap_or_else(|_| {
            tracing::debug!("CAFE_API_URL not set, using {}", DEFAULT_BASE_URL);
            DEFAULT_BASE_URL.to_string()
        });
        let timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> ClientResult<NetworkHttpClient> {
        NetworkHttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
