//! CLI configuration from the environment

use cafe_client::ClientConfig;

/// Runtime settings
///
/// | Variable | Default |
/// |----------|---------|
/// | CAFE_API_URL | http://localhost:5050 |
/// | REQUEST_TIMEOUT_SECS | 30 |
/// | LOG_LEVEL | info |
/// | LOG_DIR | unset (stderr) |
#[derive(Debug, Clone)]
pub struct Config {
    pub client: ClientConfig,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
        }
    }

    /// Apply command-line overrides on top of the environment
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.client = self.client.with_base_url(url);
        }
        self
    }
}
