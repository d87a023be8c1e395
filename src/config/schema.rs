//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.fastly.com";

/// Environment variable holding the API token.
pub const ENV_API_TOKEN: &str = "FASTLY_API_TOKEN";

/// Environment variable overriding the API endpoint.
pub const ENV_BASE_URL: &str = "FASTLY_API_URL";

/// Settings for constructing an API client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API (e.g. "https://api.fastly.com").
    pub base_url: String,

    /// API token sent with every request.
    pub api_token: String,

    /// User-Agent header value.
    pub user_agent: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: String::new(),
            user_agent: concat!("edge-config-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    /// Build a config with the given token and all other fields defaulted.
    pub fn with_token(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            ..Self::default()
        }
    }

    /// Build a config from the process environment.
    ///
    /// Reads `FASTLY_API_TOKEN` and, if set, `FASTLY_API_URL`. The token may
    /// be empty here; validation happens when the client is constructed.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var(ENV_API_TOKEN) {
            config.api_token = token;
        }
        if let Ok(url) = std::env::var(ENV_BASE_URL) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }
        config
    }
}
