//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Key the Horde accepts for anonymous, lowest-priority access
pub const ANONYMOUS_API_KEY: &str = "0000000000";

/// AI Horde connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL of the Horde v2 API.
    pub base_url: String,
    /// Environment variable name for the API key (default: "HORDE_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// `Client-Agent` header value (`name:version:contact`).
    pub client_agent: String,
    /// HTTP timeout for the submission request.
    pub submit_timeout_seconds: u64,
    /// HTTP timeout for each status query.
    pub status_timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://aihorde.net/api/v2".to_string(),
            api_key_env: "HORDE_API_KEY".to_string(),
            api_key: None,
            client_agent: concat!("horde-companion:", env!("CARGO_PKG_VERSION"), ":unknown")
                .to_string(),
            submit_timeout_seconds: 30,
            status_timeout_seconds: 15,
        }
    }
}

impl FileProviderConfig {
    /// Resolve the API key: explicit value, then the env var, then anonymous
    pub fn resolve_api_key(&self) -> String {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                std::env::var(&self.api_key_env)
                    .ok()
                    .filter(|k| !k.trim().is_empty())
            })
            .unwrap_or_else(|| ANONYMOUS_API_KEY.to_string())
    }
}
