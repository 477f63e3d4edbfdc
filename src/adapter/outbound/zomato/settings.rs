//! Upstream API configuration.

use serde::{Deserialize, Serialize};

/// The `[api]` table of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Site root; endpoints are resolved against it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Pause between page requests in milliseconds.
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
    /// Hard ceiling on pages fetched per sync.
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_base_url() -> String {
    "https://www.zomato.com".into()
}

const fn default_timeout_ms() -> u64 {
    30_000
}

const fn default_page_delay_ms() -> u64 {
    500
}

const fn default_max_pages() -> u32 {
    50
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            page_delay_ms: default_page_delay_ms(),
            max_pages: default_max_pages(),
        }
    }
}
