//! Application configuration loading, validation and persistence.
//!
//! `config.toml` lives in the data directory next to the order cache:
//!
//! ```toml
//! [session]
//! cookie = "cid=...; zat=..."
//!
//! [api]
//! base_url = "https://www.zomato.com"
//! timeout_ms = 30000
//! page_delay_ms = 500
//! max_pages = 50
//!
//! [logging]
//! level = "warn"
//! format = "pretty"
//! ```
//!
//! `ZOCLI_COOKIE` in the environment (or a `.env` file) overrides the saved cookie.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use super::logging::LoggingConfig;
use crate::adapter::outbound::zomato::ApiConfig;
use crate::application::SyncOptions;
use crate::error::{ConfigError, Result};

/// Environment variable that overrides the saved session cookie.
pub const COOKIE_ENV: &str = "ZOCLI_COOKIE";

/// The `[session]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cookie: Option<String>,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shape of the JSON config written by older releases.
#[derive(Debug, Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    cookie: String,
}

impl Config {
    /// Parse and validate configuration from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Write the configuration as TOML, owner-only on Unix.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Read the cookie out of a legacy `config.json`, if one exists and holds one.
    pub fn legacy_cookie<P: AsRef<Path>>(path: P) -> Option<String> {
        let data = fs::read(path).ok()?;
        let legacy: LegacyConfig = serde_json::from_slice(&data).ok()?;
        let cookie = legacy.cookie.trim();
        (!cookie.is_empty()).then(|| cookie.to_string())
    }

    /// The session cookie to use: `ZOCLI_COOKIE` first, then the saved one.
    #[must_use]
    pub fn cookie(&self) -> Option<String> {
        let from_env = std::env::var(COOKIE_ENV).ok();
        from_env
            .as_deref()
            .or(self.session.cookie.as_deref())
            .map(str::trim)
            .filter(|cookie| !cookie.is_empty())
            .map(str::to_string)
    }

    /// Store a cookie, trimming surrounding whitespace.
    pub fn set_cookie(&mut self, cookie: &str) -> Result<()> {
        let cookie = cookie.trim();
        if cookie.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.cookie",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        self.session.cookie = Some(cookie.to_string());
        Ok(())
    }

    pub fn clear_cookie(&mut self) {
        self.session.cookie = None;
    }

    /// Pagination settings for a sync run.
    #[must_use]
    pub fn sync_options(&self) -> SyncOptions {
        SyncOptions {
            page_delay: Duration::from_millis(self.api.page_delay_ms),
            max_pages: self.api.max_pages,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "api.base_url",
            }
            .into());
        }
        if let Err(err) = Url::parse(&self.api.base_url) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: err.to_string(),
            }
            .into());
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.api.max_pages == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.max_pages",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: "must be one of pretty, json".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
