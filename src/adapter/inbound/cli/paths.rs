//! Path utilities for zocli.
//!
//! All data lives under `<config dir>/zocli/` (override with `ZOCLI_HOME`):
//! - `config.toml` - session cookie, API and logging settings
//! - `orders.json` - cached order history
//!
//! Builds before the rename kept their files in `<config dir>/zomatocli/`;
//! those are picked up the first time the new paths are resolved.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;
use crate::infrastructure::config::Config;

/// Environment variable that relocates the data directory.
pub const HOME_ENV: &str = "ZOCLI_HOME";

const APP_DIR: &str = "zocli";
const LEGACY_APP_DIR: &str = "zomatocli";
const CONFIG_FILE: &str = "config.toml";
const ORDERS_FILE: &str = "orders.json";
const LEGACY_CONFIG_FILE: &str = "config.json";

fn base_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the zocli data directory.
pub fn data_dir() -> PathBuf {
    match std::env::var_os(HOME_ENV) {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => base_config_dir().join(APP_DIR),
    }
}

/// Directory used by releases published as `zomatocli`.
pub fn legacy_dir() -> PathBuf {
    base_config_dir().join(LEGACY_APP_DIR)
}

/// Returns the config file path.
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// Returns the order cache path, migrating a legacy cache if needed.
pub fn orders_path() -> PathBuf {
    let path = data_dir().join(ORDERS_FILE);
    migrate_orders(&path, &legacy_dir().join(ORDERS_FILE))
}

/// Copy `legacy` to `current` when only the legacy file exists.
///
/// Returns the path to read from: `current`, or `legacy` if the copy failed.
pub fn migrate_orders(current: &Path, legacy: &Path) -> PathBuf {
    if current.exists() || !legacy.exists() {
        return current.to_path_buf();
    }

    let copied = current
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| fs::copy(legacy, current))
        .and_then(|_| restrict_to_owner(current));
    match copied {
        Ok(_) => {
            info!(from = %legacy.display(), to = %current.display(), "Migrated order cache");
            current.to_path_buf()
        }
        Err(err) => {
            warn!(error = %err, path = %legacy.display(), "Could not migrate order cache; reading legacy file");
            legacy.to_path_buf()
        }
    }
}

/// `fs::copy` carries the legacy mode over; the cache is owner-only.
#[cfg(unix)]
fn restrict_to_owner(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_to_owner(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Load `config.toml`, seeding it from a legacy `config.json` on first run.
pub fn load_config() -> Result<Config> {
    let dir = data_dir();
    load_config_from(&dir.join(CONFIG_FILE), &legacy_config_candidates(&dir))
}

fn legacy_config_candidates(dir: &Path) -> [PathBuf; 2] {
    [
        dir.join(LEGACY_CONFIG_FILE),
        legacy_dir().join(LEGACY_CONFIG_FILE),
    ]
}

/// Load `path`, or import the first legacy cookie found when it does not exist.
pub fn load_config_from(path: &Path, legacy: &[PathBuf]) -> Result<Config> {
    if path.exists() {
        return Config::load(path);
    }

    let mut config = Config::default();
    let Some((source, cookie)) = legacy
        .iter()
        .find_map(|candidate| Config::legacy_cookie(candidate).map(|c| (candidate, c)))
    else {
        return Ok(config);
    };

    config.set_cookie(&cookie)?;
    match config.save(path) {
        Ok(()) => info!(from = %source.display(), to = %path.display(), "Imported legacy config"),
        Err(err) => warn!(error = %err, "Could not write imported config"),
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_in_data_dir() {
        let dir = data_dir();
        assert_eq!(config_path(), dir.join("config.toml"));
        assert!(legacy_dir().ends_with("zomatocli"));
    }

    #[test]
    fn legacy_orders_are_copied_once() {
        let tmp = tempfile::tempdir().unwrap();
        let current = tmp.path().join("zocli/orders.json");
        let legacy = tmp.path().join("zomatocli/orders.json");
        fs::create_dir_all(legacy.parent().unwrap()).unwrap();
        fs::write(&legacy, "[]").unwrap();

        assert_eq!(migrate_orders(&current, &legacy), current);
        assert_eq!(fs::read_to_string(&current).unwrap(), "[]");

        fs::write(&legacy, "[{}]").unwrap();
        migrate_orders(&current, &legacy);
        assert_eq!(fs::read_to_string(&current).unwrap(), "[]");
    }

    #[cfg(unix)]
    #[test]
    fn migrated_cache_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let current = tmp.path().join("zocli/orders.json");
        let legacy = tmp.path().join("orders-legacy.json");
        fs::write(&legacy, "[]").unwrap();
        fs::set_permissions(&legacy, fs::Permissions::from_mode(0o644)).unwrap();

        assert_eq!(migrate_orders(&current, &legacy), current);

        let mode = fs::metadata(&current).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn missing_legacy_orders_leave_path_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let current = tmp.path().join("orders.json");
        let path = migrate_orders(&current, &tmp.path().join("nope.json"));
        assert_eq!(path, current);
        assert!(!current.exists());
    }

    #[test]
    fn legacy_cookie_is_imported_into_new_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        let legacy = tmp.path().join("config.json");
        fs::write(&legacy, r#"{"cookie": " zat=abc "}"#).unwrap();

        let config = load_config_from(&path, &[tmp.path().join("absent.json"), legacy]).unwrap();

        assert_eq!(config.session.cookie.as_deref(), Some("zat=abc"));
        let saved = Config::load(&path).unwrap();
        assert_eq!(saved.session.cookie.as_deref(), Some("zat=abc"));
    }

    #[test]
    fn no_config_anywhere_is_default() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config_from(&tmp.path().join("config.toml"), &[]).unwrap();
        assert_eq!(config, Config::default());
    }
}
