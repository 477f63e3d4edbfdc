//! Handlers for the `auth` command group.

use std::path::Path;

use dialoguer::{theme::ColorfulTheme, Password};
use serde_json::json;

use crate::adapter::inbound::cli::command::{AuthSetArgs, AuthStatusArgs};
use crate::adapter::inbound::cli::{output, paths};
use crate::adapter::outbound::zomato::ZomatoClient;
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::COOKIE_ENV;
use crate::port::outbound::{AuthStatus, OrderSource};

/// Execute `auth set`.
pub async fn execute_set(args: AuthSetArgs) -> Result<()> {
    let cookie = match (args.cookie, args.cookie_file) {
        (Some(cookie), _) => cookie,
        (None, Some(path)) => read_cookie_file(&path).await?,
        (None, None) => prompt_cookie()?,
    };

    let path = paths::config_path();
    let mut config = paths::load_config()?;
    config.set_cookie(&cookie)?;
    config.save(&path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "auth.set",
            "config": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success("Session cookie saved");
    output::field("Config", path.display());
    output::hint("check it with `zocli auth status`");
    Ok(())
}

async fn read_cookie_file(path: &Path) -> Result<String> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(content.trim().to_string())
}

fn prompt_cookie() -> Result<String> {
    if output::is_json() {
        return Err(ConfigError::InvalidValue {
            field: "cookie",
            reason: "pass --cookie or --cookie-file when using --json".to_string(),
        }
        .into());
    }

    output::note("Copy the Cookie header from a logged-in browser session.");
    let cookie = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Cookie")
        .interact()?;
    Ok(cookie)
}

/// Execute `auth status`.
pub async fn execute_status(args: AuthStatusArgs) -> Result<()> {
    let config = paths::load_config()?;

    let Some(cookie) = config.cookie() else {
        if output::is_json() {
            output::json_output(json!({
                "command": "auth.status",
                "saved": false,
                "authenticated": false,
            }));
            return Ok(());
        }
        output::warning("Not logged in (no saved cookie)");
        output::hint(&format!(
            "run `zocli auth set` or export {COOKIE_ENV}"
        ));
        return Ok(());
    };

    if args.offline {
        if output::is_json() {
            output::json_output(json!({
                "command": "auth.status",
                "saved": true,
                "authenticated": serde_json::Value::Null,
            }));
            return Ok(());
        }
        output::success("Saved cookie found");
        output::hint("run `zocli auth status` without --offline to validate it");
        return Ok(());
    }

    let client = ZomatoClient::from_config(&config.api, cookie)?;
    let pb = output::spinner("Checking session...");
    let status = match client.check_auth().await {
        Ok(status) => status,
        Err(err) => {
            output::spinner_fail(&pb, "Session check failed");
            return Err(err);
        }
    };
    pb.finish_and_clear();

    if output::is_json() {
        output::json_output(json!({
            "command": "auth.status",
            "saved": true,
            "authenticated": status.is_authenticated(),
        }));
        return Ok(());
    }

    match status {
        AuthStatus::Authenticated => output::success("Logged in"),
        AuthStatus::Unauthenticated => {
            output::warning("Not logged in (cookie invalid or expired)");
            output::hint("run `zocli auth set` with a fresh cookie");
        }
    }
    Ok(())
}

/// Execute `auth logout`.
pub fn execute_logout() -> Result<()> {
    let path = paths::config_path();
    let mut config = paths::load_config()?;
    config.clear_cookie();
    config.save(&path)?;

    if output::is_json() {
        output::json_output(json!({
            "command": "auth.logout",
            "config": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success("Logged out (saved cookie cleared)");
    if std::env::var_os(COOKIE_ENV).is_some() {
        output::warning(&format!("{COOKIE_ENV} is still set in the environment"));
    }
    Ok(())
}
