//! Handler for `config`.

use serde_json::json;

use crate::adapter::inbound::cli::{output, paths};
use crate::error::Result;

/// Execute `config`: show where zocli keeps its files.
pub fn execute() -> Result<()> {
    let config = paths::config_path();
    let orders = paths::orders_path();

    if output::is_json() {
        output::json_output(json!({
            "command": "config",
            "data_dir": paths::data_dir().display().to_string(),
            "config": config.display().to_string(),
            "orders": orders.display().to_string(),
        }));
        return Ok(());
    }

    if output::is_quiet() {
        println!("{}", config.display());
        println!("{}", orders.display());
        return Ok(());
    }

    output::field("Config", config.display());
    output::field("Orders", orders.display());
    output::hint(&format!(
        "set {} to keep these somewhere else",
        paths::HOME_ENV
    ));
    Ok(())
}
