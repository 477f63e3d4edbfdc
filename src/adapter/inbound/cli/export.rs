//! Handler for `export`.

use serde_json::json;

use crate::adapter::inbound::cli::command::{ExportArgs, ExportFormat};
use crate::adapter::inbound::cli::{cache, output};
use crate::adapter::outbound::export::{orders_to_csv, orders_to_json};
use crate::adapter::outbound::json_store::write_private;
use crate::error::Result;

/// Execute `export [--format csv|json] [--output FILE]`.
pub async fn execute(args: ExportArgs) -> Result<()> {
    let orders = cache::load_orders().await?;
    let content = match args.format {
        ExportFormat::Csv => orders_to_csv(&orders),
        ExportFormat::Json => orders_to_json(&orders)?,
    };

    let Some(path) = args.output else {
        // The export itself is the output; --json and --quiet do not apply.
        print!("{content}");
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    write_private(&path, content.as_bytes()).await?;

    if output::is_json() {
        output::json_output(json!({
            "command": "export",
            "format": format!("{:?}", args.format).to_lowercase(),
            "orders": orders.len(),
            "path": path.display().to_string(),
        }));
        return Ok(());
    }

    output::success(&format!(
        "Exported {} orders to {}",
        orders.len(),
        path.display()
    ));
    Ok(())
}
