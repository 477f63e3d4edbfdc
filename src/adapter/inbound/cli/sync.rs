//! Handler for `sync`.

use serde_json::json;
use tokio::sync::watch;
use tracing::info;

use crate::adapter::inbound::cli::command::SyncArgs;
use crate::adapter::inbound::cli::{cache, output, paths};
use crate::adapter::outbound::sample::sample_orders;
use crate::adapter::outbound::zomato::ZomatoClient;
use crate::application::{FetchProgress, OrderIngestor};
use crate::domain::Order;
use crate::error::{Error, Result};
use crate::port::outbound::OrderStore;

/// Execute `sync`: fetch the whole history and replace the cache.
pub async fn execute(args: SyncArgs) -> Result<()> {
    let orders = if args.mock {
        sample_orders()?
    } else {
        fetch_remote().await?
    };

    let store = cache::order_store();
    store.save(&orders).await?;
    info!(count = orders.len(), mock = args.mock, "Sync complete");

    if output::is_json() {
        output::json_output(json!({
            "command": "sync",
            "mock": args.mock,
            "orders": orders.len(),
            "path": store.path().display().to_string(),
        }));
        return Ok(());
    }

    let what = if args.mock { "sample orders" } else { "orders" };
    output::success(&format!("Stored {} {what}", orders.len()));
    output::field("Path", store.path().display());
    Ok(())
}

async fn fetch_remote() -> Result<Vec<Order>> {
    let config = paths::load_config()?;
    let cookie = config.cookie().ok_or(Error::NotAuthenticated)?;
    let client = ZomatoClient::from_config(&config.api, cookie)?;
    let ingestor = OrderIngestor::with_options(client, config.sync_options());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    let pb = output::spinner("Fetching order history...");
    let result = ingestor
        .fetch_all(shutdown_rx, |progress| {
            let line = progress_line(progress);
            if !pb.is_hidden() {
                pb.println(format!("  {line}"));
                pb.set_message(line);
            } else if !output::is_json() {
                // No terminal to draw on; one plain line per page.
                output::note(&line);
            }
        })
        .await;
    interrupt.abort();

    match result {
        Ok(orders) => {
            output::spinner_success(&pb, &format!("Fetched {} orders", orders.len()));
            Ok(orders)
        }
        Err(Error::Cancelled) => {
            output::spinner_fail(&pb, "Sync interrupted; cache left unchanged");
            Err(Error::Cancelled)
        }
        Err(err) => {
            output::spinner_fail(&pb, "Sync failed; cache left unchanged");
            Err(err)
        }
    }
}

/// `Fetched page 2/7 (orders: 20)`; the page count shows `?` until known.
fn progress_line(progress: FetchProgress) -> String {
    let total = if progress.total_pages > 0 {
        progress.total_pages.to_string()
    } else {
        "?".to_string()
    };
    format!(
        "Fetched page {}/{} (orders: {})",
        progress.page, total, progress.total_orders
    )
}
