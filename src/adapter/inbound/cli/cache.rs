//! Access to the local order cache for read-only commands.

use crate::adapter::inbound::cli::paths;
use crate::adapter::outbound::JsonOrderStore;
use crate::domain::Order;
use crate::error::Result;
use crate::port::outbound::OrderStore;

/// Store backed by the order cache in the data directory.
pub fn order_store() -> JsonOrderStore {
    JsonOrderStore::new(paths::orders_path())
}

/// Cached orders, newest first. Fails with a "run sync first" error when empty.
pub async fn load_orders() -> Result<Vec<Order>> {
    order_store().load().await
}
