//! In-memory [`OrderStore`] for tests that should not touch the filesystem.

use std::path::PathBuf;

use parking_lot::RwLock;

use crate::domain::Order;
use crate::error::{Error, Result};
use crate::port::outbound::OrderStore;

/// Holds the collection behind a lock. Empty until the first save.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Option<Vec<Order>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `orders`.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders: RwLock::new(Some(orders)),
        }
    }

    /// Number of stored orders, 0 when never saved.
    pub fn len(&self) -> usize {
        self.orders.read().as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderStore for MemoryOrderStore {
    async fn load(&self) -> Result<Vec<Order>> {
        let mut orders = self.orders.read().clone().ok_or_else(|| Error::NotFound {
            path: PathBuf::from("<memory>"),
        })?;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }

    async fn save(&self, orders: &[Order]) -> Result<()> {
        *self.orders.write() = Some(orders.to_vec());
        Ok(())
    }
}
