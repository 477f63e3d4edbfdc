//! Persistence port for the canonical order collection.

use std::future::Future;

use crate::domain::Order;
use crate::error::Result;

/// Durable storage for the whole order collection.
pub trait OrderStore: Send + Sync {
    /// Load every stored order, newest first.
    ///
    /// Returns [`Error::NotFound`](crate::error::Error::NotFound) when nothing
    /// has been saved yet, so callers can point the user at `sync`.
    fn load(&self) -> impl Future<Output = Result<Vec<Order>>> + Send;

    /// Replace the stored collection.
    fn save(&self, orders: &[Order]) -> impl Future<Output = Result<()>> + Send;
}
