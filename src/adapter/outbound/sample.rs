//! Built-in sample history for trying the tool without a session.

use crate::domain::Order;
use crate::error::Result;

const SAMPLE_ORDERS: &str = include_str!("../../../data/sample_orders.json");

/// Decode the embedded sample orders.
pub fn sample_orders() -> Result<Vec<Order>> {
    Ok(serde_json::from_str(SAMPLE_ORDERS)?)
}
