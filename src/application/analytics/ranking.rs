//! Top-N restaurants and dishes.

use std::collections::HashMap;

use crate::domain::{Bucket, Order};

use super::distribution::percent;

/// Used when the caller asks for zero entries.
pub const DEFAULT_TOP_LIMIT: usize = 5;

/// Placeholder for orders without a restaurant name.
pub const UNKNOWN_RESTAURANT: &str = "Unknown";

/// Restaurants ranked by order count.
#[must_use]
pub fn top_restaurants(orders: &[Order], limit: usize) -> Vec<Bucket> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for order in orders {
        let name = order.restaurant.trim();
        let name = if name.is_empty() { UNKNOWN_RESTAURANT } else { name };
        *counts.entry(name.to_string()).or_default() += 1;
    }
    rank(counts, orders.len(), limit)
}

/// Dishes ranked by total quantity ordered. Nameless items are ignored.
#[must_use]
pub fn top_items(orders: &[Order], limit: usize) -> Vec<Bucket> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut total = 0usize;
    for item in orders.iter().flat_map(|o| &o.items) {
        let name = item.name.trim();
        if name.is_empty() {
            continue;
        }
        let quantity = item.quantity.max(1) as usize;
        *counts.entry(name.to_string()).or_default() += quantity;
        total += quantity;
    }
    rank(counts, total, limit)
}

/// Sort by count descending then name ascending, and keep `limit` entries.
fn rank(counts: HashMap<String, usize>, total: usize, limit: usize) -> Vec<Bucket> {
    let limit = if limit == 0 { DEFAULT_TOP_LIMIT } else { limit };
    let mut out: Vec<Bucket> = counts
        .into_iter()
        .map(|(key, count)| Bucket {
            key,
            count,
            percent: percent(count, total),
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    out.truncate(limit);
    out
}
