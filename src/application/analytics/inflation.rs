//! Price tracking for single-dish orders.
//!
//! Only a delivered order with exactly one line item and a positive total
//! yields a trustworthy unit price. Everything else is skipped.
//!
//! ```text
//! orders ──sort by time──> eligible points ──> change vs last price at same restaurant
//!                                    │
//!                                    └──group by (restaurant, item), ≥2 points──> trends
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::domain::{parse_amount, round2, InflationTrend, ItemPricePoint, Order};

use super::ranking::DEFAULT_TOP_LIMIT;

/// Status text of a completed delivery.
pub const DELIVERED: &str = "Delivered";

/// Unit price observations in chronological order, filtered by dish name.
///
/// `query` is a case-insensitive substring of the dish name; blank matches
/// everything. Each point's `change` is the percent move from the previous
/// point at the same restaurant, 0 for a restaurant's first point. Orders
/// with equal timestamps keep their input order.
#[must_use]
pub fn calculate_inflation(orders: &[Order], query: &str) -> Vec<ItemPricePoint> {
    let query = query.trim().to_lowercase();

    let mut chronological: Vec<&Order> = orders.iter().collect();
    chronological.sort_by_key(|order| order.placed_at);

    let mut last_price: HashMap<&str, f64> = HashMap::new();
    let mut points = Vec::new();

    for order in chronological {
        let Some(mut point) = price_point(order) else {
            continue;
        };
        if !query.is_empty() && !point.item.to_lowercase().contains(&query) {
            continue;
        }
        if let Some(previous) = last_price.insert(order.restaurant.as_str(), point.unit_price) {
            if previous > 0.0 {
                point.change = percent_change(previous, point.unit_price);
            }
        }
        points.push(point);
    }
    points
}

/// The (restaurant, dish) pairs with the most price observations.
///
/// Pairs seen only once are dropped. Ranked by observation count, then by
/// restaurant and dish name. A `limit` of 0 means the default of 5.
#[must_use]
pub fn find_top_inflation_trends(orders: &[Order], limit: usize) -> Vec<InflationTrend> {
    let limit = if limit == 0 { DEFAULT_TOP_LIMIT } else { limit };

    let mut groups: BTreeMap<(String, String), Vec<ItemPricePoint>> = BTreeMap::new();
    for point in calculate_inflation(orders, "") {
        groups
            .entry((point.restaurant.clone(), point.item.clone()))
            .or_default()
            .push(point);
    }

    let mut trends: Vec<InflationTrend> = groups
        .into_iter()
        .filter(|(_, points)| points.len() >= 2)
        .filter_map(|((restaurant, item), points)| {
            let first = points.first()?;
            let last = points.last()?;
            Some(InflationTrend {
                observations: points.len(),
                first_seen: first.placed_at,
                first_price: first.unit_price,
                last_price: last.unit_price,
                total_change: percent_change(first.unit_price, last.unit_price),
                currency: first.currency.clone(),
                restaurant,
                item,
            })
        })
        .collect();

    // Stable sort keeps the BTreeMap's name order among equal counts.
    trends.sort_by(|a, b| b.observations.cmp(&a.observations));
    trends.truncate(limit);
    trends
}

fn price_point(order: &Order) -> Option<ItemPricePoint> {
    if order.status != DELIVERED {
        return None;
    }
    let [item] = order.items.as_slice() else {
        return None;
    };
    let (total, currency) = parse_amount(&order.total);
    if total <= 0.0 {
        return None;
    }
    let quantity = item.quantity.max(1);
    Some(ItemPricePoint {
        order_id: order.id.clone(),
        restaurant: order.restaurant.clone(),
        item: item.name.clone(),
        placed_at: order.placed_at,
        quantity,
        order_total: total,
        unit_price: round2(total / f64::from(quantity)),
        currency,
        change: 0.0,
    })
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from <= 0.0 {
        return 0.0;
    }
    round2((to - from) / from * 100.0)
}
