//! Weighted restaurant suggestion.
//!
//! The random source is injected so callers and tests control the outcome.
//! Candidates are kept in sorted maps, so the same seed always picks the
//! same restaurant and dish.

use std::collections::BTreeMap;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::domain::{Order, Suggestion};

/// Pick a restaurant with probability proportional to how often it was
/// ordered from, then its most ordered dish (alphabetically first on ties).
///
/// Returns `None` when no order names a restaurant.
pub fn suggest_restaurant<R: Rng + ?Sized>(orders: &[Order], rng: &mut R) -> Option<Suggestion> {
    let mut visits: BTreeMap<&str, usize> = BTreeMap::new();
    let mut dishes: BTreeMap<&str, BTreeMap<&str, u32>> = BTreeMap::new();

    for order in orders {
        let restaurant = order.restaurant.trim();
        if restaurant.is_empty() {
            continue;
        }
        *visits.entry(restaurant).or_default() += 1;
        let menu = dishes.entry(restaurant).or_default();
        for item in &order.items {
            let name = item.name.trim();
            if !name.is_empty() {
                *menu.entry(name).or_default() += item.quantity.max(1);
            }
        }
    }

    let candidates: Vec<(&str, usize)> = visits.into_iter().collect();
    let weights = WeightedIndex::new(candidates.iter().map(|(_, count)| *count)).ok()?;
    let (restaurant, order_count) = candidates[weights.sample(rng)];

    let item = dishes.get(restaurant).and_then(|menu| {
        let mut favourite: Option<(&str, u32)> = None;
        for (name, quantity) in menu {
            if favourite.map_or(true, |(_, best)| *quantity > best) {
                favourite = Some((*name, *quantity));
            }
        }
        favourite.map(|(name, _)| name.to_string())
    });

    Some(Suggestion {
        restaurant: restaurant.to_string(),
        item,
        order_count,
    })
}
