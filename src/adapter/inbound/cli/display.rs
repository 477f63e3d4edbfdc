//! Presentation rules for order data.
//!
//! The data model keeps empty restaurants and unknown dates as-is; only
//! here do they turn into placeholders.

use chrono::{DateTime, Local};

use crate::application::analytics::UNKNOWN_RESTAURANT;
use crate::domain::OrderItem;

/// Shown for orders without a usable date.
pub const NO_DATE: &str = "-";

/// `Unknown` for an empty restaurant name.
#[must_use]
pub fn restaurant(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() {
        UNKNOWN_RESTAURANT
    } else {
        name
    }
}

/// `YYYY-MM-DD HH:MM`, or `-` when unknown.
#[must_use]
pub fn datetime(at: Option<DateTime<Local>>) -> String {
    at.map_or_else(
        || NO_DATE.to_string(),
        |at| at.format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// `YYYY-MM-DD`, or `-` when unknown.
#[must_use]
pub fn date(at: Option<DateTime<Local>>) -> String {
    at.map_or_else(|| NO_DATE.to_string(), |at| at.format("%Y-%m-%d").to_string())
}

/// Currency marker followed by the value with two decimals.
#[must_use]
pub fn money(currency: &str, value: f64) -> String {
    format!("{currency}{value:.2}")
}

/// Signed percentage with one decimal; exactly zero prints as `0%`.
#[must_use]
pub fn change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{percent:.1}%")
    } else if percent < 0.0 {
        format!("{percent:.1}%")
    } else {
        "0%".to_string()
    }
}

/// Percentage share with one decimal.
#[must_use]
pub fn share(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// `Dal, Naan x2` style listing for tables.
#[must_use]
pub fn items(items: &[OrderItem]) -> String {
    items
        .iter()
        .map(|item| {
            if item.quantity > 1 {
                format!("{} x{}", item.name, item.quantity)
            } else {
                item.name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Cut long names to `max` characters, ending in `...`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
