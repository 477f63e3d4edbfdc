//! Analytics result types.
//!
//! Everything here is derived from an order collection on demand and
//! discarded after display. Nothing in this module is persisted.

use chrono::{DateTime, Local};
use serde::Serialize;

use super::order::Order;

/// Overall totals for an order collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total: f64,
    pub average: f64,
    /// First non-empty currency marker encountered.
    pub currency: String,
    pub earliest: Option<DateTime<Local>>,
    pub latest: Option<DateTime<Local>>,
}

/// Orders aggregated under one period key ("Mar 2024", "2024", "all", "unknown").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodGroup {
    pub key: String,
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

/// A counted bucket with its share of the whole, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket {
    pub key: String,
    pub count: usize,
    pub percent: f64,
}

/// A bucket that also carries spend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendBucket {
    pub key: String,
    pub count: usize,
    pub total: f64,
    pub average: f64,
}

/// One eligible price observation for a single-item order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemPricePoint {
    pub order_id: String,
    pub restaurant: String,
    pub item: String,
    pub placed_at: Option<DateTime<Local>>,
    pub quantity: u32,
    pub order_total: f64,
    pub unit_price: f64,
    pub currency: String,
    /// Percent change versus the previous point at the same restaurant; 0 for the first.
    pub change: f64,
}

/// Price movement of one item at one restaurant across at least two observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InflationTrend {
    pub restaurant: String,
    pub item: String,
    pub observations: usize,
    pub first_seen: Option<DateTime<Local>>,
    pub first_price: f64,
    pub last_price: f64,
    pub total_change: f64,
    pub currency: String,
}

impl InflationTrend {
    /// Display key, "Restaurant - Item".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.restaurant, self.item)
    }
}

/// A suggested restaurant and its most ordered dish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub restaurant: String,
    pub item: Option<String>,
    /// How many times the restaurant appears in history.
    pub order_count: usize,
}

/// Year-in-review highlights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearInReview {
    pub year: i32,
    pub summary: Summary,
    pub top_restaurant: Option<Bucket>,
    pub top_item: Option<Bucket>,
    pub most_expensive: Option<ExpensiveOrder>,
    pub busiest_weekday: Option<String>,
    pub busiest_time: Option<String>,
}

/// The priciest order in a collection, with its parsed amount.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpensiveOrder {
    pub order: Order,
    pub amount: f64,
}
