//! Totals, period grouping and range filtering.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate};

use crate::domain::{parse_amount, ExpensiveOrder, Order, PeriodGroup, Summary};
use crate::error::AnalyticsError;

/// Key for the single bucket produced by [`GroupMode::None`].
pub const ALL_KEY: &str = "all";

/// Key for orders without a usable timestamp. Always sorted last.
pub const UNKNOWN_KEY: &str = "unknown";

const MONTH_KEY_FORMAT: &str = "%b %Y";
const YEAR_KEY_FORMAT: &str = "%Y";

/// How orders are bucketed by [`group_orders`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupMode {
    None,
    #[default]
    Month,
    Year,
}

impl GroupMode {
    fn key(self, placed_at: Option<DateTime<Local>>) -> String {
        match (self, placed_at) {
            (GroupMode::None, _) => ALL_KEY.to_string(),
            (_, None) => UNKNOWN_KEY.to_string(),
            (GroupMode::Month, Some(at)) => at.format(MONTH_KEY_FORMAT).to_string(),
            (GroupMode::Year, Some(at)) => at.format(YEAR_KEY_FORMAT).to_string(),
        }
    }

    /// Reparse a key produced by [`GroupMode::key`] into a sortable date.
    fn parse_key(self, key: &str) -> Option<NaiveDate> {
        match self {
            GroupMode::None => None,
            GroupMode::Month => NaiveDate::parse_from_str(&format!("1 {key}"), "%d %b %Y").ok(),
            GroupMode::Year => key
                .parse::<i32>()
                .ok()
                .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1)),
        }
    }
}

impl FromStr for GroupMode {
    type Err = AnalyticsError;

    /// Accepts `none`, `month` or `year`, case-insensitively. Blank means `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(GroupMode::None),
            "month" => Ok(GroupMode::Month),
            "year" => Ok(GroupMode::Year),
            _ => Err(AnalyticsError::InvalidGroupMode(s.trim().to_string())),
        }
    }
}

impl fmt::Display for GroupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GroupMode::None => "none",
            GroupMode::Month => "month",
            GroupMode::Year => "year",
        })
    }
}

/// Count, spend and date range of a collection.
///
/// Unparseable totals contribute zero. The currency is the first non-empty
/// marker seen, not the most common one.
#[must_use]
pub fn compute_summary(orders: &[Order]) -> Summary {
    let mut summary = Summary {
        count: orders.len(),
        ..Summary::default()
    };

    for order in orders {
        let (amount, currency) = parse_amount(&order.total);
        summary.total += amount;
        if summary.currency.is_empty() && !currency.is_empty() {
            summary.currency = currency;
        }
        if let Some(at) = order.placed_at {
            if summary.earliest.map_or(true, |earliest| at < earliest) {
                summary.earliest = Some(at);
            }
            if summary.latest.map_or(true, |latest| at > latest) {
                summary.latest = Some(at);
            }
        }
    }

    if summary.count > 0 {
        summary.average = summary.total / summary.count as f64;
    }
    summary
}

/// Bucket orders by period, oldest first with `unknown` last.
///
/// Aggregation does not depend on input order.
#[must_use]
pub fn group_orders(orders: &[Order], mode: GroupMode) -> Vec<PeriodGroup> {
    let mut groups: HashMap<String, PeriodGroup> = HashMap::new();
    for order in orders {
        let key = mode.key(order.placed_at);
        let (amount, _) = parse_amount(&order.total);
        let entry = groups.entry(key.clone()).or_insert_with(|| PeriodGroup {
            key,
            count: 0,
            total: 0.0,
            average: 0.0,
        });
        entry.count += 1;
        entry.total += amount;
    }

    let mut out: Vec<PeriodGroup> = groups
        .into_values()
        .map(|mut group| {
            group.average = group.total / group.count as f64;
            group
        })
        .collect();
    out.sort_by(|a, b| compare_keys(mode, &a.key, &b.key));
    out
}

/// Same as [`group_orders`] but takes the mode as user text.
pub fn group_orders_by(orders: &[Order], mode: &str) -> Result<Vec<PeriodGroup>, AnalyticsError> {
    let mode: GroupMode = mode.parse()?;
    Ok(group_orders(orders, mode))
}

fn compare_keys(mode: GroupMode, a: &str, b: &str) -> Ordering {
    match (a == UNKNOWN_KEY, b == UNKNOWN_KEY) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    match (mode.parse_key(a), mode.parse_key(b)) {
        (Some(left), Some(right)) if left != right => left.cmp(&right),
        _ => a.cmp(b),
    }
}

/// Orders placed within `[start, end]`. Undated orders are dropped.
#[must_use]
pub fn filter_orders_by_date(
    orders: &[Order],
    start: DateTime<Local>,
    end: DateTime<Local>,
) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| {
            order
                .placed_at
                .is_some_and(|at| at >= start && at <= end)
        })
        .cloned()
        .collect()
}

/// The order with the strictly largest parsed total; the first one wins ties.
///
/// An empty collection, or one where nothing parses above zero, yields a
/// default order and an amount of 0.
#[must_use]
pub fn most_expensive_order(orders: &[Order]) -> ExpensiveOrder {
    let mut best = ExpensiveOrder {
        order: Order::default(),
        amount: 0.0,
    };
    for order in orders {
        let (amount, _) = parse_amount(&order.total);
        if amount > best.amount {
            best = ExpensiveOrder {
                order: order.clone(),
                amount,
            };
        }
    }
    best
}
