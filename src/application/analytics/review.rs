//! Year-in-review highlights.

use chrono::{Datelike, Local, TimeZone};

use crate::domain::{Order, YearInReview};

use super::distribution::{busiest, orders_by_time_window, orders_by_weekday};
use super::ranking::{top_items, top_restaurants};
use super::summary::{compute_summary, filter_orders_by_date, most_expensive_order};

/// Highlights for orders placed during `year` in local time.
#[must_use]
pub fn year_in_review(orders: &[Order], year: i32) -> YearInReview {
    let in_year = orders_in_year(orders, year);
    let expensive = most_expensive_order(&in_year);

    YearInReview {
        year,
        summary: compute_summary(&in_year),
        top_restaurant: top_restaurants(&in_year, 1).into_iter().next(),
        top_item: top_items(&in_year, 1).into_iter().next(),
        most_expensive: (expensive.amount > 0.0).then_some(expensive),
        busiest_weekday: busiest(&orders_by_weekday(&in_year)),
        busiest_time: busiest(&orders_by_time_window(&in_year)),
    }
}

/// Year of the most recent dated order, if any.
#[must_use]
pub fn latest_year(orders: &[Order]) -> Option<i32> {
    orders.iter().filter_map(|o| o.placed_at).max().map(|at| at.year())
}

fn orders_in_year(orders: &[Order], year: i32) -> Vec<Order> {
    let start = Local.with_ymd_and_hms(year, 1, 1, 0, 0, 0).earliest();
    let end = Local.with_ymd_and_hms(year, 12, 31, 23, 59, 59).latest();
    match (start, end) {
        (Some(start), Some(end)) => filter_orders_by_date(orders, start, end),
        // Out of chrono's range; fall back to comparing the year directly.
        _ => orders
            .iter()
            .filter(|o| o.placed_at.is_some_and(|at| at.year() == year))
            .cloned()
            .collect(),
    }
}
