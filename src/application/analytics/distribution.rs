//! Weekday and time-of-day distributions.
//!
//! Only dated orders take part; undated orders are left out of both the
//! buckets and the percentage denominator.

use chrono::{Datelike, Timelike, Weekday};

use crate::domain::{parse_amount, Bucket, Order, SpendBucket};

/// Monday-first week.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A labelled `[start, end)` range of clock hours.
#[derive(Debug, Clone, Copy)]
pub struct TimeWindow {
    pub label: &'static str,
    pub start: u32,
    pub end: u32,
}

pub const TIME_WINDOWS: [TimeWindow; 4] = [
    TimeWindow {
        label: "Late night (00-05)",
        start: 0,
        end: 6,
    },
    TimeWindow {
        label: "Morning (06-11)",
        start: 6,
        end: 12,
    },
    TimeWindow {
        label: "Afternoon (12-17)",
        start: 12,
        end: 18,
    },
    TimeWindow {
        label: "Evening (18-23)",
        start: 18,
        end: 24,
    },
];

/// Full English day name ("Monday").
#[must_use]
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `value / total` as a percentage; 0 when `total` is 0.
#[must_use]
pub fn percent(value: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 / total as f64 * 100.0
    }
}

/// Order counts per weekday, always seven buckets starting Monday.
#[must_use]
pub fn orders_by_weekday(orders: &[Order]) -> Vec<Bucket> {
    let mut counts = [0usize; 7];
    for at in orders.iter().filter_map(|o| o.placed_at) {
        counts[at.weekday().num_days_from_monday() as usize] += 1;
    }
    let total: usize = counts.iter().sum();

    WEEKDAYS
        .iter()
        .zip(counts)
        .map(|(day, count)| Bucket {
            key: weekday_name(*day).to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Order counts per time window, always four buckets.
#[must_use]
pub fn orders_by_time_window(orders: &[Order]) -> Vec<Bucket> {
    let mut counts = [0usize; TIME_WINDOWS.len()];
    for at in orders.iter().filter_map(|o| o.placed_at) {
        let hour = at.hour();
        if let Some(index) = TIME_WINDOWS
            .iter()
            .position(|w| hour >= w.start && hour < w.end)
        {
            counts[index] += 1;
        }
    }
    let total: usize = counts.iter().sum();

    TIME_WINDOWS
        .iter()
        .zip(counts)
        .map(|(window, count)| Bucket {
            key: window.label.to_string(),
            count,
            percent: percent(count, total),
        })
        .collect()
}

/// Count, spend and average spend per weekday, Monday first.
#[must_use]
pub fn spend_by_weekday(orders: &[Order]) -> Vec<SpendBucket> {
    let mut buckets: Vec<SpendBucket> = WEEKDAYS
        .iter()
        .map(|day| SpendBucket {
            key: weekday_name(*day).to_string(),
            count: 0,
            total: 0.0,
            average: 0.0,
        })
        .collect();

    for order in orders {
        let Some(at) = order.placed_at else { continue };
        let (amount, _) = parse_amount(&order.total);
        let bucket = &mut buckets[at.weekday().num_days_from_monday() as usize];
        bucket.count += 1;
        bucket.total += amount;
    }

    for bucket in &mut buckets {
        if bucket.count > 0 {
            bucket.average = bucket.total / bucket.count as f64;
        }
    }
    buckets
}

/// Key of the first bucket holding the largest non-zero count.
#[must_use]
pub fn busiest(buckets: &[Bucket]) -> Option<String> {
    let mut best: Option<&Bucket> = None;
    for bucket in buckets {
        if bucket.count > best.map_or(0, |b| b.count) {
            best = Some(bucket);
        }
    }
    best.map(|b| b.key.clone())
}
