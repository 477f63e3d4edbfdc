//! Upstream-agnostic order model and derived analytics values.

pub mod money;
pub mod order;
pub mod stats;

pub use money::{normalize_currency, parse_amount, round2, RUPEE};
pub use order::{Order, OrderItem};
pub use stats::{
    Bucket, ExpensiveOrder, InflationTrend, ItemPricePoint, PeriodGroup, SpendBucket, Suggestion,
    Summary, YearInReview,
};
