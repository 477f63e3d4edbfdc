//! Analytics over a borrowed order collection.
//!
//! Every function here is pure: it reads the orders, returns fresh values
//! and keeps nothing afterwards.

pub mod distribution;
pub mod inflation;
pub mod ranking;
pub mod review;
pub mod suggest;
pub mod summary;

pub use distribution::{
    busiest, orders_by_time_window, orders_by_weekday, spend_by_weekday, weekday_name,
};
pub use inflation::{calculate_inflation, find_top_inflation_trends};
pub use ranking::{top_items, top_restaurants, DEFAULT_TOP_LIMIT, UNKNOWN_RESTAURANT};
pub use review::{latest_year, year_in_review};
pub use suggest::suggest_restaurant;
pub use summary::{
    compute_summary, filter_orders_by_date, group_orders, group_orders_by, most_expensive_order,
    GroupMode,
};
