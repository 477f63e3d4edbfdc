//! zocli - food delivery order history and spending insights.
//!
//! Syncs a user's complete order history from the delivery service into a
//! local JSON cache, then answers questions about it offline.
//!
//! # Architecture
//!
//! - **`domain`** - orders, amounts and the value types analytics produce
//! - **`port`** - what the application needs from the outside
//!   - `OrderSource` - paginated order history plus a session probe
//!   - `OrderStore` - load/save of the whole collection
//! - **`application`** - the ingestion pipeline and pure analytics
//! - **`adapter`** - the HTTP client, JSON file store and the CLI
//! - **`infrastructure`** - configuration and logging
//!
//! # Example
//!
//! ```no_run
//! use zocli::adapter::outbound::sample::sample_orders;
//! use zocli::application::analytics::{compute_summary, group_orders, GroupMode};
//!
//! let orders = sample_orders().unwrap();
//! let summary = compute_summary(&orders);
//! let months = group_orders(&orders, GroupMode::Month);
//! println!("{} orders over {} months", summary.count, months.len());
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
