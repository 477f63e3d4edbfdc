//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Order builders and a local-time helper.
//! - [`source`] - [`ScriptedSource`], a mock upstream with scripted pages.
//! - [`store`] - [`MemoryOrderStore`], an in-memory order store.

pub mod domain;
pub mod source;
pub mod store;

pub use domain::{at, dated_order, order, single_item, OrderFixture};
pub use source::ScriptedSource;
pub use store::MemoryOrderStore;
