//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the upstream order history API and local storage.

pub mod source;
pub mod store;

pub use source::{AuthStatus, OrderPage, OrderSource};
pub use store::OrderStore;
