//! Outbound adapters (driven side).

pub mod export;
pub mod json_store;
pub mod sample;
pub mod zomato;

pub use json_store::JsonOrderStore;
