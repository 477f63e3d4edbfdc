//! Zomato order history integration.

pub mod client;
pub mod dto;
pub mod normalize;
pub mod settings;

pub use client::ZomatoClient;
pub use settings::ApiConfig;
