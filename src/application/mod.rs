//! Application services (use cases).
//!
//! These services orchestrate domain logic and the outbound ports: ingestion
//! drives an [`OrderSource`](crate::port::OrderSource), analytics reads the
//! collection an [`OrderStore`](crate::port::OrderStore) hands back.

pub mod analytics;
pub mod ingest;

pub use ingest::{FetchProgress, OrderIngestor, SyncOptions};
