//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!                 ┌─────────────────────────┐
//!                 │       Application       │
//!                 │  (ingest, analytics)    │
//!                 └───────────┬─────────────┘
//!               ┌─────────────┴─────────────┐
//!               ▼                           ▼
//!        ┌─────────────┐             ┌─────────────┐
//!        │ OrderSource │             │ OrderStore  │
//!        │ (HTTP, mock)│             │ (JSON file) │
//!        └─────────────┘             └─────────────┘
//! ```

pub mod outbound;

pub use outbound::{AuthStatus, OrderPage, OrderSource, OrderStore};
