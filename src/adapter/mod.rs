//! Hexagonal adapters: the CLI drives the application, the outbound side
//! implements its ports.

pub mod inbound;
pub mod outbound;
