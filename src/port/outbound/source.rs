//! Upstream order history port.
//!
//! The ingestion pipeline drives pagination through this trait; the HTTP
//! adapter and the test scripted source both implement it.

use async_trait::async_trait;

use crate::domain::Order;
use crate::error::Result;

/// One page of normalized orders as reported by the upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPage {
    /// Orders in upstream order. May repeat ids seen on earlier pages.
    pub orders: Vec<Order>,
    /// Total page count reported upstream; 0 when unknown.
    pub total_pages: u32,
}

/// Outcome of a session check. An invalid session is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    #[must_use]
    pub fn is_authenticated(self) -> bool {
        matches!(self, AuthStatus::Authenticated)
    }
}

/// A paginated source of order history.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch and normalize one page. Pages are 1-based.
    async fn fetch_page(&self, page: u32) -> Result<OrderPage>;

    /// Probe whether the configured session is accepted upstream.
    async fn check_auth(&self) -> Result<AuthStatus>;
}
