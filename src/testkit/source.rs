//! Mock [`OrderSource`] for pipeline tests.
//!
//! [`ScriptedSource`] serves pre-loaded pages in request order and records
//! which page numbers were asked for. Pages past the end of the script come
//! back empty with an unknown page count.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::Order;
use crate::error::{Error, Result};
use crate::port::outbound::{AuthStatus, OrderPage, OrderSource};

/// A source with scripted pages, failures and auth status.
pub struct ScriptedSource {
    pages: Vec<OrderPage>,
    failures: HashMap<u32, reqwest::StatusCode>,
    auth: AuthStatus,
    requested: Arc<Mutex<Vec<u32>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            failures: HashMap::new(),
            auth: AuthStatus::Authenticated,
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append the next page. `total_pages` is what the page reports upstream.
    pub fn page(mut self, total_pages: u32, orders: Vec<Order>) -> Self {
        self.pages.push(OrderPage {
            orders,
            total_pages,
        });
        self
    }

    /// Make `page` fail with the given HTTP status.
    pub fn fail_on(mut self, page: u32, status: reqwest::StatusCode) -> Self {
        self.failures.insert(page, status);
        self
    }

    pub fn with_auth(mut self, auth: AuthStatus) -> Self {
        self.auth = auth;
        self
    }

    /// Page numbers requested so far, in call order.
    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.lock().clone()
    }
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderSource for ScriptedSource {
    async fn fetch_page(&self, page: u32) -> Result<OrderPage> {
        self.requested.lock().push(page);
        if let Some(status) = self.failures.get(&page) {
            return Err(Error::UnexpectedStatus {
                context: "orders request",
                status: *status,
            });
        }
        let index = page.saturating_sub(1) as usize;
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }

    async fn check_auth(&self) -> Result<AuthStatus> {
        Ok(self.auth)
    }
}
