//! Paginated order ingestion.
//!
//! Drives an [`OrderSource`] page by page, deduplicating orders by id and
//! stopping on the first of:
//!
//! ```text
//! page adds no new ids ──┐
//! total pages reached ───┼──> stop
//! page ceiling reached ──┘
//! ```
//!
//! Pages are fetched strictly one after another with a fixed pause between
//! them. Any page failure aborts the whole fetch; nothing partial is returned.

use std::collections::HashSet;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{debug, info};

use crate::domain::Order;
use crate::error::{Error, Result};
use crate::port::outbound::{AuthStatus, OrderSource};

/// Default pause between page requests.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(500);

/// Default hard ceiling on the number of pages requested.
pub const DEFAULT_MAX_PAGES: u32 = 50;

/// Pagination tuning for one ingestion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    pub page_delay: Duration,
    pub max_pages: u32,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            page_delay: DEFAULT_PAGE_DELAY,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Reported after every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub page: u32,
    /// 0 when the upstream did not report a page count.
    pub total_pages: u32,
    /// Distinct orders collected so far.
    pub total_orders: usize,
}

/// Why pagination ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StopReason {
    CaughtUp,
    LastPage,
    PageCeiling,
}

/// Collects the complete order history from a source.
pub struct OrderIngestor<S> {
    source: S,
    options: SyncOptions,
}

impl<S: OrderSource> OrderIngestor<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, SyncOptions::default())
    }

    pub fn with_options(source: S, options: SyncOptions) -> Self {
        Self { source, options }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Probe the upstream session.
    pub async fn check_auth(&self) -> Result<AuthStatus> {
        self.source.check_auth().await
    }

    /// Fetch every page and return the distinct orders in first-seen order.
    ///
    /// `on_progress` runs synchronously after each page. Setting `shutdown`
    /// to `true` aborts the in-flight request or pause with [`Error::Cancelled`].
    pub async fn fetch_all<F>(
        &self,
        mut shutdown: watch::Receiver<bool>,
        mut on_progress: F,
    ) -> Result<Vec<Order>>
    where
        F: FnMut(FetchProgress),
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut orders: Vec<Order> = Vec::new();
        let mut page: u32 = 1;

        loop {
            if *shutdown.borrow() {
                return Err(Error::Cancelled);
            }

            debug!(page, "Requesting order page");
            let fetched = tokio::select! {
                biased;
                _ = cancelled(&mut shutdown) => return Err(Error::Cancelled),
                result = self.source.fetch_page(page) => result?,
            };

            let mut new_orders = 0usize;
            for order in fetched.orders {
                if order.id.is_empty() || seen.contains(&order.id) {
                    continue;
                }
                seen.insert(order.id.clone());
                orders.push(order);
                new_orders += 1;
            }

            let total_pages = fetched.total_pages;
            info!(
                page,
                total_pages,
                new_orders,
                total_orders = orders.len(),
                "Fetched order page"
            );
            on_progress(FetchProgress {
                page,
                total_pages,
                total_orders: orders.len(),
            });

            if let Some(reason) = self.stop_reason(page, total_pages, new_orders) {
                debug!(page, ?reason, "Pagination finished");
                break;
            }

            if !self.options.page_delay.is_zero() {
                tokio::select! {
                    biased;
                    _ = cancelled(&mut shutdown) => return Err(Error::Cancelled),
                    _ = tokio::time::sleep(self.options.page_delay) => {}
                }
            }
            page += 1;
        }

        Ok(orders)
    }

    fn stop_reason(&self, page: u32, total_pages: u32, new_orders: usize) -> Option<StopReason> {
        if new_orders == 0 {
            Some(StopReason::CaughtUp)
        } else if total_pages == 0 || page >= total_pages {
            Some(StopReason::LastPage)
        } else if page >= self.options.max_pages {
            Some(StopReason::PageCeiling)
        } else {
            None
        }
    }
}

/// Resolves once the shutdown flag reads `true`. Never resolves if the sender is gone.
async fn cancelled(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{order, ScriptedSource};

    fn quick() -> SyncOptions {
        SyncOptions {
            page_delay: Duration::ZERO,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    #[tokio::test]
    async fn single_page_with_unknown_total_stops() {
        let source = ScriptedSource::new().page(0, vec![order("1"), order("2")]);
        let ingestor = OrderIngestor::with_options(source, quick());
        let (_tx, rx) = watch::channel(false);

        let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(ingestor.source().requested_pages(), vec![1]);
    }

    #[tokio::test]
    async fn empty_ids_are_skipped() {
        let source = ScriptedSource::new().page(1, vec![order(""), order("9")]);
        let ingestor = OrderIngestor::with_options(source, quick());
        let (_tx, rx) = watch::channel(false);

        let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

        assert_eq!(orders.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(), ["9"]);
    }

    #[tokio::test]
    async fn page_ceiling_bounds_runaway_totals() {
        let mut source = ScriptedSource::new();
        for page in 1..=5 {
            source = source.page(1000, vec![order(&format!("id-{page}"))]);
        }
        let options = SyncOptions {
            page_delay: Duration::ZERO,
            max_pages: 3,
        };
        let ingestor = OrderIngestor::with_options(source, options);
        let (_tx, rx) = watch::channel(false);

        let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

        assert_eq!(orders.len(), 3);
        assert_eq!(ingestor.source().requested_pages(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn already_cancelled_fetches_nothing() {
        let source = ScriptedSource::new().page(2, vec![order("1")]);
        let ingestor = OrderIngestor::with_options(source, quick());
        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let err = ingestor.fetch_all(rx, |_| {}).await.unwrap_err();

        assert!(matches!(err, Error::Cancelled));
        assert!(ingestor.source().requested_pages().is_empty());
    }

    #[tokio::test]
    async fn cancel_during_pause_stops_before_next_page() {
        let source = ScriptedSource::new()
            .page(3, vec![order("1")])
            .page(3, vec![order("2")]);
        let options = SyncOptions {
            page_delay: Duration::from_secs(30),
            max_pages: DEFAULT_MAX_PAGES,
        };
        let ingestor = OrderIngestor::with_options(source, options);
        let (tx, rx) = watch::channel(false);

        let result = ingestor
            .fetch_all(rx, move |_| {
                let _ = tx.send(true);
            })
            .await;

        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(ingestor.source().requested_pages(), vec![1]);
    }
}
