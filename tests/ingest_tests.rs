//! Ingestion pipeline tests against a scripted source.

use std::time::Duration;

use reqwest::StatusCode;
use tokio::sync::watch;

use zocli::application::{FetchProgress, OrderIngestor, SyncOptions};
use zocli::error::Error;
use zocli::port::outbound::AuthStatus;
use zocli::testkit::{order, OrderFixture, ScriptedSource};

fn no_delay() -> SyncOptions {
    SyncOptions {
        page_delay: Duration::ZERO,
        max_pages: 50,
    }
}

fn ids(orders: &[zocli::domain::Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}

#[tokio::test]
async fn duplicates_across_pages_keep_first_occurrence() {
    let source = ScriptedSource::new()
        .page(2, vec![order("1").total("₹100"), order("2")])
        .page(2, vec![order("2").total("₹999"), order("3")]);
    let ingestor = OrderIngestor::with_options(source, no_delay());
    let (_tx, rx) = watch::channel(false);

    let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

    assert_eq!(ids(&orders), ["1", "2", "3"]);
    assert_eq!(orders[1].total, "");
}

#[tokio::test]
async fn page_with_no_new_orders_stops_even_when_more_pages_claimed() {
    let source = ScriptedSource::new()
        .page(10, vec![order("1"), order("2")])
        .page(10, vec![order("1"), order("2")])
        .page(10, vec![order("3")]);
    let ingestor = OrderIngestor::with_options(source, no_delay());
    let (_tx, rx) = watch::channel(false);

    let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

    assert_eq!(ids(&orders), ["1", "2"]);
    assert_eq!(ingestor.source().requested_pages(), vec![1, 2]);
}

#[tokio::test]
async fn unknown_page_count_stops_after_first_page() {
    let source = ScriptedSource::new().page(0, vec![order("1")]);
    let ingestor = OrderIngestor::with_options(source, no_delay());
    let (_tx, rx) = watch::channel(false);

    let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

    assert_eq!(ids(&orders), ["1"]);
    assert_eq!(ingestor.source().requested_pages(), vec![1]);
}

#[tokio::test]
async fn failure_on_later_page_returns_no_partial_data() {
    let source = ScriptedSource::new()
        .page(3, vec![order("1")])
        .page(3, vec![order("2")])
        .fail_on(2, StatusCode::INTERNAL_SERVER_ERROR);
    let ingestor = OrderIngestor::with_options(source, no_delay());
    let (_tx, rx) = watch::channel(false);

    let result = ingestor.fetch_all(rx, |_| {}).await;

    match result {
        Err(Error::UnexpectedStatus { status, .. }) => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(ingestor.source().requested_pages(), vec![1, 2]);
}

#[tokio::test]
async fn progress_reports_every_page_with_running_count() {
    let source = ScriptedSource::new()
        .page(3, vec![order("a"), order("b")])
        .page(3, vec![order("b"), order("c")])
        .page(3, vec![order("d")]);
    let ingestor = OrderIngestor::with_options(source, no_delay());
    let (_tx, rx) = watch::channel(false);

    let mut seen = Vec::new();
    ingestor.fetch_all(rx, |p| seen.push(p)).await.unwrap();

    let expected = [(1, 2), (2, 3), (3, 4)].map(|(page, total_orders)| FetchProgress {
        page,
        total_pages: 3,
        total_orders,
    });
    assert_eq!(seen, expected);
}

#[tokio::test(start_paused = true)]
async fn pages_are_spaced_by_the_configured_delay() {
    let source = ScriptedSource::new()
        .page(3, vec![order("1")])
        .page(3, vec![order("2")])
        .page(3, vec![order("3")]);
    let options = SyncOptions {
        page_delay: Duration::from_millis(500),
        max_pages: 50,
    };
    let ingestor = OrderIngestor::with_options(source, options);
    let (_tx, rx) = watch::channel(false);

    let started = tokio::time::Instant::now();
    let orders = ingestor.fetch_all(rx, |_| {}).await.unwrap();

    assert_eq!(orders.len(), 3);
    // Two pauses between three pages; none after the last.
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1000), "{elapsed:?}");
    assert!(elapsed < Duration::from_millis(1500), "{elapsed:?}");
}

#[tokio::test]
async fn auth_check_passes_through_source() {
    let ingestor = OrderIngestor::new(ScriptedSource::new().with_auth(AuthStatus::Unauthenticated));

    let status = ingestor.check_auth().await.unwrap();

    assert!(!status.is_authenticated());
}
