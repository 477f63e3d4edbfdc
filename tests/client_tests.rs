//! HTTP client tests against a local responder on 127.0.0.1.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::watch;

use zocli::adapter::outbound::zomato::ZomatoClient;
use zocli::application::{OrderIngestor, SyncOptions};
use zocli::error::Error;
use zocli::port::outbound::{AuthStatus, OrderSource};

type Route = Arc<dyn Fn(&str) -> (u16, String) + Send + Sync>;

/// Serves one canned response per connection and records each request head.
struct Responder {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl Responder {
    async fn start(route: Route) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let route = Arc::clone(&route);
                let seen = Arc::clone(&seen);
                tokio::spawn(async move {
                    let head = read_head(&mut socket).await;
                    let target = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    seen.lock().push(head);

                    let (status, body) = route(&target);
                    let response = format!(
                        "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Self { base_url, requests }
    }

    fn client(&self) -> ZomatoClient {
        ZomatoClient::new(&self.base_url, "cid=abc; zat=secret").unwrap()
    }

    fn request_targets(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .filter_map(|head| head.lines().next())
            .filter_map(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .collect()
    }
}

async fn read_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut buf).await {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    String::from_utf8_lossy(&data).into_owned()
}

/// (id, restaurant, date, dishes, total)
type RawOrder<'a> = (i64, &'a str, &'a str, &'a str, &'a str);

fn page_body(total_pages: i64, orders: &[RawOrder<'_>]) -> String {
    let ids: Vec<i64> = orders.iter().map(|o| o.0).collect();
    let entities: serde_json::Map<String, serde_json::Value> = orders
        .iter()
        .map(|(id, restaurant, date, dishes, total)| {
            (
                id.to_string(),
                json!({
                    "orderId": id,
                    "totalCost": total,
                    "orderDate": date,
                    "dishString": dishes,
                    "deliveryDetails": {"deliveryLabel": "Delivered"},
                    "resInfo": {"name": restaurant},
                }),
            )
        })
        .collect();

    json!({
        "sections": {"SECTION_USER_ORDER_HISTORY": {
            "count": orders.len(),
            "currentPage": 1,
            "totalPages": total_pages,
            "entities": [{"entity_type": "ORDER", "entity_ids": ids}],
        }},
        "entities": {"ORDER": entities},
    })
    .to_string()
}

fn two_page_history() -> Route {
    Arc::new(|target: &str| {
        if target.ends_with("page=2") {
            let body = page_body(
                2,
                &[
                    (102, "Chaayos", "2024-01-10 09:00", "1 x Masala Chai", "₹90"),
                    (103, "Dosa Point", "2024-01-05 13:15", "Masala Dosa", "₹140"),
                ],
            );
            (200, body)
        } else {
            let body = page_body(
                2,
                &[
                    (101, "Biryani Blues", "2024-01-15 19:30", "2 x Chicken Biryani, 1 x Raita", "₹640"),
                    (102, "Chaayos", "2024-01-10 09:00", "1 x Masala Chai", "₹90"),
                ],
            );
            (200, body)
        }
    })
}

#[tokio::test]
async fn fetch_page_normalizes_orders_in_section_order() {
    let responder = Responder::start(two_page_history()).await;

    let page = responder.client().fetch_page(1).await.unwrap();

    assert_eq!(page.total_pages, 2);
    let ids: Vec<_> = page.orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["101", "102"]);

    let first = &page.orders[0];
    assert_eq!(first.restaurant, "Biryani Blues");
    assert_eq!(first.status, "Delivered");
    assert_eq!(first.total, "₹640");
    assert!(first.placed_at.is_some());
    let items: Vec<_> = first
        .items
        .iter()
        .map(|i| (i.name.as_str(), i.quantity))
        .collect();
    assert_eq!(items, [("Chicken Biryani", 2), ("Raita", 1)]);
}

#[tokio::test]
async fn requests_carry_session_and_ajax_headers() {
    let responder = Responder::start(two_page_history()).await;

    responder.client().fetch_page(1).await.unwrap();

    let head = responder.requests.lock()[0].to_lowercase();
    assert!(head.starts_with("get /webroutes/user/orders http/1.1"));
    assert!(head.contains("cookie: cid=abc; zat=secret"));
    assert!(head.contains("x-requested-with: xmlhttprequest"));
    assert!(head.contains("accept: application/json"));
    assert!(head.contains("user-agent: mozilla/5.0"));
}

#[tokio::test]
async fn ingestor_walks_pages_and_deduplicates() {
    let responder = Responder::start(two_page_history()).await;
    let options = SyncOptions {
        page_delay: Duration::ZERO,
        max_pages: 50,
    };
    let ingestor = OrderIngestor::with_options(responder.client(), options);
    let (_tx, rx) = watch::channel(false);

    let mut progress = Vec::new();
    let orders = ingestor
        .fetch_all(rx, |p| progress.push((p.page, p.total_pages, p.total_orders)))
        .await
        .unwrap();

    let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, ["101", "102", "103"]);
    assert_eq!(progress, [(1, 2, 2), (2, 2, 3)]);
    assert_eq!(
        responder.request_targets(),
        ["/webroutes/user/orders", "/webroutes/user/orders?page=2"]
    );
}

#[tokio::test]
async fn server_error_fails_the_page() {
    let responder = Responder::start(Arc::new(|_: &str| (500, "{}".to_string()))).await;

    let err = responder.client().fetch_page(1).await.unwrap_err();

    assert!(matches!(
        err,
        Error::UnexpectedStatus { status, .. } if status.as_u16() == 500
    ));
}

#[tokio::test]
async fn malformed_payload_is_a_transport_error() {
    let responder = Responder::start(Arc::new(|_: &str| (200, "<html>".to_string()))).await;

    let err = responder.client().fetch_page(1).await.unwrap_err();

    assert!(matches!(err, Error::Http(_)));
}

#[tokio::test]
async fn auth_probe_maps_status_codes() {
    for (code, expected) in [
        (200, Some(AuthStatus::Authenticated)),
        (401, Some(AuthStatus::Unauthenticated)),
        (403, Some(AuthStatus::Unauthenticated)),
        (502, None),
    ] {
        let responder = Responder::start(Arc::new(move |_: &str| (code, "{}".to_string()))).await;

        let result = responder.client().check_auth().await;

        match expected {
            Some(status) => assert_eq!(result.unwrap(), status, "status {code}"),
            None => assert!(
                matches!(result, Err(Error::UnexpectedStatus { .. })),
                "status {code}"
            ),
        }
        let targets = responder.request_targets();
        assert_eq!(targets, ["/webroutes/user/address"]);
    }
}
