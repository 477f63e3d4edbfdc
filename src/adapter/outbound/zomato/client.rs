//! Zomato web API client.
//!
//! Talks to the same JSON routes the website uses, authenticated by the
//! browser session cookie:
//! - `/webroutes/user/orders` - paginated order history
//! - `/webroutes/user/address` - cheap authenticated probe for `check_auth`

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, USER_AGENT};
use reqwest::{Client as HttpClient, StatusCode};
use tracing::{debug, info, warn};
use url::Url;

use super::dto::OrdersResponse;
use super::normalize::page_from_response;
use super::settings::ApiConfig;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::{AuthStatus, OrderPage, OrderSource};

const ORDERS_PATH: &str = "/webroutes/user/orders";
const AUTH_PATH: &str = "/webroutes/user/address";

const ACCEPT_VALUE: &str = "application/json, text/plain, */*";
const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";
const REQUESTED_WITH: &str = "X-Requested-With";

/// HTTP client for the order history routes.
pub struct ZomatoClient {
    http: HttpClient,
    base_url: Url,
    cookie: String,
}

impl ZomatoClient {
    /// Create a client with default HTTP settings.
    pub fn new(base_url: &str, cookie: impl Into<String>) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
            cookie: cookie.into(),
        })
    }

    pub fn from_config(config: &ApiConfig, cookie: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            cookie: cookie.into(),
        })
    }

    /// Orders URL for a 1-based page. Page 1 carries no query parameter.
    pub fn orders_url(&self, page: u32) -> Result<Url> {
        let mut url = self.base_url.join(ORDERS_PATH)?;
        if page > 1 {
            url.query_pairs_mut().append_pair("page", &page.to_string());
        }
        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let cookie = HeaderValue::from_str(&self.cookie).map_err(|err| {
            Error::Config(ConfigError::InvalidValue {
                field: "session.cookie",
                reason: err.to_string(),
            })
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, cookie);
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(REQUESTED_WITH, HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        Ok(headers)
    }

    async fn get(&self, url: Url) -> Result<reqwest::Response> {
        let response = self.http.get(url).headers(self.headers()?).send().await?;
        Ok(response)
    }
}

/// Map the auth probe's status code. Only 401 and 403 mean "signed out".
pub fn auth_status_from(status: StatusCode) -> Result<AuthStatus> {
    match status {
        StatusCode::OK => Ok(AuthStatus::Authenticated),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(AuthStatus::Unauthenticated),
        status => Err(Error::UnexpectedStatus {
            context: "auth status request",
            status,
        }),
    }
}

#[async_trait]
impl OrderSource for ZomatoClient {
    async fn fetch_page(&self, page: u32) -> Result<OrderPage> {
        let url = self.orders_url(page)?;
        debug!(page, url = %url, "Fetching orders page");

        let response = self.get(url).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::UnexpectedStatus {
                context: "orders request",
                status,
            });
        }

        let body: OrdersResponse = response.json().await?;
        let page = page_from_response(body);
        debug!(
            orders = page.orders.len(),
            total_pages = page.total_pages,
            "Decoded orders page"
        );
        Ok(page)
    }

    async fn check_auth(&self) -> Result<AuthStatus> {
        let url = self.base_url.join(AUTH_PATH)?;
        let response = self.get(url).await?;
        let status = response.status();
        info!(status = status.as_u16(), "Auth probe answered");
        auth_status_from(status)
    }
}
