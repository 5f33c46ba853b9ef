//! Shared fixtures for the integration tests.
//!
//! [`MockTransport`] answers requests from a fixed routing table and records
//! every request it sees, so tests can assert both what a stream yielded and
//! what was sent to produce it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use lemon_markets_rs::client::{Request, Transport};
use lemon_markets_rs::{ApiError, ClientConfig, Error, LemonClient, Result};

/// Base URL used for absolute cursor locators in fixtures.
pub const BASE: &str = "https://mock.lemon.test/v1";

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A scripted response.
#[derive(Debug, Clone)]
pub enum Reply {
    /// 2xx with a JSON body
    Json(Value),
    /// 2xx with a raw body
    Raw(&'static str),
    /// Structured domain error
    Domain {
        code: &'static str,
        message: &'static str,
    },
    /// Unexpected HTTP status
    Status(u16),
    /// Answer with the inner reply after a delay
    Slow(Duration, Box<Reply>),
}

/// In-memory [`Transport`] with a fixed routing table.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, Reply>,
    requests: Mutex<Vec<Request>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer requests for `key` (target plus `?query` if any) with `reply`.
    pub fn with(mut self, key: impl Into<String>, reply: Reply) -> Self {
        self.routes.insert(key.into(), reply);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Every request received so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Routing keys of every request received so far.
    pub fn keys(&self) -> Vec<String> {
        self.requests().iter().map(route_key).collect()
    }
}

pub fn route_key(request: &Request) -> String {
    if request.query.is_empty() {
        request.target.clone()
    } else {
        format!("{}?{}", request.target, request.query.to_query_string())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: &Request) -> Result<Bytes> {
        self.requests.lock().unwrap().push(request.clone());

        let key = route_key(request);
        let mut reply = match self.routes.get(&key) {
            Some(reply) => reply.clone(),
            None => {
                return Err(Error::Status {
                    status: 404,
                    body: format!("no route for {key}"),
                })
            }
        };

        loop {
            match reply {
                Reply::Slow(delay, inner) => {
                    tokio::time::sleep(delay).await;
                    reply = *inner;
                }
                Reply::Json(value) => return Ok(Bytes::from(serde_json::to_vec(&value)?)),
                Reply::Raw(body) => return Ok(Bytes::from_static(body.as_bytes())),
                Reply::Domain { code, message } => {
                    return Err(Error::Api(ApiError {
                        time: None,
                        mode: "paper".into(),
                        status: "error".into(),
                        code: code.into(),
                        message: message.into(),
                    }))
                }
                Reply::Status(status) => {
                    return Err(Error::Status {
                        status,
                        body: String::new(),
                    })
                }
            }
        }
    }
}

/// A list page. `next` is the absolute locator of the following page.
pub fn page(results: Value, next: Option<&str>, page: u64, pages: u64) -> Reply {
    Reply::Json(json!({
        "time": "2021-11-21T19:34:45.071+00:00",
        "status": "ok",
        "mode": "paper",
        "previous": null,
        "next": next,
        "total": 0,
        "page": page,
        "pages": pages,
        "results": results
    }))
}

/// A single-resource envelope.
pub fn single(result: Value) -> Reply {
    Reply::Json(json!({
        "time": "2021-11-21T19:34:45.071+00:00",
        "status": "ok",
        "mode": "paper",
        "results": result
    }))
}

/// Absolute locator for `path` under [`BASE`].
pub fn locator(path: &str) -> String {
    format!("{BASE}/{path}")
}

/// A client whose services talk to the given mocks.
pub fn client(
    trading: Arc<MockTransport>,
    market_data: Arc<MockTransport>,
    streaming: Arc<MockTransport>,
) -> LemonClient {
    init_logging();
    LemonClient::with_transports(trading, market_data, streaming, ClientConfig::default())
}

pub fn position(isin: &str, quantity: i64) -> Value {
    json!({
        "isin": isin,
        "isin_title": "TEST INSTRUMENT",
        "quantity": quantity,
        "buy_price_avg": 1000000,
        "estimated_price_total": 1000000 * quantity,
        "estimated_price": 1000000
    })
}

pub fn order(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "isin": "US88160R1014",
        "isin_title": "TESLA INC.",
        "created_at": "2021-11-15T13:42:34.549+00:00",
        "expires_at": "2021-11-22T22:59:00.000+00:00",
        "side": "buy",
        "quantity": 1,
        "venue": "xmun",
        "status": status,
        "type": "market",
        "estimated_price": 9210000
    })
}
