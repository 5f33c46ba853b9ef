//! Positions service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::query::timestamp;
use crate::client::{ClientInner, PaginatedStream, Request};
use crate::models::{Position, Statement};

/// Service for positions and position statements.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let mut positions = client.positions().list_stream(None);
/// while let Some(position) = positions.next().await {
///     let position = position?;
///     println!("{}: {} shares", position.isin, position.quantity);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PositionsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing positions.
#[derive(Debug, Default, Clone, Serialize)]
pub struct PositionsQuery {
    /// Filter by instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query parameters for listing position statements.
#[derive(Debug, Default, Clone, Serialize)]
pub struct StatementsQuery {
    /// Filter by instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Filter by statement type (`order_buy`, `order_sell`, `split`, ...)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<String>,
    /// Statements on or after this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub from: Option<DateTime<Utc>>,
    /// Statements before this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub to: Option<DateTime<Utc>>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl PositionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream current positions.
    pub fn list_stream(&self, query: Option<PositionsQuery>) -> PaginatedStream<Position> {
        let request = Request::get("positions").with_filter(query.as_ref());
        self.inner.stream(&self.inner.trading, request)
    }

    /// Stream position statements.
    pub fn statements(&self, query: Option<StatementsQuery>) -> PaginatedStream<Statement> {
        let request = Request::get("positions/statements").with_filter(query.as_ref());
        self.inner.stream(&self.inner.trading, request)
    }
}
