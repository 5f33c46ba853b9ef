//! Orders service for order placement and management.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::resource_path;
use crate::client::query::timestamp;
use crate::client::{ClientInner, PaginatedStream, Request};
use crate::models::{NewOrder, Order, OrderId, OrderSide, OrderStatus, OrderType};
use crate::Result;

/// Service for order operations.
///
/// Orders are placed inactive and must be activated before they are routed
/// to the venue.
///
/// # Example
///
/// ```no_run
/// use lemon_markets_rs::models::{NewOrderBuilder, OrderSide};
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let order = NewOrderBuilder::new()
///     .isin("US88160R1014")
///     .side(OrderSide::Buy)
///     .quantity(1)
///     .venue("XMUN")
///     .build()?;
///
/// let placed = client.orders().place(&order).await?;
/// client.orders().activate(&placed.id).await?;
/// println!("Order {} activated", placed.id);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

/// Query parameters for listing orders.
#[derive(Debug, Default, Clone, Serialize)]
pub struct OrdersQuery {
    /// Orders created on or after this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub from: Option<DateTime<Utc>>,
    /// Orders created before this time
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub to: Option<DateTime<Utc>>,
    /// Filter by instrument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isin: Option<String>,
    /// Filter by side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    /// Filter by status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    /// Filter by execution type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    /// Filter by the key that created the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_creation_id: Option<String>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Place a new order. The returned order is inactive.
    pub async fn place(&self, order: &NewOrder) -> Result<Order> {
        let request = Request::post("orders").with_body(order)?;
        self.inner.fetch(&self.inner.trading, request).await
    }

    /// Activate a placed order.
    pub async fn activate(&self, order_id: &OrderId) -> Result<()> {
        let path = format!("{}/activate", resource_path("orders", order_id.as_str()));
        self.inner
            .execute(&self.inner.trading, Request::post(path))
            .await
    }

    /// Get a specific order by ID.
    pub async fn get(&self, order_id: &OrderId) -> Result<Order> {
        let request = Request::get(resource_path("orders", order_id.as_str()));
        self.inner.fetch(&self.inner.trading, request).await
    }

    /// Cancel an order that has not been executed yet.
    pub async fn cancel(&self, order_id: &OrderId) -> Result<()> {
        let request = Request::delete(resource_path("orders", order_id.as_str()));
        self.inner.execute(&self.inner.trading, request).await
    }

    /// Stream all orders matching `query`.
    ///
    /// Pages are fetched lazily as the stream is consumed.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures_util::StreamExt;
    /// use lemon_markets_rs::api::OrdersQuery;
    /// use lemon_markets_rs::models::OrderStatus;
    ///
    /// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
    /// let query = OrdersQuery {
    ///     status: Some(OrderStatus::Executed),
    ///     ..Default::default()
    /// };
    /// let mut stream = client.orders().list_stream(Some(query));
    ///
    /// while let Some(result) = stream.next().await {
    ///     let order = result?;
    ///     println!("Order {}: {:?}", order.id, order.status);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list_stream(&self, query: Option<OrdersQuery>) -> PaginatedStream<Order> {
        let request = Request::get("orders").with_filter(query.as_ref());
        self.inner.stream(&self.inner.trading, request)
    }

    /// Collect all orders matching `query`.
    ///
    /// Follows every page before returning; prefer [`list_stream`](Self::list_stream)
    /// for large histories.
    pub async fn list(&self, query: Option<OrdersQuery>) -> Result<Vec<Order>> {
        self.list_stream(query).try_collect_all().await
    }
}
