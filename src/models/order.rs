//! Order models for placing and managing trades.
//!
//! Prices and amounts on the trading API are integers in hundredths of a
//! cent: `1_000_000` is 100.00 EUR.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::*;
use super::primitives::{Isin, OrderId};

/// A new order to be placed.
///
/// Use [`NewOrderBuilder`] to construct orders with validation.
///
/// # Example
///
/// ```
/// use lemon_markets_rs::models::{NewOrderBuilder, OrderSide};
///
/// let order = NewOrderBuilder::new()
///     .isin("US88160R1014")
///     .side(OrderSide::Buy)
///     .quantity(1)
///     .venue("XMUN")
///     .limit_price(2_000_000)
///     .build()
///     .unwrap();
/// assert_eq!(order.quantity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Instrument to trade
    pub isin: Isin,
    /// Buy or sell
    pub side: OrderSide,
    /// Number of shares
    pub quantity: i64,
    /// Expiry; the server default applies when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Venue MIC; the server default applies when omitted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Stop price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<i64>,
    /// Limit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<i64>,
    /// Free-text notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Client-provided idempotency key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency: Option<String>,
}

/// Builder for creating new orders with validation.
#[derive(Debug, Default, Clone)]
pub struct NewOrderBuilder {
    isin: Option<Isin>,
    side: Option<OrderSide>,
    quantity: Option<i64>,
    expires_at: Option<DateTime<Utc>>,
    venue: Option<String>,
    stop_price: Option<i64>,
    limit_price: Option<i64>,
    notes: Option<String>,
    idempotency: Option<String>,
}

impl NewOrderBuilder {
    /// Create a new order builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the instrument.
    pub fn isin(mut self, isin: impl Into<Isin>) -> Self {
        self.isin = Some(isin.into());
        self
    }

    /// Set the side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the number of shares.
    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Set the expiry.
    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Set the venue MIC.
    pub fn venue(mut self, mic: impl Into<String>) -> Self {
        self.venue = Some(mic.into());
        self
    }

    /// Set the stop price.
    pub fn stop_price(mut self, price: i64) -> Self {
        self.stop_price = Some(price);
        self
    }

    /// Set the limit price.
    pub fn limit_price(mut self, price: i64) -> Self {
        self.limit_price = Some(price);
        self
    }

    /// Attach notes.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Set an idempotency key.
    pub fn idempotency(mut self, key: impl Into<String>) -> Self {
        self.idempotency = Some(key.into());
        self
    }

    /// Build the order, validating all fields.
    pub fn build(self) -> crate::Result<NewOrder> {
        let isin = self
            .isin
            .filter(|isin| !isin.as_str().trim().is_empty())
            .ok_or_else(|| crate::Error::InvalidInput("isin is required".to_string()))?;

        let side = self
            .side
            .ok_or_else(|| crate::Error::InvalidInput("side is required".to_string()))?;

        let quantity = self
            .quantity
            .ok_or_else(|| crate::Error::InvalidInput("quantity is required".to_string()))?;
        if quantity <= 0 {
            return Err(crate::Error::InvalidInput(
                "quantity must be positive".to_string(),
            ));
        }

        if self.stop_price.is_some_and(|p| p <= 0) || self.limit_price.is_some_and(|p| p <= 0) {
            return Err(crate::Error::InvalidInput(
                "prices must be positive".to_string(),
            ));
        }

        Ok(NewOrder {
            isin,
            side,
            quantity,
            expires_at: self.expires_at,
            venue: self.venue,
            stop_price: self.stop_price,
            limit_price: self.limit_price,
            notes: self.notes,
            idempotency: self.idempotency,
        })
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order ID
    pub id: OrderId,
    /// Instrument
    pub isin: Isin,
    /// Instrument title
    #[serde(default)]
    pub isin_title: Option<String>,
    /// Expiry
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Buy or sell
    pub side: OrderSide,
    /// Number of shares
    pub quantity: i64,
    /// Stop price
    #[serde(default)]
    pub stop_price: Option<i64>,
    /// Limit price
    #[serde(default)]
    pub limit_price: Option<i64>,
    /// Estimated price per share
    #[serde(default)]
    pub estimated_price: Option<i64>,
    /// Estimated total price
    #[serde(default)]
    pub estimated_price_total: Option<i64>,
    /// Venue MIC
    #[serde(default)]
    pub venue: Option<String>,
    /// Current status
    pub status: OrderStatus,
    /// Execution type
    #[serde(rename = "type", default = "unknown_order_type")]
    pub order_type: OrderType,
    /// Shares executed so far
    #[serde(default)]
    pub executed_quantity: Option<i64>,
    /// Average execution price
    #[serde(default)]
    pub executed_price: Option<i64>,
    /// Total execution price
    #[serde(default)]
    pub executed_price_total: Option<i64>,
    /// Execution time
    #[serde(default)]
    pub executed_at: Option<DateTime<Utc>>,
    /// Rejection time
    #[serde(default)]
    pub rejected_at: Option<DateTime<Utc>>,
    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Order fee
    #[serde(default)]
    pub charge: Option<i64>,
    /// When the fee is charged
    #[serde(default)]
    pub chargeable_at: Option<DateTime<Utc>>,
    /// Key that created the order
    #[serde(default)]
    pub key_creation_id: Option<String>,
    /// Key that activated the order
    #[serde(default)]
    pub key_activation_id: Option<String>,
    /// Cost disclosure
    #[serde(default)]
    pub regulatory_information: Option<RegulatoryInformation>,
    /// Idempotency key supplied on placement
    #[serde(default)]
    pub idempotency: Option<String>,
}

fn unknown_order_type() -> OrderType {
    OrderType::Unknown
}

impl Order {
    /// Returns `true` if the order still needs activation.
    pub fn needs_activation(&self) -> bool {
        self.status == OrderStatus::Inactive
    }

    /// Returns `true` if the order can no longer change.
    pub fn is_final(&self) -> bool {
        self.status.is_final()
    }
}

/// Ex-ante cost disclosure attached to a placed order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegulatoryInformation {
    /// Entry costs
    pub costs_entry: Option<i64>,
    /// Entry costs as a percentage
    pub costs_entry_pct: Option<String>,
    /// Running costs
    pub costs_running: Option<i64>,
    /// Running costs as a percentage
    pub costs_running_pct: Option<String>,
    /// Product costs
    pub costs_product: Option<i64>,
    /// Product costs as a percentage
    pub costs_product_pct: Option<String>,
    /// Exit costs
    pub costs_exit: Option<i64>,
    /// Exit costs as a percentage
    pub costs_exit_pct: Option<String>,
    /// Yield reduction in the first year
    pub yield_reduction_year: Option<i64>,
    /// Yield reduction in the first year as a percentage
    pub yield_reduction_year_pct: Option<String>,
    /// Yield reduction in following years
    pub yield_reduction_year_following: Option<i64>,
    /// Yield reduction in following years as a percentage
    pub yield_reduction_year_following_pct: Option<String>,
    /// Yield reduction in the exit year
    pub yield_reduction_year_exit: Option<i64>,
    /// Yield reduction in the exit year as a percentage
    pub yield_reduction_year_exit_pct: Option<String>,
    /// Assumed holding period
    pub estimated_holding_duration_years: Option<String>,
    /// Total yield reduction over the holding period
    pub estimated_yield_reduction_total: Option<i64>,
    /// Total yield reduction as a percentage
    pub estimated_yield_reduction_total_pct: Option<String>,
    /// Link to the key investor information document
    #[serde(rename = "KIID")]
    pub kiid: Option<String>,
    /// Legal disclaimer text
    pub legal_disclaimer: Option<String>,
}
