//! Enumeration types for the lemon.markets API.
//!
//! Values the server may extend are decoded leniently: unknown variants map
//! to `Unknown` instead of failing the whole page.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed but not yet activated
    Inactive,
    /// Activated, waiting to be routed
    Activated,
    /// Routed to the venue
    Open,
    /// Partially executed
    InProgress,
    /// Cancellation requested
    Canceling,
    /// Fully executed
    Executed,
    /// Cancelled
    Canceled,
    /// Expired before execution
    Expired,
    /// Rejected by the venue
    Rejected,
    /// Status not known to this client
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Returns `true` if the order can no longer change.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            OrderStatus::Executed | OrderStatus::Canceled | OrderStatus::Expired | OrderStatus::Rejected
        )
    }
}

/// Execution type of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Market order
    Market,
    /// Limit order
    Limit,
    /// Stop order
    Stop,
    /// Stop limit order
    StopLimit,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}

/// Kind of tradable instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentType {
    /// Stock
    Stock,
    /// Bond
    Bond,
    /// Fund
    Fund,
    /// Exchange traded fund
    Etf,
    /// Warrant
    Warrant,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}

/// Result ordering for historical market data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sorting {
    /// Oldest first
    Asc,
    /// Newest first
    Desc,
}

/// Aggregation period of OHLC bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OhlcPeriod {
    /// One bar per minute
    Minute,
    /// One bar per hour
    Hour,
    /// One bar per day
    Day,
}

impl OhlcPeriod {
    /// Path segment used by the OHLC endpoint.
    pub fn as_str(&self) -> &'static str {
        match self {
            OhlcPeriod::Minute => "m1",
            OhlcPeriod::Hour => "h1",
            OhlcPeriod::Day => "d1",
        }
    }
}

impl fmt::Display for OhlcPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of bank statement entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BankStatementType {
    /// Money paid into the account
    PayIn,
    /// Money paid out of the account
    PayOut,
    /// Cash spent on a buy order
    OrderBuy,
    /// Cash received from a sell order
    OrderSell,
    /// End of day balance
    EodBalance,
    /// Dividend payment
    Dividend,
    /// Refunded tax
    TaxRefunded,
    /// Type not known to this client
    #[serde(other)]
    Unknown,
}
