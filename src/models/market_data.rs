//! Market data models: quotes, OHLC bars and trades.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::primitives::{Isin, Mic};

/// Latest bid/ask quote for an instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Instrument
    pub isin: Isin,
    /// Bid volume
    #[serde(rename = "b_v", default)]
    pub bid_volume: i64,
    /// Ask volume
    #[serde(rename = "a_v", default)]
    pub ask_volume: i64,
    /// Bid price
    #[serde(alias = "b")]
    pub bid: Decimal,
    /// Ask price
    #[serde(alias = "a")]
    pub ask: Decimal,
    /// Quote time
    #[serde(rename = "t")]
    pub time: DateTime<Utc>,
    /// Venue
    pub mic: Mic,
}

impl Quote {
    /// Mid price between bid and ask.
    pub fn mid(&self) -> Decimal {
        (self.bid + self.ask) / Decimal::TWO
    }

    /// Bid/ask spread.
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

/// One open/high/low/close bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ohlc {
    /// Instrument
    pub isin: Isin,
    /// Open
    #[serde(rename = "o")]
    pub open: Decimal,
    /// High
    #[serde(rename = "h")]
    pub high: Decimal,
    /// Low
    #[serde(rename = "l")]
    pub low: Decimal,
    /// Close
    #[serde(rename = "c")]
    pub close: Decimal,
    /// Volume
    #[serde(rename = "v", default)]
    pub volume: i64,
    /// Start of the bar
    #[serde(rename = "t")]
    pub time: DateTime<Utc>,
    /// Venue
    pub mic: Mic,
}

/// A single executed trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Instrument
    pub isin: Isin,
    /// Price
    #[serde(rename = "p")]
    pub price: Decimal,
    /// Volume
    #[serde(rename = "v", default)]
    pub volume: i64,
    /// Execution time
    #[serde(rename = "t")]
    pub time: DateTime<Utc>,
    /// Venue
    pub mic: Mic,
}
