//! Position and position statement models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::Isin;

/// A position currently held in the account.
///
/// Prices are integers in hundredths of a cent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Instrument
    pub isin: Isin,
    /// Instrument title
    #[serde(default)]
    pub isin_title: Option<String>,
    /// Number of shares held
    pub quantity: i64,
    /// Average buy price
    #[serde(default)]
    pub buy_price_avg: Option<i64>,
    /// Estimated value of the whole position
    #[serde(default)]
    pub estimated_price_total: Option<i64>,
    /// Estimated price per share
    #[serde(default)]
    pub estimated_price: Option<i64>,
}

impl Position {
    /// Unrealized profit or loss based on the estimated price, if known.
    pub fn unrealized_pnl(&self) -> Option<i64> {
        let cost = self.buy_price_avg?.checked_mul(self.quantity)?;
        self.estimated_price_total?.checked_sub(cost)
    }
}

/// A change to a position, such as a fill or a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement ID
    pub id: String,
    /// Order that caused the change
    #[serde(default)]
    pub order_id: Option<String>,
    /// External reference
    #[serde(default)]
    pub external_id: Option<String>,
    /// Kind of change (`order_buy`, `order_sell`, `split`, ...)
    #[serde(rename = "type")]
    pub statement_type: String,
    /// Shares added or removed
    pub quantity: i64,
    /// Instrument
    pub isin: Isin,
    /// Instrument title
    #[serde(default)]
    pub isin_title: Option<String>,
    /// Booking date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
