//! Market data service for quotes, OHLC bars and trades.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::client::query::timestamp;
use crate::client::{ClientInner, PaginatedStream, Request};
use crate::models::{Ohlc, OhlcPeriod, Quote, Sorting, Trade};

/// Service for historical and latest market data.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lemon_markets_rs::api::QuotesQuery;
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let query = QuotesQuery::isins(["US88160R1014"]).with_mic("XMUN");
/// let mut quotes = client.market_data().quotes(query);
/// while let Some(quote) = quotes.next().await {
///     let quote = quote?;
///     println!("{} bid {} ask {}", quote.isin, quote.bid, quote.ask);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MarketDataService {
    inner: Arc<ClientInner>,
}

/// Query parameters shared by the quote, OHLC and trade endpoints.
#[derive(Debug, Default, Clone, Serialize)]
pub struct MarketDataQuery {
    /// Instruments to fetch
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub isin: Vec<String>,
    /// Venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<String>,
    /// Start of the time range
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub from: Option<DateTime<Utc>>,
    /// End of the time range
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "timestamp::serialize")]
    pub to: Option<DateTime<Utc>>,
    /// Result ordering
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Sorting>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Query parameters for quotes.
pub type QuotesQuery = MarketDataQuery;
/// Query parameters for OHLC bars.
pub type OhlcQuery = MarketDataQuery;
/// Query parameters for trades.
pub type TradesQuery = MarketDataQuery;

impl MarketDataQuery {
    /// A query for the given instruments.
    pub fn isins<I, S>(isins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            isin: isins.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    /// Restrict to one venue.
    pub fn with_mic(mut self, mic: impl Into<String>) -> Self {
        self.mic = Some(mic.into());
        self
    }

    /// Restrict to a time range.
    pub fn with_range(mut self, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Set the result ordering.
    pub fn with_sorting(mut self, sorting: Sorting) -> Self {
        self.sorting = Some(sorting);
        self
    }
}

impl MarketDataService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream quotes.
    pub fn quotes(&self, query: QuotesQuery) -> PaginatedStream<Quote> {
        let request = Request::get("quotes").with_filter(Some(&query));
        self.inner.stream(&self.inner.market_data, request)
    }

    /// Stream OHLC bars of the given period.
    pub fn ohlc(&self, period: OhlcPeriod, query: OhlcQuery) -> PaginatedStream<Ohlc> {
        let request = Request::get(format!("ohlc/{period}")).with_filter(Some(&query));
        self.inner.stream(&self.inner.market_data, request)
    }

    /// Stream one-minute bars.
    pub fn ohlc_per_minute(&self, query: OhlcQuery) -> PaginatedStream<Ohlc> {
        self.ohlc(OhlcPeriod::Minute, query)
    }

    /// Stream one-hour bars.
    pub fn ohlc_per_hour(&self, query: OhlcQuery) -> PaginatedStream<Ohlc> {
        self.ohlc(OhlcPeriod::Hour, query)
    }

    /// Stream daily bars.
    pub fn ohlc_per_day(&self, query: OhlcQuery) -> PaginatedStream<Ohlc> {
        self.ohlc(OhlcPeriod::Day, query)
    }

    /// Stream trades.
    pub fn trades(&self, query: TradesQuery) -> PaginatedStream<Trade> {
        let request = Request::get("trades").with_filter(Some(&query));
        self.inner.stream(&self.inner.market_data, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Query;

    #[test]
    fn test_market_data_query_builders() {
        let query = QuotesQuery::isins(["US88160R1014", "DE0007664039"])
            .with_mic("XMUN")
            .with_sorting(Sorting::Desc);
        let encoded = Query::encode(&query).unwrap();
        assert_eq!(
            encoded.to_query_string(),
            "isin=US88160R1014&isin=DE0007664039&mic=XMUN&sorting=desc"
        );
    }
}
