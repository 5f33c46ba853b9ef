//! Instruments service for instrument and venue lookups.

use std::sync::Arc;

use serde::Serialize;

use crate::client::{ClientInner, PaginatedStream, Request};
use crate::models::{Instrument, InstrumentType, Venue};

/// Service for instrument and trading venue lookups.
///
/// Both endpoints live on the market data API.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lemon_markets_rs::api::InstrumentsQuery;
///
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let query = InstrumentsQuery::search("tesla");
/// let mut instruments = client.instruments().list_stream(Some(query));
/// while let Some(instrument) = instruments.next().await {
///     let instrument = instrument?;
///     println!("{} {:?}", instrument.isin, instrument.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct InstrumentsService {
    inner: Arc<ClientInner>,
}

/// Query parameters for searching instruments.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InstrumentsQuery {
    /// Filter by one or more ISINs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub isin: Vec<String>,
    /// Free-text search over name, title, symbol and WKN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Filter by instrument type
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<InstrumentType>,
    /// Filter by venue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mic: Option<String>,
    /// Filter by trading currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// When set, only instruments that can be traded. There is no filter
    /// for untradable ones.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub tradable: bool,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl InstrumentsQuery {
    /// A free-text search.
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search: Some(text.into()),
            ..Default::default()
        }
    }

    /// A lookup of specific ISINs.
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
}

/// Query parameters for listing venues.
#[derive(Debug, Default, Clone, Serialize)]
pub struct VenuesQuery {
    /// Filter by one or more MICs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mic: Vec<String>,
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl InstrumentsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Stream instruments matching `query`.
    pub fn list_stream(&self, query: Option<InstrumentsQuery>) -> PaginatedStream<Instrument> {
        let request = Request::get("instruments").with_filter(query.as_ref());
        self.inner.stream(&self.inner.market_data, request)
    }

    /// Stream trading venues.
    pub fn venues(&self, query: Option<VenuesQuery>) -> PaginatedStream<Venue> {
        let request = Request::get("venues").with_filter(query.as_ref());
        self.inner.stream(&self.inner.market_data, request)
    }
}
