//! # lemon-markets-rs
//!
//! An async Rust client for the lemon.markets brokerage APIs.
//!
//! Every list endpoint of the trading and market data APIs is paginated by
//! cursor: each response carries a `next` locator pointing at the following
//! page. This crate turns that chain into a single lazily-consumed
//! [`PaginatedStream`] of typed records, fetched in a background task that
//! stops as soon as the stream is dropped.
//!
//! ## Features
//!
//! - **Account**: account details, withdrawals, bank statements, documents
//! - **Orders**: place, activate, cancel and list orders
//! - **Positions**: current positions and position statements
//! - **Market Data**: instruments, venues, quotes, OHLC bars and trades
//! - **Realtime**: tokens for the realtime quote feed
//! - **Testable**: every request goes through the [`Transport`] trait, so tests
//!   can substitute scripted responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures_util::StreamExt;
//! use lemon_markets_rs::{Environment, LemonClient};
//!
//! #[tokio::main]
//! async fn main() -> lemon_markets_rs::Result<()> {
//!     let client = LemonClient::new("your-api-key", Environment::Paper)?;
//!
//!     let account = client.account().get().await?;
//!     println!("Cash to invest: {:?}", account.cash_to_invest);
//!
//!     let mut orders = client.orders().list_stream(None);
//!     while let Some(order) = orders.next().await {
//!         let order = order?;
//!         println!("{} {:?} {:?}", order.id, order.side, order.status);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! A stream yields at most one error, always as its last item. Use
//! [`Error::kind`] to tell server-side rejections from network trouble:
//!
//! ```rust,no_run
//! use lemon_markets_rs::{ErrorKind, LemonClient, OrderId};
//!
//! # async fn example(client: LemonClient) {
//! match client.orders().get(&OrderId::new("ord_missing")).await {
//!     Ok(order) => println!("{:?}", order.status),
//!     Err(e) if e.kind() == ErrorKind::Domain => println!("rejected: {e}"),
//!     Err(e) => println!("request failed: {e}"),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use error::{ApiError, Error, ErrorKind, Result};
pub use models::{Environment, Isin, Mic, OrderId};
pub use client::{ClientConfig, LemonClient, PaginatedStream, Request, Transport};

/// Prelude module for convenient imports.
///
/// ```rust
/// use lemon_markets_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ApiError, Error, ErrorKind, Result};
    pub use crate::models::{
        // Primitives
        Environment, Isin, Mic, OrderId,
        // Enums
        InstrumentType, OhlcPeriod, OrderSide, OrderStatus, OrderType, Sorting,
        // Records
        Account, Instrument, NewOrder, NewOrderBuilder, Ohlc, Order, Position, Quote, Trade,
        Venue,
    };
    pub use crate::api::{
        InstrumentsQuery, MarketDataQuery, OrdersQuery, PositionsQuery, StatementsQuery,
    };
    pub use crate::client::{ClientConfig, LemonClient, PaginatedStream};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_creation() {
        let id = OrderId::new("ord_pyPGQhhRDHKrNyF9TQlhjK8mWlvqmJK7ak");
        assert_eq!(id.as_str(), "ord_pyPGQhhRDHKrNyF9TQlhjK8mWlvqmJK7ak");
    }

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Paper.trading_base_url(),
            "https://paper-trading.lemon.markets/v1"
        );
        assert_eq!(
            Environment::Live.trading_base_url(),
            "https://trading.lemon.markets/v1"
        );
    }

    #[test]
    fn test_client_with_config_overrides() {
        let config = ClientConfig::default()
            .with_trading_url("http://127.0.0.1:9000/v1")
            .with_page_buffer(0);
        let client = LemonClient::with_config("key", Environment::Live, config).unwrap();
        assert_eq!(client.config().page_buffer, 1);
        assert_eq!(
            client.config().trading_url.as_deref(),
            Some("http://127.0.0.1:9000/v1")
        );
    }
}
