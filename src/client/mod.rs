//! HTTP client, transport and pagination engine for the lemon.markets APIs.
//!
//! This module provides the main entry point [`LemonClient`] together with the
//! building blocks it is made of:
//!
//! - [`Transport`]: one authenticated exchange, outcome classified
//! - [`Envelope`]: the response wrapper every endpoint shares
//! - [`PaginatedStream`]: lazy, cancellable iteration over cursor-linked pages
//! - [`fetch_one`]: the single-record counterpart
//!
//! # Example
//!
//! ```no_run
//! use lemon_markets_rs::{Environment, LemonClient};
//!
//! # async fn example() -> lemon_markets_rs::Result<()> {
//! let client = LemonClient::new("your-api-key", Environment::Paper)?;
//! let account = client.account().get().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod envelope;
mod fetch;
mod http;
pub mod paginated;
pub mod query;
mod transport;

pub use config::{ClientConfig, DEFAULT_PAGE_BUFFER};
pub use envelope::Envelope;
pub use fetch::{fetch_discard, fetch_one};
pub use http::{
    HttpTransport, LemonClient, DOMAIN_ERROR_STATUS, MARKET_DATA_BASE_URL, STREAMING_BASE_URL,
};
pub use paginated::PaginatedStream;
pub use query::Query;
pub use transport::{Method, Request, Transport};
pub(crate) use http::ClientInner;
