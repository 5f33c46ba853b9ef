//! Client configuration options.

use std::time::Duration;

/// Default capacity of the hand-off channel between a page producer and its
/// consumer.
pub const DEFAULT_PAGE_BUFFER: usize = 1;

/// Configuration for the lemon.markets client.
///
/// # Example
///
/// ```
/// use lemon_markets_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0")
///     .with_page_buffer(16);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Number of records a stream may buffer ahead of its consumer
    pub page_buffer: usize,
    /// Override for the trading base URL
    pub trading_url: Option<String>,
    /// Override for the market data base URL
    pub market_data_url: Option<String>,
    /// Override for the realtime base URL
    pub streaming_url: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("lemon-markets-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            page_buffer: DEFAULT_PAGE_BUFFER,
            trading_url: None,
            market_data_url: None,
            streaming_url: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set how many records a stream may fetch ahead of its consumer.
    ///
    /// Values below one are raised to one.
    pub fn with_page_buffer(mut self, capacity: usize) -> Self {
        self.page_buffer = capacity.max(1);
        self
    }

    /// Point the trading services at a different base URL.
    pub fn with_trading_url(mut self, url: impl Into<String>) -> Self {
        self.trading_url = Some(url.into());
        self
    }

    /// Point the market data services at a different base URL.
    pub fn with_market_data_url(mut self, url: impl Into<String>) -> Self {
        self.market_data_url = Some(url.into());
        self
    }

    /// Point the realtime token service at a different base URL.
    pub fn with_streaming_url(mut self, url: impl Into<String>) -> Self {
        self.streaming_url = Some(url.into());
        self
    }

    /// Effective channel capacity for paginated streams.
    pub(crate) fn stream_capacity(&self) -> usize {
        self.page_buffer.max(1)
    }
}
