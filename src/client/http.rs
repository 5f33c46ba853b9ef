//! HTTP client implementation for the lemon.markets API.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

use crate::api::{
    AccountService, InstrumentsService, MarketDataService, OrdersService, PositionsService,
    StreamingService,
};
use crate::error::ApiError;
use crate::{Environment, Error, Result};

use super::config::ClientConfig;
use super::fetch::{fetch_discard, fetch_one};
use super::paginated::{PaginatedStream, PaginatedStreamBuilder};
use super::transport::{Request, Transport};

/// HTTP status the server reserves for structured business errors.
pub const DOMAIN_ERROR_STATUS: u16 = 400;

/// Base URL of the market data API.
pub const MARKET_DATA_BASE_URL: &str = "https://data.lemon.markets/v1";

/// Base URL of the realtime API.
pub const STREAMING_BASE_URL: &str = "https://realtime.lemon.markets/v1";

/// [`Transport`] backed by `reqwest`.
///
/// Holds the API key and base URL; both are read-only, so one instance can
/// serve any number of concurrent streams.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl HttpTransport {
    /// Create a transport for `base_url` authenticating with `api_key`.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// The base URL relative targets are joined onto.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve the final URL for `request`.
    ///
    /// Complete locators (as found in an envelope's `next` field) are used
    /// verbatim; anything else is appended to the base URL.
    pub fn resolve(&self, request: &Request) -> Result<Url> {
        let mut url = match Url::parse(&request.target) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.base_url.trim_end_matches('/');
                let path = request.target.trim_start_matches('/');
                Url::parse(&format!("{base}/{path}"))?
            }
            Err(e) => return Err(e.into()),
        };
        request.query.apply(&mut url);
        Ok(url)
    }

    fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.api_key.expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &Request) -> Result<Bytes> {
        let url = self.resolve(request)?;
        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .headers(self.build_headers()?);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(Error::from_reqwest)?;
        handle_response(response).await
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

/// Classify a response by status and return the body of a successful one.
async fn handle_response(response: reqwest::Response) -> Result<Bytes> {
    let status = response.status();
    let body = response.bytes().await.map_err(Error::from_reqwest)?;

    if status.is_success() {
        return Ok(body);
    }

    let status_code = status.as_u16();
    if status_code == DOMAIN_ERROR_STATUS {
        if let Some(api) = parse_api_error(&body) {
            tracing::warn!(code = %api.code, message = %api.message, "request rejected by server");
            return Err(Error::Api(api));
        }
    }

    tracing::debug!(status = status_code, "unexpected response status");
    Err(Error::Status {
        status: status_code,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Parse a domain error body. Any JSON object qualifies; missing fields
/// decode as empty.
fn parse_api_error(body: &[u8]) -> Option<ApiError> {
    match serde_json::from_slice::<serde_json::Value>(body).ok()? {
        value @ serde_json::Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    }
}

/// The main client for interacting with the lemon.markets APIs.
///
/// The client holds one transport per API (trading, market data, realtime)
/// and hands out lightweight service structs.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use lemon_markets_rs::{Environment, LemonClient};
///
/// # async fn example() -> lemon_markets_rs::Result<()> {
/// let client = LemonClient::new("your-api-key", Environment::Paper)?;
///
/// let account = client.account().get().await?;
/// println!("Cash to invest: {:?}", account.cash_to_invest);
///
/// let mut positions = client.positions().list_stream(None);
/// while let Some(position) = positions.next().await {
///     println!("{:?}", position?);
/// }
/// # Ok(())
/// # }
/// ```
pub struct LemonClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) trading: Arc<dyn Transport>,
    pub(crate) market_data: Arc<dyn Transport>,
    pub(crate) streaming: Arc<dyn Transport>,
    pub(crate) config: ClientConfig,
}

impl LemonClient {
    /// Create a client for `env` with default configuration.
    pub fn new(api_key: impl Into<String>, env: Environment) -> Result<Self> {
        Self::with_config(api_key, env, ClientConfig::default())
    }

    /// Create a client for `env` with custom configuration.
    pub fn with_config(
        api_key: impl Into<String>,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let trading_url = config
            .trading_url
            .clone()
            .unwrap_or_else(|| env.trading_base_url().to_string());
        let market_data_url = config
            .market_data_url
            .clone()
            .unwrap_or_else(|| MARKET_DATA_BASE_URL.to_string());
        let streaming_url = config
            .streaming_url
            .clone()
            .unwrap_or_else(|| STREAMING_BASE_URL.to_string());

        tracing::debug!(environment = %env, trading = %trading_url, "creating lemon.markets client");

        Ok(Self::with_transports(
            Arc::new(HttpTransport::new(http.clone(), trading_url, api_key.clone())),
            Arc::new(HttpTransport::new(http.clone(), market_data_url, api_key.clone())),
            Arc::new(HttpTransport::new(http, streaming_url, api_key)),
            config,
        ))
    }

    /// Create a client from the environment.
    ///
    /// Reads `LEMON_API_KEY` (required) and `LEMON_ENVIRONMENT`
    /// (`paper` or `live`, defaults to `paper`).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("LEMON_API_KEY")
            .map_err(|_| Error::Config("LEMON_API_KEY is not set".to_string()))?;
        let env = match std::env::var("LEMON_ENVIRONMENT") {
            Ok(value) => value.parse()?,
            Err(_) => Environment::Paper,
        };
        Self::new(api_key, env)
    }

    /// Create a client over caller-supplied transports.
    pub fn with_transports(
        trading: Arc<dyn Transport>,
        market_data: Arc<dyn Transport>,
        streaming: Arc<dyn Transport>,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                trading,
                market_data,
                streaming,
                config,
            }),
        }
    }

    /// Get the account service.
    pub fn account(&self) -> AccountService {
        AccountService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the positions service.
    pub fn positions(&self) -> PositionsService {
        PositionsService::new(self.inner.clone())
    }

    /// Get the instruments and venues service.
    pub fn instruments(&self) -> InstrumentsService {
        InstrumentsService::new(self.inner.clone())
    }

    /// Get the market data service.
    pub fn market_data(&self) -> MarketDataService {
        MarketDataService::new(self.inner.clone())
    }

    /// Get the realtime token service.
    pub fn streaming(&self) -> StreamingService {
        StreamingService::new(self.inner.clone())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Stream a list endpoint through `transport`.
    pub(crate) fn stream<T>(
        &self,
        transport: &Arc<dyn Transport>,
        request: Result<Request>,
    ) -> PaginatedStream<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        PaginatedStreamBuilder::new(transport.clone(), request)
            .buffer(self.config.stream_capacity())
            .build()
    }

    /// Fetch a single record through `transport`.
    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        transport: &Arc<dyn Transport>,
        request: Request,
    ) -> Result<T> {
        fetch_one(transport.as_ref(), &request).await
    }

    /// Send a request whose payload is not needed.
    pub(crate) async fn execute(&self, transport: &Arc<dyn Transport>, request: Request) -> Result<()> {
        fetch_discard(transport.as_ref(), &request).await
    }
}

impl Clone for LemonClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for LemonClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LemonClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Query;

    fn transport() -> HttpTransport {
        HttpTransport::new(
            reqwest::Client::new(),
            "https://paper-trading.lemon.markets/v1",
            "secret-key",
        )
    }

    #[test]
    fn test_resolve_relative_target() {
        let url = transport().resolve(&Request::get("orders/ord_123")).unwrap();
        assert_eq!(url.as_str(), "https://paper-trading.lemon.markets/v1/orders/ord_123");

        let url = transport().resolve(&Request::get("/positions")).unwrap();
        assert_eq!(url.as_str(), "https://paper-trading.lemon.markets/v1/positions");
    }

    #[test]
    fn test_resolve_full_locator_verbatim() {
        let locator = "https://paper-trading.lemon.markets/v1/orders/?limit=100&page=2";
        let url = transport().resolve(&Request::get(locator)).unwrap();
        assert_eq!(url.as_str(), locator);
    }

    #[test]
    fn test_resolve_appends_query() {
        let request = Request::get("instruments").with_query(Query::new().push("mic", "XETR"));
        let url = transport().resolve(&request).unwrap();
        assert_eq!(url.query(), Some("mic=XETR"));
    }

    #[test]
    fn test_debug_hides_api_key() {
        let debug = format!("{:?}", transport());
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn test_parse_api_error_accepts_partial_object() {
        let api = parse_api_error(br#"{"error_message":"cannot place/activate buy order"}"#).unwrap();
        assert_eq!(api.message, "cannot place/activate buy order");
        assert!(api.code.is_empty());

        assert!(parse_api_error(b"bad request").is_none());
        assert!(parse_api_error(b"[]").is_none());
        assert!(parse_api_error(b"\"error\"").is_none());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let err = LemonClient::new("  ", Environment::Paper).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
