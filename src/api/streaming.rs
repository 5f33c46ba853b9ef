//! Realtime authentication service.

use std::sync::Arc;

use crate::client::{ClientInner, Request};
use crate::models::AuthenticationToken;
use crate::Result;

/// Service for obtaining realtime feed credentials.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: lemon_markets_rs::LemonClient) -> lemon_markets_rs::Result<()> {
/// let token = client.streaming().token().await?;
/// println!("token for {} expires at {:?}", token.user_id, token.expires());
/// # Ok(())
/// # }
/// ```
pub struct StreamingService {
    inner: Arc<ClientInner>,
}

impl StreamingService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Request a short-lived token for the realtime feed.
    ///
    /// This endpoint answers with a bare object rather than an envelope.
    pub async fn token(&self) -> Result<AuthenticationToken> {
        let body = self.inner.streaming.send(&Request::post("auth")).await?;
        let token: AuthenticationToken = serde_json::from_slice(&body)?;
        tracing::debug!(user_id = %token.user_id, expires_at = token.expires_at, "obtained realtime token");
        Ok(token)
    }
}
