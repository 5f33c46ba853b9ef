//! The transport seam between the client and the network.
//!
//! A [`Transport`] performs exactly one authenticated exchange per call and
//! classifies the outcome. The production implementation is
//! [`HttpTransport`](super::HttpTransport); tests substitute scripted ones.

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use serde_json::Value;

pub use reqwest::Method;

use super::envelope::Envelope;
use super::query::Query;
use crate::{Error, Result};

/// One request to be sent by a [`Transport`].
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    /// HTTP method
    pub method: Method,
    /// Either a path relative to the transport's base URL (`orders/ord_123`)
    /// or a complete locator previously returned by the server.
    pub target: String,
    /// Query parameters to append
    pub query: Query,
    /// Optional JSON request body
    pub body: Option<Value>,
}

impl Request {
    /// Create a request without query or body.
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
            query: Query::default(),
            body: None,
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(target: impl Into<String>) -> Self {
        Self::new(Method::GET, target)
    }

    /// Shorthand for a `POST` request.
    pub fn post(target: impl Into<String>) -> Self {
        Self::new(Method::POST, target)
    }

    /// Shorthand for a `DELETE` request.
    pub fn delete(target: impl Into<String>) -> Self {
        Self::new(Method::DELETE, target)
    }

    /// Attach encoded query parameters.
    pub fn with_query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    /// Encode and attach an optional filter struct.
    pub fn with_filter<Q: Serialize>(self, filter: Option<&Q>) -> Result<Self> {
        match filter {
            Some(filter) => Ok(self.with_query(Query::encode(filter)?)),
            None => Ok(self),
        }
    }

    /// Serialize and attach a JSON body.
    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let body = serde_json::to_value(body)
            .map_err(|e| Error::InvalidInput(format!("request body could not be serialized: {e}")))?;
        self.body = Some(body);
        Ok(self)
    }

    /// Returns `true` if the target is a complete locator rather than a
    /// relative path.
    pub fn is_absolute(&self) -> bool {
        url::Url::parse(&self.target).is_ok()
    }
}

/// Capability that performs one authenticated exchange.
///
/// Implementations own the credential and base URL; callers never pass
/// either per call. Outcomes are classified as:
///
/// - success status: the raw body is returned
/// - the reserved domain-error status: [`Error::Api`]
/// - any other status: [`Error::Status`]
/// - network failure or unreadable body: [`Error::Http`] / [`Error::Timeout`]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and return the raw body of a successful response.
    async fn send(&self, request: &Request) -> Result<Bytes>;

    /// Send the request and decode the response envelope.
    async fn execute(&self, request: &Request) -> Result<Envelope> {
        let body = self.send(request).await?;
        Envelope::from_slice(&body)
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(&self, request: &Request) -> Result<Bytes> {
        (**self).send(request).await
    }

    async fn execute(&self, request: &Request) -> Result<Envelope> {
        (**self).execute(request).await
    }
}
