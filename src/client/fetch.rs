//! Single-resource requests.
//!
//! The non-streaming counterpart of [`PaginatedStream`](super::PaginatedStream):
//! one request, one envelope, no cursor handling.

use serde::de::DeserializeOwned;

use super::transport::{Request, Transport};
use crate::Result;

/// Send `request` and decode the envelope's `results` as a single record.
pub async fn fetch_one<T, R>(transport: &R, request: &Request) -> Result<T>
where
    T: DeserializeOwned,
    R: Transport + ?Sized,
{
    let envelope = transport.execute(request).await?;
    envelope.decode_one()
}

/// Send `request` for its side effect only.
///
/// The response envelope is still parsed, so a malformed reply is reported,
/// but its payload is dropped.
pub async fn fetch_discard<R>(transport: &R, request: &Request) -> Result<()>
where
    R: Transport + ?Sized,
{
    transport.execute(request).await.map(drop)
}
